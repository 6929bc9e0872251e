//! Distribution-reference grammar validation.
//!
//! Anchored regular expressions for image references: a registry host
//! (DNS-like, optional port), a repository path (lowercase alphanumerics
//! joined by `/`, `.`, `_`, `__`, `-`), an optional tag, and an optional
//! digest. Expressions are compiled once and shared across threads.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;


/// Full reference grammar, anchored, with capture groups for the name,
/// tag, and digest components.
const REFERENCE_EXPR: &str = r"^((?:(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])(?:(?:\.(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]))+)?(?::[0-9]+)?/)?[a-z0-9]+(?:(?:(?:[._]|__|[-]*)[a-z0-9]+)+)?(?:(?:/[a-z0-9]+(?:(?:(?:[._]|__|[-]*)[a-z0-9]+)+)?)+)?)(?::([\w][\w.-]{0,127}))?(?:@([A-Za-z][A-Za-z0-9]*(?:[-_+.][A-Za-z][A-Za-z0-9]*)*[:][[:xdigit:]]{32,}))?$";

/// Tag grammar: alphanumerics, `.`, `_`, `-`, at most 128 characters,
/// never starting with `.` or `-`.
const TAG_EXPR: &str = r"^[\w][\w.-]{0,127}$";

fn compile(expr: &str) -> Regex {
    RegexBuilder::new(expr)
        .size_limit(10 * (1 << 21))
        .build()
        .expect("grammar expression must compile")
}

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(REFERENCE_EXPR))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(TAG_EXPR))
}

/// Raw components captured from a reference string.
///
/// The name still contains the registry host when one was given; splitting
/// the host from the repository path is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceParts {
    pub name: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
}

/// Checks a tag against the tag grammar.
///
/// # Examples
///
/// ```
/// use libimageref::grammar;
///
/// assert!(grammar::is_valid_tag("v1.2.3"));
/// assert!(!grammar::is_valid_tag("-12@3%44-"));
/// ```
pub fn is_valid_tag(tag: &str) -> bool {
    tag_regex().is_match(tag)
}

/// Matches a raw string against the full reference grammar.
///
/// Returns `None` when the input violates the grammar anywhere, including
/// stray characters (`%`, `!`, `::`) and uppercase repository segments.
pub fn match_reference(input: &str) -> Option<ReferenceParts> {
    let caps = reference_regex().captures(input)?;

    Some(ReferenceParts {
        name: caps.get(1)?.as_str().to_string(),
        tag: caps.get(2).map(|m| m.as_str().to_string()),
        digest: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

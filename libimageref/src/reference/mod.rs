//! Image reference expansion and splitting.
//!
//! Normalizes shorthand image references like `nginx` into their fully
//! qualified form `docker.io/library/nginx:latest`, and splits fully
//! qualified references back into a (name, tag) pair.

use crate::error::{ImageRefError, Result};
use crate::grammar;
use std::fmt;
use std::str::FromStr;


/// Registry assumed when the reference names none.
const DEFAULT_REGISTRY: &str = "docker.io";

/// Namespace assumed for single-segment repositories on the default registry.
const DEFAULT_NAMESPACE: &str = "library";

/// Tag assumed when the reference carries neither tag nor digest.
const DEFAULT_TAG: &str = "latest";

/// A fully expanded image reference.
///
/// Parsing applies the registry defaulting rules, so the registry and
/// repository are always explicit, and a tag is present unless the
/// reference was addressed by digest. The rendered form is stable and
/// splits back cleanly with [`split_image_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    registry: String,
    repository: String,
    tag: Option<String>,
    digest: Option<String>,
}

impl FromStr for ImageReference {
    type Err = ImageRefError;

    /// Parses a raw reference, expanding any shorthand.
    ///
    /// Defaulting rules, in order:
    ///
    /// 1. the first path segment is taken as the registry host only when it
    ///    contains `.` or `:` or equals `localhost`; otherwise the registry
    ///    is `docker.io`;
    /// 2. a single-segment repository on the default registry is namespaced
    ///    under `library/`;
    /// 3. when neither tag nor digest is present, the tag is `latest`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimageref::ImageReference;
    /// use std::str::FromStr;
    ///
    /// let reference = ImageReference::from_str("nginx").unwrap();
    /// assert_eq!(reference.to_string(), "docker.io/library/nginx:latest");
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let parts = grammar::match_reference(s)
            .ok_or_else(|| ImageRefError::validation(format!("Invalid image reference: {}", s)))?;

        let (registry, path) = match parts.name.split_once('/') {
            Some((first, rest)) if is_registry_host(first) => {
                (first.to_string(), rest.to_string())
            }
            _ => (DEFAULT_REGISTRY.to_string(), parts.name),
        };

        let repository = if registry == DEFAULT_REGISTRY && !path.contains('/') {
            format!("{}/{}", DEFAULT_NAMESPACE, path)
        } else {
            path
        };

        let tag = match (parts.tag, &parts.digest) {
            (None, None) => Some(DEFAULT_TAG.to_string()),
            (tag, _) => tag,
        };

        Ok(ImageReference {
            registry,
            repository,
            tag,
            digest: parts.digest,
        })
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.registry, self.repository)?;
        if let Some(tag) = &self.tag {
            write!(f, ":{}", tag)?;
        }
        if let Some(digest) = &self.digest {
            write!(f, "@{}", digest)?;
        }
        Ok(())
    }
}

impl ImageReference {
    /// Returns the registry host of the reference.
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Returns the repository path of the reference.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the tag of the reference, if present.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns the digest of the reference, if present.
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Returns a copy of this reference addressed by `tag`.
    ///
    /// Any existing tag is replaced and any digest is dropped, so the
    /// result always renders as `registry/repository:tag`.
    pub fn with_tag(&self, tag: impl Into<String>) -> Self {
        Self {
            registry: self.registry.clone(),
            repository: self.repository.clone(),
            tag: Some(tag.into()),
            digest: None,
        }
    }
}

/// The first path segment addresses a registry only when it cannot be a
/// plain repository namespace.
fn is_registry_host(segment: &str) -> bool {
    segment.contains('.') || segment.contains(':') || segment == "localhost"
}

/// Expands a raw image reference into its fully qualified string form.
///
/// # Examples
///
/// ```
/// use libimageref::expand_image_name;
///
/// let name = expand_image_name("nginx").unwrap();
/// assert_eq!(name, "docker.io/library/nginx:latest");
/// ```
pub fn expand_image_name(name: &str) -> Result<String> {
    let reference = ImageReference::from_str(name)?;
    Ok(reference.to_string())
}

/// Expands a raw image reference, forcing the given tag.
///
/// The tag is validated before any expansion happens and always replaces a
/// tag embedded in `name`. Fails with [`ImageRefError::InvalidTag`] when
/// `tag` does not conform to the tag grammar.
///
/// # Examples
///
/// ```
/// use libimageref::expand_image_name_with_tag;
///
/// let name = expand_image_name_with_tag("nginx:tag", "tag-2").unwrap();
/// assert_eq!(name, "docker.io/library/nginx:tag-2");
/// ```
pub fn expand_image_name_with_tag(name: &str, tag: &str) -> Result<String> {
    if !grammar::is_valid_tag(tag) {
        return Err(ImageRefError::invalid_tag(tag));
    }

    let reference = ImageReference::from_str(name)?;
    Ok(reference.with_tag(tag).to_string())
}

/// Splits an already expanded image name at the final `:` into a
/// (name, tag) pair.
///
/// This is the strict inverse of canonical rendering: no defaulting is
/// applied, and an input without a tag separator is an error.
///
/// # Examples
///
/// ```
/// use libimageref::split_image_name;
///
/// let (name, tag) = split_image_name("docker.io/library/nginx:tag-2").unwrap();
/// assert_eq!(name, "docker.io/library/nginx");
/// assert_eq!(tag, "tag-2");
///
/// assert!(split_image_name("nginx").is_err());
/// ```
pub fn split_image_name(expanded: &str) -> Result<(String, String)> {
    match expanded.rsplit_once(':') {
        Some((name, tag)) => Ok((name.to_string(), tag.to_string())),
        None => Err(ImageRefError::split(format!(
            "No tag separator in image name: {}",
            expanded
        ))),
    }
}

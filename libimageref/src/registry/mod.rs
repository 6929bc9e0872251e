//! Registry endpoint resolution.
//!
//! Picks the effective registry URL for a pull or push from the inputs a
//! caller may or may not have: an explicit registry string and a registry
//! credential record. Credential records come in two shapes, the native
//! in-process one and the wire form exchanged with remote agents; both
//! carry a URL and resolve identically.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// In-process registry credential record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryAuth {
    /// Registry URL this credential applies to, possibly empty.
    pub url: String,
    /// Username for the registry.
    pub user: String,
    /// Password or token for the registry.
    pub password: String,
}

/// Wire form of the registry credential record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryAuthProto {
    /// Registry URL this credential applies to, possibly empty.
    #[serde(default)]
    pub url: String,
    /// Username for the registry.
    #[serde(default)]
    pub user: String,
    /// Password or token for the registry.
    #[serde(default)]
    pub password: String,
}

/// A credential record that carries a registry URL.
pub trait RegistryUrl {
    /// Returns the URL field, possibly empty.
    fn url(&self) -> &str;
}

impl RegistryUrl for RegistryAuth {
    fn url(&self) -> &str {
        &self.url
    }
}

impl RegistryUrl for RegistryAuthProto {
    fn url(&self) -> &str {
        &self.url
    }
}

/// Priority rule shared by both resolver entry points: a non-empty auth
/// URL always wins; otherwise a present registry value wins even when it
/// is empty; otherwise the URL is empty.
fn resolve<A: RegistryUrl>(registry: Option<&str>, auth: Option<&A>) -> String {
    if let Some(auth) = auth {
        if !auth.url().is_empty() {
            return auth.url().to_string();
        }
    }

    registry.map(str::to_string).unwrap_or_default()
}

/// Resolves the effective registry URL from an optional registry string
/// and an optional native credential record.
///
/// # Examples
///
/// ```
/// use libimageref::registry::{RegistryAuth, resolve_registry_url};
///
/// let auth = RegistryAuth {
///     url: "test".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(resolve_registry_url(Some("other"), Some(&auth)), "test");
/// assert_eq!(resolve_registry_url(Some("other"), None), "other");
/// ```
pub fn resolve_registry_url(registry: Option<&str>, auth: Option<&RegistryAuth>) -> String {
    resolve(registry, auth)
}

/// Resolves the effective registry URL from an optional registry string
/// and an optional wire-form credential record.
pub fn resolve_registry_url_proto(
    registry: Option<&str>,
    auth: Option<&RegistryAuthProto>,
) -> String {
    resolve(registry, auth)
}

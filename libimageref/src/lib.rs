//! Image reference normalization and registry endpoint resolution.
//!
//! Libimageref normalizes the shorthand strings used to address container
//! images (`nginx`, `nginx:tag`, `my-reg.com/library/nginx:my-tag`) into
//! canonical, fully qualified references, and resolves which registry URL
//! and credentials apply to a pull or push.
//!
//! # Quick Start
//!
//! ```
//! use libimageref::{expand_image_name, split_image_name};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Shorthand references expand deterministically
//!     let name = expand_image_name("nginx")?;
//!     assert_eq!(name, "docker.io/library/nginx:latest");
//!
//!     // Expanded references split back into name and tag
//!     let (name, tag) = split_image_name(&name)?;
//!     assert_eq!(name, "docker.io/library/nginx");
//!     assert_eq!(tag, "latest");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`ImageReference`] - Structured, fully expanded image reference
//! - [`RegistryAuth`] / [`RegistryAuthProto`] - Registry credential records
//! - [`ImageRefError`] - Error type for every operation
//!
//! # Architecture
//!
//! All operations are pure, synchronous functions over caller-owned
//! values. Nothing here talks to a registry: the canonical strings and
//! resolved URLs are consumed by a downstream registry client.

#![warn(clippy::all)]

/// Returns the libimageref crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = libimageref::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export the main surface for convenience
pub use auth::auth_config_to_basic_auth;
pub use error::{ImageRefError, Result};
pub use reference::{
    ImageReference, expand_image_name, expand_image_name_with_tag, split_image_name,
};
pub use registry::{
    RegistryAuth, RegistryAuthProto, resolve_registry_url, resolve_registry_url_proto,
};

pub mod auth;
pub mod error;
pub mod grammar;
pub mod reference;
pub mod registry;

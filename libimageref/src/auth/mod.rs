//! Credential blob conversion for registry basic auth.

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;

use crate::error::{ImageRefError, Result};

#[cfg(test)]
mod tests;

/// Credential pair decoded from an auth config blob.
///
/// Exists only for the duration of [`auth_config_to_basic_auth`]; fields
/// absent from the payload decode as empty strings.
#[derive(Debug, Deserialize)]
struct BasicAuthCredential {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Converts a base64-encoded JSON credential blob into a base64-encoded
/// `user:password` basic-auth token.
///
/// Both the input and the output use the URL-safe base64 alphabet.
///
/// # Examples
///
/// ```
/// use base64::{Engine as _, engine::general_purpose};
/// use libimageref::auth_config_to_basic_auth;
///
/// let blob = general_purpose::URL_SAFE.encode(r#"{"username":"u","password":"p"}"#);
/// let token = auth_config_to_basic_auth(&blob).unwrap();
/// assert_eq!(token, general_purpose::URL_SAFE.encode("u:p"));
/// ```
pub fn auth_config_to_basic_auth(encoded: &str) -> Result<String> {
    let raw = general_purpose::URL_SAFE
        .decode(encoded)
        .map_err(|e| ImageRefError::decode_with_source("Auth config is not valid base64", e))?;

    let credential: BasicAuthCredential = serde_json::from_slice(&raw).map_err(|e| {
        ImageRefError::decode_with_source("Auth config is not a valid credential object", e)
    })?;

    let basic_auth = format!("{}:{}", credential.username, credential.password);
    Ok(general_purpose::URL_SAFE.encode(basic_auth))
}

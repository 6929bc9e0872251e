use super::*;

#[test]
fn test_auth_url_wins_over_empty_registry() {
    let auth = RegistryAuth {
        url: "test".to_string(),
        ..Default::default()
    };

    assert_eq!(resolve_registry_url(Some(""), Some(&auth)), "test");
}

#[test]
fn test_auth_url_wins_over_registry() {
    let auth = RegistryAuth {
        url: "test".to_string(),
        ..Default::default()
    };

    assert_eq!(resolve_registry_url(Some("other"), Some(&auth)), "test");
}

#[test]
fn test_no_inputs_resolves_empty() {
    assert_eq!(resolve_registry_url(None, None), "");
}

#[test]
fn test_registry_without_auth() {
    assert_eq!(resolve_registry_url(Some("other"), None), "other");
}

#[test]
fn test_empty_auth_url_falls_through_to_registry() {
    let auth = RegistryAuth::default();

    assert_eq!(resolve_registry_url(Some("other"), Some(&auth)), "other");
}

#[test]
fn test_present_but_empty_registry_resolves_empty() {
    // Presence decides, not content.
    let auth = RegistryAuth::default();

    assert_eq!(resolve_registry_url(Some(""), Some(&auth)), "");
}

#[test]
fn test_proto_auth_url() {
    let auth = RegistryAuthProto {
        url: "test".to_string(),
        ..Default::default()
    };

    assert_eq!(resolve_registry_url_proto(None, Some(&auth)), "test");
}

#[test]
fn test_proto_auth_url_priority() {
    let auth = RegistryAuthProto {
        url: "test".to_string(),
        ..Default::default()
    };

    assert_eq!(resolve_registry_url_proto(Some("other"), Some(&auth)), "test");
}

#[test]
fn test_proto_registry_without_auth() {
    assert_eq!(resolve_registry_url_proto(Some("other"), None), "other");
}

#[test]
fn test_proto_no_inputs_resolves_empty() {
    assert_eq!(resolve_registry_url_proto(None, None), "");
}

#[test]
fn test_proto_record_deserializes_with_missing_fields() {
    let auth: RegistryAuthProto = serde_json::from_str(r#"{"url":"test"}"#).unwrap();

    assert_eq!(auth.url, "test");
    assert_eq!(auth.user, "");
    assert_eq!(auth.password, "");
}

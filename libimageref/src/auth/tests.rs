use super::*;

#[test]
fn test_basic_auth_round_trip() {
    let auth_config = r#"{"username":"test-user","password":"test-password"}"#;
    let encoded = general_purpose::URL_SAFE.encode(auth_config);

    let expected = general_purpose::URL_SAFE.encode("test-user:test-password");

    let basic_auth = auth_config_to_basic_auth(&encoded).unwrap();
    assert_eq!(basic_auth, expected);
}

#[test]
fn test_missing_fields_decode_as_empty() {
    let encoded = general_purpose::URL_SAFE.encode(r#"{"username":"only-user"}"#);

    let basic_auth = auth_config_to_basic_auth(&encoded).unwrap();
    assert_eq!(basic_auth, general_purpose::URL_SAFE.encode("only-user:"));

    let encoded = general_purpose::URL_SAFE.encode("{}");

    let basic_auth = auth_config_to_basic_auth(&encoded).unwrap();
    assert_eq!(basic_auth, general_purpose::URL_SAFE.encode(":"));
}

#[test]
fn test_extra_fields_are_ignored() {
    let auth_config = r#"{"username":"u","password":"p","serveraddress":"reg.example.com"}"#;
    let encoded = general_purpose::URL_SAFE.encode(auth_config);

    let basic_auth = auth_config_to_basic_auth(&encoded).unwrap();
    assert_eq!(basic_auth, general_purpose::URL_SAFE.encode("u:p"));
}

#[test]
fn test_invalid_base64_fails() {
    let result = auth_config_to_basic_auth("not base64!!!");

    assert!(matches!(result.unwrap_err(), ImageRefError::Decode { .. }));
}

#[test]
fn test_invalid_json_fails() {
    let encoded = general_purpose::URL_SAFE.encode("not json at all");

    let result = auth_config_to_basic_auth(&encoded);
    assert!(matches!(result.unwrap_err(), ImageRefError::Decode { .. }));
}

#[test]
fn test_json_array_fails() {
    let encoded = general_purpose::URL_SAFE.encode(r#"["username","password"]"#);

    let result = auth_config_to_basic_auth(&encoded);
    assert!(matches!(result.unwrap_err(), ImageRefError::Decode { .. }));
}

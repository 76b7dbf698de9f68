use assert_json_diff::assert_json_eq;
use bullana_auth::model::requests::{ForgotPasswordRequest, RegisterRequest, Verify2faRequest};
use bullana_auth::model::responses::{
    LoginResponse, MessageResponse, RegisterResponse, ValidateResponse,
};
use serde_json::json;

#[test]
fn login_response_reads_camel_case_tfa_fields() {
    let json = r#"{
        "success": true,
        "requiresTFA": true,
        "tempToken": "TMP",
        "message": "enter your code"
    }"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();
    assert!(response.success);
    assert!(response.requires_tfa);
    assert_eq!(response.temp_token.as_deref(), Some("TMP"));
    assert!(response.token.is_none());
    assert!(response.user.is_none());
}

#[test]
fn login_response_defaults_missing_flags() {
    let response: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(!response.success);
    assert!(!response.requires_tfa);
}

#[test]
fn register_request_serializes_wallet_fields_camel_case() {
    let request = RegisterRequest {
        username: "alice".to_string(),
        email: "a@b.com".to_string(),
        password: "pw".to_string(),
        refer: Some("FRIEND".to_string()),
        wallet_address: Some("0xabc".to_string()),
        wallet_type: Some("phantom".to_string()),
    };

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "username": "alice",
            "email": "a@b.com",
            "password": "pw",
            "refer": "FRIEND",
            "walletAddress": "0xabc",
            "walletType": "phantom"
        })
    );
}

#[test]
fn register_request_skips_absent_optionals() {
    let request = RegisterRequest {
        username: "alice".to_string(),
        email: "a@b.com".to_string(),
        password: "pw".to_string(),
        refer: None,
        wallet_address: None,
        wallet_type: None,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("refer").is_none());
    assert!(value.get("walletAddress").is_none());
    assert!(value.get("walletType").is_none());
}

#[test]
fn verify_2fa_request_uses_wire_names() {
    let request = Verify2faRequest {
        temp_token: "TMP".to_string(),
        tfa_code: "123456".to_string(),
    };

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"tempToken": "TMP", "tfaCode": "123456"})
    );
}

#[test]
fn forgot_password_request_uses_resetemail() {
    let request = ForgotPasswordRequest {
        resetemail: "a@b.com".to_string(),
    };

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"resetemail": "a@b.com"})
    );
}

#[test]
fn register_response_normalizes_success_forms() {
    let numeric: RegisterResponse = serde_json::from_str(r#"{"success": 1}"#).unwrap();
    let boolean: RegisterResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    let zero: RegisterResponse = serde_json::from_str(r#"{"success": 0}"#).unwrap();
    let missing: RegisterResponse = serde_json::from_str("{}").unwrap();

    assert!(numeric.success);
    assert!(boolean.success);
    assert!(!zero.success);
    assert!(!missing.success);
}

#[test]
fn register_response_text_prefers_msg() {
    let both: RegisterResponse =
        serde_json::from_str(r#"{"msg": "first", "message": "second"}"#).unwrap();
    assert_eq!(both.text().as_deref(), Some("first"));

    let only_message: RegisterResponse =
        serde_json::from_str(r#"{"message": "second"}"#).unwrap();
    assert_eq!(only_message.text().as_deref(), Some("second"));
}

#[test]
fn message_response_preserves_extra_fields() {
    let response: MessageResponse =
        serde_json::from_str(r#"{"success": true, "exists": true, "msg": "taken"}"#).unwrap();

    assert!(response.success);
    assert_eq!(response.text().as_deref(), Some("taken"));
    assert_eq!(
        response.extra.get("exists").and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn validate_response_defaults_to_invalid() {
    let response: ValidateResponse = serde_json::from_str("{}").unwrap();
    assert!(!response.valid);
}

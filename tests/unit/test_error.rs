use bullana_auth::error::AppError;
use reqwest::StatusCode;

#[test]
fn display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn display_api_passes_message_through() {
    let error = AppError::Api("Login failed".to_string());
    assert_eq!(error.to_string(), "Login failed");
}

#[test]
fn display_unexpected_includes_status() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn from_serde_maps_to_json_variant() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn from_io_maps_to_io_variant() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn or_generic_keeps_server_messages() {
    let error = AppError::Api("username taken".to_string()).or_generic("Registration failed");
    assert_eq!(error.to_string(), "username taken");
}

#[test]
fn or_generic_keeps_unauthorized() {
    let error = AppError::Unauthorized.or_generic("Login failed");
    assert!(matches!(error, AppError::Unauthorized));
}

#[test]
fn or_generic_replaces_transport_errors() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY).or_generic("Login failed");
    assert_eq!(error.to_string(), "Login failed");

    let io_error: AppError = std::io::Error::other("boom").into();
    assert_eq!(io_error.or_generic("Login failed").to_string(), "Login failed");
}

use crate::common::service_for;
use bullana_auth::auth::AuthApi;
use bullana_auth::client::extract_error_message;
use bullana_auth::error::AppError;
use bullana_auth::model::user::User;
use bullana_auth::session::store::SessionStore;
use mockito::Matcher;

fn sample_user() -> User {
    User {
        id: "1".to_string(),
        username: "alice".to_string(),
        email: "a@b.com".to_string(),
        status: Some(1),
        tfa_status: None,
        kyc_status: None,
        favourites: None,
        liked: None,
    }
}

#[tokio::test]
async fn bearer_header_attached_when_token_present() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/basic/auth/validate")
        .match_header("authorization", "Bearer T")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"valid": true}"#)
        .create_async()
        .await;

    let (service, store, _) = service_for(&server.url());
    store.set_token("T");

    assert!(service.validate_token().await);
    mock.assert_async().await;
}

#[test]
fn no_bearer_header_without_token() {
    tokio_test::block_on(async {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/basic/auth/validate")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"valid": false}"#)
            .create_async()
            .await;

        let (service, _, _) = service_for(&server.url());

        assert!(!service.validate_token().await);
        mock.assert_async().await;
    });
}

#[tokio::test]
async fn unauthorized_clears_session_and_redirects() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/basic/auth/profile")
        .with_status(401)
        .with_body(r#"{"message": "token expired"}"#)
        .create_async()
        .await;

    let (service, store, navigator) = service_for(&server.url());
    store.set_token("stale");
    store.set_user(&sample_user());

    let err = service.get_current_user().await.expect_err("should be Err");
    assert!(matches!(err, AppError::Unauthorized));

    assert!(store.token().is_none(), "token should be cleared");
    assert!(store.user().is_none(), "user should be cleared");
    assert_eq!(navigator.targets(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn server_error_surfaces_body_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/basic/auth/login")
        .with_status(400)
        .with_body(r#"{"message": "Invalid credentials"}"#)
        .create_async()
        .await;

    let (service, _, _) = service_for(&server.url());

    let err = service.login("a@b.com", "wrong").await.expect_err("should be Err");
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn extract_error_message_prefers_msg_over_message() {
    let body = r#"{"msg": "first", "message": "second"}"#;
    assert_eq!(extract_error_message(body), Some("first".to_string()));
}

#[test]
fn extract_error_message_falls_back_to_message() {
    let body = r#"{"message": "second"}"#;
    assert_eq!(extract_error_message(body), Some("second".to_string()));
}

#[test]
fn extract_error_message_serializes_unknown_bodies() {
    let body = r#"{"code": 17}"#;
    assert_eq!(extract_error_message(body), Some(r#"{"code":17}"#.to_string()));
}

#[test]
fn extract_error_message_passes_non_json_through() {
    assert_eq!(
        extract_error_message("service unavailable"),
        Some("service unavailable".to_string())
    );
}

#[test]
fn extract_error_message_none_for_empty_body() {
    assert_eq!(extract_error_message(""), None);
    assert_eq!(extract_error_message("   "), None);
}

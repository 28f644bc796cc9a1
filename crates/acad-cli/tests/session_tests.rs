//! Session lifecycle: persisted token, restore, login and logout

use acad_cli::Client;
use acad_cli::session::{AppContext, TokenStore};

use acad_config::Config;

use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn context(server: &MockServer, dir: &TempDir) -> AppContext {
    let client = Client::new(&format!("{}/api", server.uri()));
    let store = TokenStore::new(dir.path().join("session.token"));
    AppContext::with_client(Config::default(), client, store)
}

fn user_json(role: &str) -> serde_json::Value {
    json!({
        "_id": "u1",
        "name": "Nadia Rahman",
        "email": "nadia@academy.test",
        "role": role
    })
}

#[tokio::test]
async fn given_no_stored_token_when_restore_then_signed_out_without_calls() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&server, &dir);

    // When
    let restored = ctx.restore().await.unwrap();

    // Then
    assert!(restored.is_none());
}

#[tokio::test]
async fn given_valid_token_when_restore_then_user_loaded() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("manager") })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.token"), "stored-token\n").unwrap();
    let mut ctx = context(&server, &dir);

    // When
    let name = ctx.restore().await.unwrap().map(|user| user.name.clone());

    // Then
    assert_eq!(name.as_deref(), Some("Nadia Rahman"));
    assert!(ctx.require_manager().is_ok());
}

#[tokio::test]
async fn given_rejected_token_when_restore_then_token_file_removed() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "jwt expired" })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("session.token");
    std::fs::write(&token_path, "expired").unwrap();
    let mut ctx = context(&server, &dir);

    // When
    let restored = ctx.restore().await.unwrap();

    // Then
    assert!(restored.is_none());
    assert!(!token_path.exists());
    assert!(ctx.client.token().is_none());
}

#[tokio::test]
async fn given_server_error_when_restore_then_token_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("session.token");
    std::fs::write(&token_path, "still-good").unwrap();
    let mut ctx = context(&server, &dir);

    let result = ctx.restore().await;

    assert!(result.is_err());
    assert!(token_path.exists());
}

#[tokio::test]
async fn given_credentials_when_login_then_token_persisted() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "nadia@academy.test", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "user": user_json("employee")
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&server, &dir);

    // When
    ctx.login("nadia@academy.test", "secret").await.unwrap();

    // Then
    let stored = std::fs::read_to_string(dir.path().join("session.token")).unwrap();
    assert_eq!(stored, "fresh-token");
    assert_eq!(ctx.client.token(), Some("fresh-token"));
    assert!(ctx.require_user().is_ok());
    assert!(ctx.require_manager().is_err());
}

#[tokio::test]
async fn given_signed_in_when_logout_then_token_removed() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "token": "fresh-token", "user": user_json("admin") }
        })))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let mut ctx = context(&server, &dir);
    ctx.login("nadia@academy.test", "secret").await.unwrap();

    // When
    ctx.logout().unwrap();

    // Then
    assert!(!dir.path().join("session.token").exists());
    assert!(ctx.current_user().is_none());
    assert!(ctx.client.token().is_none());
    assert!(ctx.require_user().is_err());
}

#[test]
fn test_clearing_missing_token_is_ok() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path().join("nothing.token"));

    assert!(store.clear().is_ok());
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn given_two_contexts_sharing_config_dir_when_submitting_then_second_rejected() {
    // Given
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let first = context(&server, &dir);
    let second = context(&server, &dir);

    // When
    let permit = first.guards.payment.try_acquire().unwrap();
    let rejected = second.guards.payment.try_acquire();

    // Then
    assert!(rejected.unwrap_err().to_string().contains("already in progress"));
    assert!(second.guards.bulk_assign.try_acquire().is_ok());

    drop(permit);
    assert!(second.guards.payment.try_acquire().is_ok());
    assert!(!dir.path().join("payment.lock").exists());
}

#[cfg(unix)]
#[test]
fn test_saved_token_readable_by_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.token");
    std::fs::write(&path, "old").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    let store = TokenStore::new(&path);

    store.save("fresh-token").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(store.load().unwrap().as_deref(), Some("fresh-token"));
}

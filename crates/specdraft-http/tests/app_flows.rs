//! End-to-end flow tests: the root controller driving the HTTP backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use specdraft_core::flow::{AUTH_FALLBACK_MESSAGE, GENERATION_FALLBACK_MESSAGE};
use specdraft_core::{
    AccessToken, ApiUrl, App, AuthStatus, MemorySessionStore, Section, SessionStore, SpecView,
};
use specdraft_http::HttpBackend;

fn app_for(api: ApiUrl, store: Arc<MemorySessionStore>) -> App {
    let backend = Arc::new(HttpBackend::new(api, store.clone()).unwrap());
    App::init(backend, store)
}

fn mock_api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn closed_port_url() -> ApiUrl {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    ApiUrl::new(format!("http://127.0.0.1:{port}")).unwrap()
}

#[tokio::test]
async fn login_then_generate_renders_spec() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "session": { "access_token": "session-token" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Specifications generated successfully.",
            "data": {
                "user_stories": ["As a user, I want to reset my password via email"],
                "api_specs": [
                    { "method": "POST", "path": "/auth/reset", "description": "Reset password" }
                ],
                "db_schema": [{ "table": "users", "columns": ["id", "email"] }],
                "edge_cases": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let mut app = app_for(mock_api_url(&server), store.clone());

    let status = app.login("alice@example.com", "hunter22").await;
    assert_eq!(status, Some(AuthStatus::Authenticated));
    assert_eq!(store.get().unwrap(), Some(AccessToken::new("session-token")));

    let generator = app.generator().expect("authenticated");
    let state = generator
        .generate(Some("Users can reset password via email".into()), None)
        .await;

    let view = SpecView::from(state.result().expect("result displayed"));
    let sections = view.sections();
    assert_eq!(sections.len(), 3);
    assert!(matches!(sections[0], Section::UserStories(stories) if stories.len() == 1));
    assert!(matches!(sections[1], Section::ApiEndpoints(rows) if rows.len() == 1 && rows[0].method == "POST"));
    assert!(matches!(sections[2], Section::DatabaseSchema(tables) if tables.len() == 1 && tables[0].table == "users"));
}

#[tokio::test]
async fn rejected_login_shows_backend_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let mut app = app_for(mock_api_url(&server), store.clone());

    let status = app.login("alice@example.com", "wrong").await;

    assert_eq!(
        status,
        Some(AuthStatus::AnonymousWithError("Invalid credentials".into()))
    );
    assert!(store.get().unwrap().is_none());
    assert!(!app.is_authenticated());
}

#[tokio::test]
async fn unreachable_backend_during_login_uses_fallback() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app = app_for(closed_port_url(), store.clone());

    let status = app.login("alice@example.com", "hunter22").await.unwrap();

    assert_eq!(status.error(), Some(AUTH_FALLBACK_MESSAGE));
    assert!(store.get().unwrap().is_none());
}

#[tokio::test]
async fn unreachable_backend_during_generation_leaves_no_result() {
    let store = Arc::new(MemorySessionStore::with_token(AccessToken::new("tok")));
    let mut app = app_for(closed_port_url(), store);

    let generator = app.generator().expect("stored credential is trusted");
    let state = generator.generate(Some("notes".into()), None).await;

    assert_eq!(state.error(), Some(GENERATION_FALLBACK_MESSAGE));
    assert!(state.result().is_none());
}

#[tokio::test]
async fn empty_generation_input_sends_nothing() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::with_token(AccessToken::new("tok")));
    let mut app = app_for(mock_api_url(&server), store);

    let generator = app.generator().expect("authenticated");
    let state = generator.generate(None, None).await;

    assert!(state.error().is_some());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn logout_clears_session_without_backend() {
    let store = Arc::new(MemorySessionStore::with_token(AccessToken::new("tok")));
    let mut app = app_for(closed_port_url(), store.clone());

    app.logout().unwrap();

    assert!(!app.is_authenticated());
    assert!(store.get().unwrap().is_none());
}

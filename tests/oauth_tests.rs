//! Tests for the config-entry OAuth token provider.

mod common;

use std::sync::Arc;

use senz::auth::{AccessTokenProvider, AuthError, ConfigEntryAuth};
use senz::error::SenzError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{auth_for, FakeOAuthSession};

#[tokio::test]
async fn valid_session_token_is_used_without_refresh() {
    let auth = ConfigEntryAuth::new(FakeOAuthSession::valid("current-token"));

    assert_eq!(auth.access_token().await.unwrap(), "current-token");
    assert_eq!(auth.session().refreshes(), 0);
}

#[tokio::test]
async fn invalid_session_token_is_refreshed_first() {
    let auth = ConfigEntryAuth::new(FakeOAuthSession::expired("old-token"));

    assert_eq!(auth.access_token().await.unwrap(), "refreshed-token");
    assert_eq!(auth.session().refreshes(), 1);

    // Now valid; no second refresh.
    assert_eq!(auth.access_token().await.unwrap(), "refreshed-token");
    assert_eq!(auth.session().refreshes(), 1);
}

#[tokio::test]
async fn failed_refresh_is_reported() {
    let auth = ConfigEntryAuth::new(FakeOAuthSession::expired("old-token").with_failing_refresh());

    let err = auth.access_token().await.unwrap_err();
    assert!(matches!(err, AuthError::RefreshFailed(ref msg) if msg == "invalid_grant"));
}

#[tokio::test]
async fn empty_session_token_is_invalid() {
    let auth = ConfigEntryAuth::new(FakeOAuthSession::valid(""));
    assert!(matches!(
        auth.access_token().await,
        Err(AuthError::InvalidToken(_))
    ));
}

#[tokio::test]
async fn expired_token_is_refreshed_even_when_session_claims_valid() {
    let auth = ConfigEntryAuth::new(FakeOAuthSession::stale("old-token"));

    assert_eq!(auth.access_token().await.unwrap(), "refreshed-token");
    assert_eq!(auth.session().refreshes(), 1);
}

#[tokio::test]
async fn refreshed_token_reaches_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/Mode/auto"))
        .and(header("authorization", "Bearer refreshed-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = Arc::new(ConfigEntryAuth::new(FakeOAuthSession::expired("old-token")));
    let auth = auth_for(&server, tokens.clone());
    auth.set_mode_auto("ABC123").await.unwrap();

    assert_eq!(tokens.session().refreshes(), 1);
}

#[tokio::test]
async fn failed_refresh_blocks_the_api_call() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tokens = Arc::new(ConfigEntryAuth::new(
        FakeOAuthSession::expired("old-token").with_failing_refresh(),
    ));
    let auth = auth_for(&server, tokens);
    let err = auth.set_target_temperature("ABC123", 2000).await.unwrap_err();

    assert!(matches!(err, SenzError::Authentication(ref msg) if msg.contains("invalid_grant")));
}

//! Shared test helpers and fake token providers.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use senz::auth::{AccessTokenProvider, AuthError, OAuthSession, Token};
use senz::client::SenzAuth;
use wiremock::MockServer;

/// API prefix mounted on the mock server, mirroring the real `/api/v1`.
pub const API_PREFIX: &str = "/api/v1";

/// Build an authenticated client pointed at the mock server.
pub fn auth_for(server: &MockServer, tokens: Arc<dyn AccessTokenProvider>) -> SenzAuth {
    SenzAuth::new(
        reqwest::Client::new(),
        format!("{}{API_PREFIX}", server.uri()),
        tokens,
    )
}

/// Hands out `token-1`, `token-2`, ... one per call.
#[derive(Default)]
pub struct RotatingTokenProvider {
    calls: AtomicUsize,
}

impl RotatingTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccessTokenProvider for RotatingTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("token-{n}"))
    }
}

/// Reports that the grant is gone and cannot be refreshed.
pub struct FailingTokenProvider;

#[async_trait]
impl AccessTokenProvider for FailingTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        Err(AuthError::ExpiredOrInvalidGrant)
    }
}

/// Takes `delay` before producing a token, or a refusal when `fails`.
pub struct SlowTokenProvider {
    pub delay: Duration,
    pub fails: bool,
}

#[async_trait]
impl AccessTokenProvider for SlowTokenProvider {
    async fn access_token(&self) -> Result<String, AuthError> {
        tokio::time::sleep(self.delay).await;
        if self.fails {
            return Err(AuthError::ExpiredOrInvalidGrant);
        }
        Ok("slow-token".to_string())
    }
}

/// In-memory stand-in for a host OAuth2 session.
pub struct FakeOAuthSession {
    valid: AtomicBool,
    refresh_fails: bool,
    refreshes: AtomicUsize,
    token: Mutex<Token>,
}

impl FakeOAuthSession {
    pub fn valid(access_token: &str) -> Self {
        Self {
            valid: AtomicBool::new(true),
            refresh_fails: false,
            refreshes: AtomicUsize::new(0),
            token: Mutex::new(Token::bearer(access_token)),
        }
    }

    pub fn expired(access_token: &str) -> Self {
        let session = Self::valid(access_token);
        session.valid.store(false, Ordering::SeqCst);
        session
    }

    /// Reports itself valid but holds a token past its expiry.
    pub fn stale(access_token: &str) -> Self {
        let session = Self::valid(access_token);
        session.token.lock().unwrap().expires_at =
            Some(chrono::Utc::now() - chrono::Duration::minutes(5));
        session
    }

    pub fn with_failing_refresh(mut self) -> Self {
        self.refresh_fails = true;
        self
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OAuthSession for FakeOAuthSession {
    fn valid_token(&self) -> bool {
        self.valid.load(Ordering::SeqCst)
    }

    async fn ensure_token_valid(&self) -> Result<(), AuthError> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        if self.refresh_fails {
            return Err(AuthError::RefreshFailed("invalid_grant".to_string()));
        }
        *self.token.lock().unwrap() = Token::bearer("refreshed-token");
        self.valid.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn token(&self) -> Result<Token, AuthError> {
        Ok(self.token.lock().unwrap().clone())
    }
}

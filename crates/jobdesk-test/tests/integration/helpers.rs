#![allow(dead_code, clippy::expect_used)]
//! Test helpers for integration tests.
//!
//! Provides a fresh in-memory store plus a token codec pinned to a
//! fixed clock, so every scenario runs isolated and deterministic.

use jobdesk_core::config::SigningSecret;
use jobdesk_core::util::clock::FixedClock;
use jobdesk_service::auth::token::TokenCodec;
use jobdesk_service::flow;
use jobdesk_service::store::UserRecord;
use jobdesk_service::store::memory::MemoryStore;

/// Fixed "now" shared by all scenarios.
pub const T0: i64 = 1_700_000_000;

/// One-hour ttl, the system default for login tokens.
pub const TTL_SECONDS: u64 = 3600;

pub const SECRET: &str = "integration-test-signing-secret";

/// A fresh environment: empty store and a codec at `T0`.
pub struct TestEnv {
    pub store: MemoryStore,
    pub codec: TokenCodec<FixedClock>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            codec: codec_at(T0),
        }
    }

    /// Register and log a user in, returning the record and a session
    /// token.
    pub async fn signup(&self, username: &str, password: &str) -> (UserRecord, String) {
        flow::register(&self.store, username, password)
            .await
            .expect("registration succeeds");
        let outcome = flow::login(&self.store, &self.codec, username, password)
            .await
            .expect("login succeeds");
        (outcome.user, outcome.token)
    }

    /// The Authorization header a client would send for `token`.
    pub fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }
}

/// A codec over the shared secret with its clock pinned to `unix`.
pub fn codec_at(unix: i64) -> TokenCodec<FixedClock> {
    TokenCodec::with_clock(
        SigningSecret::new(SECRET),
        TTL_SECONDS,
        FixedClock::at_unix(unix),
    )
}

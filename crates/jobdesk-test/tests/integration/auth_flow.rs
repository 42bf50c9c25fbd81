//! Registration, login, and token lifecycle across component seams.

use jobdesk_service::error::ServiceError;
use jobdesk_service::flow;

use crate::helpers::{TTL_SECONDS, T0, TestEnv, codec_at};

#[test_log::test(tokio::test)]
async fn register_login_validate_round_trip() {
    let env = TestEnv::new();

    let (user, token) = env.signup("alice", "pw123").await;

    // The token authenticates requests for alice's subject id.
    let header = TestEnv::bearer(&token);
    let subject = flow::subject_from_header(&env.codec, Some(header.as_str()))
        .expect("token authenticates");
    assert_eq!(subject, user.id);
}

#[test_log::test(tokio::test)]
async fn login_token_expires_after_one_hour() {
    let env = TestEnv::new();
    let (_user, token) = env.signup("alice", "pw123").await;

    // Still valid one second before expiry.
    let offset = i64::try_from(TTL_SECONDS).expect("ttl fits");
    assert!(codec_at(T0 + offset - 1).validate(&token).is_ok());

    // Dead at exactly issuance + ttl.
    assert!(matches!(
        codec_at(T0 + offset).validate(&token),
        Err(ServiceError::TokenExpired)
    ));
}

#[test_log::test(tokio::test)]
async fn tokens_are_not_transferable_across_secrets() {
    let env = TestEnv::new();
    let (_user, token) = env.signup("alice", "pw123").await;

    let foreign = jobdesk_service::auth::token::TokenCodec::with_clock(
        jobdesk_core::config::SigningSecret::new("some-other-deployment"),
        TTL_SECONDS,
        jobdesk_core::util::clock::FixedClock::at_unix(T0),
    );
    assert!(matches!(
        foreign.validate(&token),
        Err(ServiceError::InvalidSignature)
    ));
}

#[test_log::test(tokio::test)]
async fn wrong_credentials_do_not_log_in() {
    let env = TestEnv::new();
    env.signup("alice", "pw123").await;

    assert!(matches!(
        flow::login(&env.store, &env.codec, "alice", "pw124").await,
        Err(ServiceError::NotAuthenticated)
    ));
    assert!(matches!(
        flow::login(&env.store, &env.codec, "bob", "pw123").await,
        Err(ServiceError::NotAuthenticated)
    ));
}

#[test_log::test(tokio::test)]
async fn second_registration_with_same_username_conflicts() {
    let env = TestEnv::new();
    env.signup("alice", "pw123").await;

    assert!(matches!(
        flow::register(&env.store, "alice", "pw456").await,
        Err(ServiceError::DuplicateUsername(name)) if name == "alice"
    ));
}

#[test_log::test(tokio::test)]
async fn malformed_authorization_headers_are_rejected() {
    let env = TestEnv::new();
    let (_user, token) = env.signup("alice", "pw123").await;

    for header in [None, Some(token.as_str()), Some("Bearer "), Some("")] {
        assert!(matches!(
            flow::subject_from_header(&env.codec, header),
            Err(ServiceError::MissingOrMalformedCredential)
        ));
    }
}

//! Signed, time-bounded session tokens.
//!
//! Wire format: three dot-separated base64url segments (header, payload,
//! signature), unpadded. The payload carries `{sub, iat, exp}` and the
//! signature is HMAC-SHA256 over `header || "." || payload` with the
//! shared signing secret. Validity is purely a function of signature and
//! expiry; nothing is persisted server-side.
//!
//! The verification algorithm is fixed by server configuration. A token
//! whose header claims any other algorithm is rejected as malformed
//! before signature work, so the token can never select its own
//! verification algorithm.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use jobdesk_core::config::{AuthConfig, SigningSecret};
use jobdesk_core::error::CoreError;
use jobdesk_core::types::SubjectId;
use jobdesk_core::util::clock::{Clock, SystemClock};

use crate::error::{ServiceError, ServiceResult};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "HS256";
const TOKEN_TYPE: &str = "JWT";

/// Issued login tokens live for one hour unless configured otherwise.
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: SubjectId,
    iat: i64,
    exp: i64,
}

/// Issues and validates session tokens.
///
/// Holds the signing secret and ttl for the process lifetime; all
/// methods take `&self`, so a single codec is shared by reference
/// across concurrently handled requests. The clock is injected so tests
/// can pin it.
pub struct TokenCodec<C = SystemClock> {
    secret: SigningSecret,
    ttl_seconds: i64,
    clock: C,
}

impl TokenCodec<SystemClock> {
    #[must_use]
    pub fn new(secret: SigningSecret, ttl_seconds: u64) -> Self {
        Self::with_clock(secret, ttl_seconds, SystemClock)
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.secret.clone(), config.token_ttl_seconds)
    }
}

impl<C: Clock> TokenCodec<C> {
    #[must_use]
    pub fn with_clock(secret: SigningSecret, ttl_seconds: u64, clock: C) -> Self {
        Self {
            secret,
            ttl_seconds: i64::try_from(ttl_seconds).unwrap_or(i64::MAX),
            clock,
        }
    }

    /// ## Summary
    /// Issues a signed token for `subject`, valid from now until
    /// now + ttl. Deterministic given identical inputs and clock.
    ///
    /// ## Errors
    /// Returns an error only on internal MAC or serialization failure.
    pub fn issue(&self, subject: SubjectId) -> ServiceResult<String> {
        let iat = self.clock.now().timestamp();
        let claims = Claims {
            sub: subject,
            iat,
            exp: iat.saturating_add(self.ttl_seconds),
        };
        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        };

        let header_b64 = URL_SAFE_NO_PAD.encode(encode_json(&header)?);
        let payload_b64 = URL_SAFE_NO_PAD.encode(encode_json(&claims)?);
        let signing_input = format!("{header_b64}.{payload_b64}");

        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{signing_input}.{signature}"))
    }

    /// ## Summary
    /// Validates `token` and returns the subject it was issued to.
    ///
    /// Checks run in order: structural decode (including the fixed
    /// algorithm header), constant-time signature verification against
    /// the configured secret, then the validity window. The signature
    /// check comes first so a tampered token is always reported as
    /// tampered, expired or not. The clock is read once per call.
    ///
    /// ## Errors
    /// - `MalformedToken` if the token cannot be structurally decoded or
    ///   its header names a different algorithm.
    /// - `InvalidSignature` if the re-derived MAC does not match.
    /// - `TokenExpired` if now >= `exp` or now < `iat`.
    pub fn validate(&self, token: &str) -> ServiceResult<SubjectId> {
        let now = self.clock.now().timestamp();

        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(ServiceError::MalformedToken);
        };

        let header: Header = decode_json(header_b64)?;
        if header.alg != ALGORITHM || header.typ != TOKEN_TYPE {
            tracing::debug!(alg = %header.alg, "Rejecting token with unexpected algorithm header");
            return Err(ServiceError::MalformedToken);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| ServiceError::MalformedToken)?;

        let mut mac = self.mac()?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| ServiceError::InvalidSignature)?;

        let claims: Claims = decode_json(payload_b64)?;
        if now >= claims.exp || now < claims.iat {
            return Err(ServiceError::TokenExpired);
        }

        Ok(claims.sub)
    }

    fn mac(&self) -> ServiceResult<HmacSha256> {
        // HMAC accepts keys of any length, so this only fails if the
        // underlying primitive is broken.
        HmacSha256::new_from_slice(self.secret.as_bytes()).map_err(|_| ServiceError::Hashing)
    }
}

fn encode_json<T: Serialize>(value: &T) -> ServiceResult<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|_| CoreError::InvariantViolation("token segments must serialize").into())
}

fn decode_json<T: for<'de> Deserialize<'de>>(segment: &str) -> ServiceResult<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| ServiceError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|_| ServiceError::MalformedToken)
}

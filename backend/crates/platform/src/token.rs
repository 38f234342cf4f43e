//! Bearer Token Codec
//!
//! Signs and verifies compact, self-describing, time-limited bearer
//! tokens (JWT, HMAC family). Tokens carry only a subject and an
//! absolute expiry; validity is determined purely by signature and
//! expiry at verification time. No server-side token state exists.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use jsonwebtoken::Algorithm;

/// Token verification failure kinds.
///
/// Callers at the HTTP boundary are expected to collapse all of these
/// into a single opaque credential failure so that a client cannot
/// learn which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature does not match the process secret
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Token expiry is in the past
    #[error("token has expired")]
    Expired,

    /// Token is not a well-formed signed token
    #[error("token is malformed")]
    MalformedToken,

    /// Token verified but carries no subject
    #[error("token subject is missing")]
    MissingSubject,
}

/// Signed claim set: subject plus absolute expiry (unix seconds).
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: String,
    exp: i64,
}

/// Stateless token codec.
///
/// Immutable after construction; issuance and verification are pure
/// and reentrant, so a single instance is shared process-wide.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec over a process-wide secret.
    ///
    /// `ttl` is the default validity window for issued tokens.
    pub fn new(secret: &[u8], algorithm: Algorithm, ttl: Duration) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        // No leeway: an expired token is expired
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            header: Header::new(algorithm),
            validation,
            ttl,
        }
    }

    /// Issue a signed token for `subject` expiring after the default TTL.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issue a signed token for `subject` with an explicit validity window.
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|_| TokenError::MalformedToken)
    }

    /// Verify a token and return its subject.
    ///
    /// Checks signature integrity, expiry, and subject presence, in
    /// that order. Never panics on arbitrary input.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(classify_error)?;

        if data.claims.sub.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(data.claims.sub)
    }
}

fn classify_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        _ => TokenError::MalformedToken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test-secret-key", Algorithm::HS256, Duration::minutes(30))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let codec = codec();
        let token = codec.issue("alice").unwrap();
        assert_eq!(codec.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = codec();
        let token = codec.issue_with_ttl("alice", Duration::seconds(-100)).unwrap();
        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let codec = codec();
        let other = TokenCodec::new(b"another-secret", Algorithm::HS256, Duration::minutes(30));

        let token = other.issue("alice").unwrap();
        assert_eq!(codec.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let codec = codec();
        let token = codec.issue("alice").unwrap();

        // Flip one byte in the payload segment
        let mut bytes = token.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(codec.verify(&tampered).is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = codec();
        assert_eq!(
            codec.verify("definitely-not-a-token"),
            Err(TokenError::MalformedToken)
        );
        assert_eq!(codec.verify(""), Err(TokenError::MalformedToken));
    }

    #[test]
    fn test_empty_subject_rejected() {
        let codec = codec();
        let token = codec.issue("").unwrap();
        assert_eq!(codec.verify(&token), Err(TokenError::MissingSubject));
    }

    #[test]
    fn test_renewal_issues_distinct_token_for_same_subject() {
        let codec = codec();
        let first = codec.issue_with_ttl("alice", Duration::minutes(5)).unwrap();
        let second = codec.issue_with_ttl("alice", Duration::minutes(10)).unwrap();

        assert_ne!(first, second);
        assert_eq!(codec.verify(&second).unwrap(), "alice");
    }
}

//! Bearer token inspection
//!
//! Tokens are treated as opaque credentials: the payload segment is decoded
//! only to read identity and expiry claims. Signatures are never verified;
//! the server does that. Any token that cannot be decoded counts as expired.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Claims read from the payload segment of a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtClaims {
    /// Subject id (`id` claim), empty when absent
    pub id: String,

    /// Issued-at, Unix seconds (`iat` claim), zero when absent
    pub issued_at: i64,

    /// Expiry, Unix seconds (`exp` claim), zero when absent
    pub expires_at: i64,
}

impl JwtClaims {
    /// Expiry as a timestamp, if it is representable
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expires_at, 0)
    }
}

/// Decode base64url (URL-safe base64, padding optional)
fn base64_decode_url(input: &str) -> Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    // Base64url uses - instead of + and _ instead of /
    let standard_b64 = input.replace('-', "+").replace('_', "/");

    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

/// Parse the claims of a three-segment token.
///
/// Returns `None` for anything that is not `header.payload.signature` with a
/// base64url JSON object as payload.
pub fn parse_token(token: &str) -> Option<JwtClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        log::debug!("Token has {} segments, expected 3", parts.len());
        return None;
    }

    let payload = match base64_decode_url(parts[1]) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("Failed to decode token payload: {}", e);
            return None;
        }
    };

    let json: Value = match serde_json::from_slice(&payload) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Failed to parse token payload: {}", e);
            return None;
        }
    };

    let claims = json.as_object()?;

    Some(JwtClaims {
        id: claims.get("id").map(claim_string).unwrap_or_default(),
        issued_at: claims.get("iat").map(claim_seconds).unwrap_or(0),
        expires_at: claims.get("exp").map(claim_seconds).unwrap_or(0),
    })
}

/// Whether `token` is unusable right now.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now())
}

/// Whether `token` is unusable at `now`.
///
/// Expired means the expiry instant lies strictly before `now`; there is no
/// clock-skew allowance.
pub fn is_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match parse_token(token) {
        None => true,
        Some(claims) => claims.expires_at.saturating_mul(1000) < now.timestamp_millis(),
    }
}

fn claim_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn claim_seconds(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{token_expiring_at, token_with_payload};
    use super::*;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    #[test]
    fn test_parse_token_reads_claims() {
        let token = token_with_payload(r#"{"id":"user-42","iat":1700000000,"exp":1700086400}"#);
        let claims = parse_token(&token).unwrap();

        assert_eq!(claims.id, "user-42");
        assert_eq!(claims.issued_at, 1_700_000_000);
        assert_eq!(claims.expires_at, 1_700_086_400);
    }

    #[test]
    fn test_parse_token_defaults_missing_claims() {
        let token = token_with_payload(r#"{"sub":"someone"}"#);
        let claims = parse_token(&token).unwrap();

        assert_eq!(claims.id, "");
        assert_eq!(claims.issued_at, 0);
        assert_eq!(claims.expires_at, 0);
    }

    #[test]
    fn test_parse_token_accepts_loose_claim_types() {
        let token = token_with_payload(r#"{"id":17,"iat":"1700000000","exp":1700086400.0}"#);
        let claims = parse_token(&token).unwrap();

        assert_eq!(claims.id, "17");
        assert_eq!(claims.issued_at, 1_700_000_000);
        assert_eq!(claims.expires_at, 1_700_086_400);
    }

    #[test]
    fn test_parse_token_accepts_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"id":"a","exp":5}"#);
        let token = format!("h.{}.s", payload);

        assert_eq!(parse_token(&token).unwrap().expires_at, 5);
    }

    #[test]
    fn test_parse_token_rejects_wrong_segment_count() {
        assert!(parse_token("").is_none());
        assert!(parse_token("only-one").is_none());
        assert!(parse_token("two.parts").is_none());
        assert!(parse_token("a.b.c.d").is_none());
    }

    #[test]
    fn test_parse_token_rejects_bad_payload() {
        // Not base64
        assert!(parse_token("h.!!!.s").is_none());
        // Impossible base64 length
        assert!(parse_token("h.abcde.s").is_none());
        // Base64 but not JSON
        let not_json = URL_SAFE_NO_PAD.encode("hello world");
        assert!(parse_token(&format!("h.{}.s", not_json)).is_none());
        // JSON but not an object
        let array = URL_SAFE_NO_PAD.encode("[1,2,3]");
        assert!(parse_token(&format!("h.{}.s", array)).is_none());
    }

    #[test]
    fn test_is_expired_past_and_future() {
        let now = Utc::now();
        let past = token_expiring_at("u", now.timestamp() - 60);
        let future = token_expiring_at("u", now.timestamp() + 3600);

        assert!(is_expired(&past));
        assert!(!is_expired(&future));
    }

    #[test]
    fn test_is_expired_is_strict() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let token = token_expiring_at("u", 1_700_000_000);

        // Expiring exactly now is not yet expired
        assert!(!is_expired_at(&token, now));
        assert!(is_expired_at(
            &token,
            now + chrono::Duration::milliseconds(1)
        ));
    }

    #[test]
    fn test_is_expired_for_malformed_tokens() {
        assert!(is_expired(""));
        assert!(is_expired("not-a-token"));
        assert!(is_expired("a.b"));
        assert!(is_expired("h.%%%.s"));
    }

    #[test]
    fn test_missing_exp_counts_as_expired() {
        let token = token_with_payload(r#"{"id":"u"}"#);
        assert!(is_expired(&token));
    }

    #[test]
    fn test_expires_at_utc() {
        let claims = JwtClaims {
            id: "u".to_string(),
            issued_at: 0,
            expires_at: 1_736_942_400,
        };
        assert_eq!(
            claims.expires_at_utc().unwrap().to_rfc3339(),
            "2025-01-15T12:00:00+00:00"
        );
    }
}

//! ClickUp webhook signature verification.
//!
//! ClickUp signs each webhook delivery with HMAC-SHA256 over the raw request
//! body, keyed by the webhook secret, and sends the hex digest in the
//! `X-Signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex-encoded signature.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Verify a ClickUp webhook signature.
///
/// The digest must be computed over `payload` exactly as received; parsing
/// and re-serializing the body changes the bytes and the digest with them.
///
/// # Arguments
///
/// * `payload` - The raw request body
/// * `signature` - The hex digest from the `X-Signature` header (either case)
/// * `secret` - The webhook secret
///
/// # Returns
///
/// `true` only if the signature matches. Empty inputs and non-hex signatures
/// yield `false`.
pub fn validate_webhook_signature(payload: &[u8], signature: &str, secret: &[u8]) -> bool {
    // Check for empty inputs
    if secret.is_empty() || signature.is_empty() {
        warn!(
            has_secret = !secret.is_empty(),
            has_signature = !signature.is_empty(),
            "webhook_signature_missing_fields"
        );
        return false;
    }

    let claimed = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => {
            warn!(signature_length = signature.len(), "webhook_signature_not_hex");
            return false;
        }
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(m) => m,
        Err(_) => {
            warn!("webhook_signature_invalid_key");
            return false;
        }
    };

    mac.update(payload);

    // Constant-time comparison; a length mismatch only reveals the public digest size
    let valid = mac.verify_slice(&claimed).is_ok();

    if !valid {
        warn!(
            payload_length = payload.len(),
            signature_length = signature.len(),
            "webhook_signature_mismatch"
        );
    }

    valid
}

/// Compute the lowercase hex HMAC-SHA256 signature for a payload.
///
/// Returns `None` only if the key is rejected by the MAC.
pub fn sign_payload(payload: &[u8], secret: &[u8]) -> Option<String> {
    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(m) => m,
        Err(_) => {
            warn!("webhook_sign_invalid_key");
            return None;
        }
    };

    mac.update(payload);
    Some(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-webhook-secret";
    const BODY: &[u8] = br#"{"event":"taskCreated","task_id":"86a1b2c3d","webhook_id":"7fa3ec74"}"#;

    #[test]
    fn test_validate_signature_valid() {
        let signature = sign_payload(BODY, SECRET).unwrap();
        assert!(validate_webhook_signature(BODY, &signature, SECRET));
    }

    #[test]
    fn test_validate_signature_uppercase_hex() {
        let signature = sign_payload(BODY, SECRET).unwrap().to_uppercase();
        assert!(validate_webhook_signature(BODY, &signature, SECRET));
    }

    #[test]
    fn test_validate_signature_known_vector() {
        // RFC 4231 test case 2
        let signature = "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";
        assert!(validate_webhook_signature(
            b"what do ya want for nothing?",
            signature,
            b"Jefe"
        ));
    }

    #[test]
    fn test_validate_signature_missing_fields() {
        let signature = sign_payload(BODY, SECRET).unwrap();
        assert!(!validate_webhook_signature(BODY, &signature, b""));
        assert!(!validate_webhook_signature(BODY, "", SECRET));
        assert!(!validate_webhook_signature(b"", "", b""));
    }

    #[test]
    fn test_validate_signature_wrong_secret() {
        let signature = sign_payload(BODY, b"another-secret").unwrap();
        assert!(!validate_webhook_signature(BODY, &signature, SECRET));
    }

    #[test]
    fn test_validate_signature_reserialized_body() {
        let signature = sign_payload(BODY, SECRET).unwrap();
        let value: serde_json::Value = serde_json::from_slice(BODY).unwrap();
        let pretty = serde_json::to_vec_pretty(&value).unwrap();
        assert!(!validate_webhook_signature(&pretty, &signature, SECRET));
    }

    #[test]
    fn test_validate_signature_malformed() {
        assert!(!validate_webhook_signature(BODY, "not-hex-at-all", SECRET));
        assert!(!validate_webhook_signature(BODY, "abc", SECRET));
        assert!(!validate_webhook_signature(BODY, "zz", SECRET));
    }

    #[test]
    fn test_validate_signature_length_mismatch() {
        let signature = sign_payload(BODY, SECRET).unwrap();
        assert!(!validate_webhook_signature(BODY, &signature[..32], SECRET));
        assert!(!validate_webhook_signature(
            BODY,
            &format!("{}00", signature),
            SECRET
        ));
    }

    #[test]
    fn test_sign_payload_empty_key() {
        let signature = sign_payload(BODY, b"").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(!validate_webhook_signature(BODY, &signature, b""));
    }

    #[test]
    fn test_sign_payload_format() {
        let signature = sign_payload(BODY, SECRET).unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

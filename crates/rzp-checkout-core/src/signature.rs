//! Payment signature computation and verification.
//!
//! Razorpay binds a completed payment to its order with
//! `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")`, hex-encoded. This
//! module computes that digest and compares it against the client-supplied
//! signature in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::confirmation::PaymentConfirmation;
use crate::ids::{OrderId, PaymentId};

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 and return the hex-encoded result.
///
/// # Arguments
///
/// * `secret` - The secret key for HMAC computation
/// * `message` - The message to sign
///
/// # Returns
///
/// A hex-encoded string of the HMAC-SHA256 result (64 characters).
///
/// # Panics
///
/// This function will never panic in practice. The `expect` call is guarded
/// by the invariant that HMAC-SHA256 accepts keys of any size per RFC 2104.
#[must_use]
pub fn hmac_sha256_hex(secret: &str, message: &str) -> String {
    // INVARIANT: HMAC-SHA256 accepts keys of any size per RFC 2104, so
    // `new_from_slice` only fails if the Hmac implementation is broken.
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC-SHA256 accepts any key size");
    mac.update(message.as_bytes());
    let result = mac.finalize();

    hex::encode(result.into_bytes())
}

/// Build the message the gateway signs: `"{order_id}|{payment_id}"`.
#[must_use]
pub fn signature_payload(order_id: &OrderId, payment_id: &PaymentId) -> String {
    format!("{order_id}|{payment_id}")
}

/// Constant-time string comparison to prevent timing attacks.
///
/// The supplied signature is attacker-controlled, so an ordinary `==` would
/// leak the position of the first differing byte through response timing.
///
/// # Returns
///
/// `true` if the strings are equal, `false` otherwise.
#[must_use]
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Verify a payment confirmation against the server-held secret.
///
/// Recomputes the expected digest from the order and payment ids and
/// compares it against the supplied signature in constant time.
#[must_use]
pub fn verify(secret: &str, confirmation: &PaymentConfirmation) -> bool {
    let payload = signature_payload(&confirmation.order_id, &confirmation.payment_id);
    let expected = hmac_sha256_hex(secret, &payload);

    constant_time_eq(&expected, &confirmation.signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmation(order: &str, payment: &str, signature: &str) -> PaymentConfirmation {
        PaymentConfirmation::new(
            order.parse().unwrap(),
            payment.parse().unwrap(),
            signature,
        )
    }

    #[test]
    fn hmac_sha256_produces_64_hex_chars() {
        let result = hmac_sha256_hex("key", "The quick brown fox jumps over the lazy dog");
        assert_eq!(result.len(), 64); // SHA256 = 32 bytes = 64 hex chars
        assert!(result.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hmac_sha256_is_deterministic() {
        let result1 = hmac_sha256_hex("secret", "message");
        let result2 = hmac_sha256_hex("secret", "message");
        assert_eq!(result1, result2);
    }

    #[test]
    fn hmac_sha256_different_inputs() {
        let result1 = hmac_sha256_hex("secret", "message1");
        let result2 = hmac_sha256_hex("secret", "message2");
        assert_ne!(result1, result2);
    }

    #[test]
    fn signature_payload_joins_with_pipe() {
        let order = "order_abc".parse().unwrap();
        let payment = "pay_xyz".parse().unwrap();
        assert_eq!(signature_payload(&order, &payment), "order_abc|pay_xyz");
    }

    #[test]
    fn constant_time_eq_equal_strings() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(constant_time_eq("", ""));
        assert!(constant_time_eq("longer string here", "longer string here"));
    }

    #[test]
    fn constant_time_eq_different_strings() {
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "ab"));
        assert!(!constant_time_eq("ab", "abc"));
        assert!(!constant_time_eq("abc", "ABC"));
    }

    #[test]
    fn round_trip_signature_verifies() {
        let expected = hmac_sha256_hex("s3cret", "order_abc|pay_xyz");
        let conf = confirmation("order_abc", "pay_xyz", &expected);
        assert!(verify("s3cret", &conf));
    }

    #[test]
    fn known_vector_verifies_only_with_matching_secret() {
        let expected = hmac_sha256_hex("s3cret", "order_abc|pay_xyz");
        let conf = confirmation("order_abc", "pay_xyz", &expected);
        assert!(verify("s3cret", &conf));
        assert!(!verify("other-secret", &conf));
    }

    #[test]
    fn any_single_character_mutation_fails() {
        let valid = hmac_sha256_hex("s3cret", "order_abc|pay_xyz");

        for i in 0..valid.len() {
            let mut mutated: Vec<u8> = valid.bytes().collect();
            // Flip the hex digit at position i to a different one.
            mutated[i] = if mutated[i] == b'0' { b'1' } else { b'0' };
            let mutated = String::from_utf8(mutated).unwrap();

            let conf = confirmation("order_abc", "pay_xyz", &mutated);
            assert!(!verify("s3cret", &conf), "mutation at {i} verified");
        }
    }

    #[test]
    fn swapped_ids_do_not_verify() {
        let expected = hmac_sha256_hex("s3cret", "order_abc|pay_xyz");
        let conf = confirmation("pay_xyz", "order_abc", &expected);
        assert!(!verify("s3cret", &conf));
    }

    #[test]
    fn empty_signature_fails_without_panicking() {
        let conf = confirmation("order_abc", "pay_xyz", "");
        assert!(!verify("s3cret", &conf));
    }
}

//! Fitting arbitrary payloads into the fixed message shape
//!
//! Layout: one length byte (`min(len, 47)`) followed by 47 payload bytes.
//! Short payloads are repeated to fill the message, long ones truncated.

use crate::{Message, MAX_PAYLOAD_LEN, MESSAGE_LEN};

pub fn pad(payload: &[u8]) -> Message {
    let mut message = [0u8; MESSAGE_LEN];
    let len = payload.len().min(MAX_PAYLOAD_LEN);
    message[0] = len as u8;

    // an empty payload leaves the body zeroed
    if !payload.is_empty() {
        for (slot, &byte) in message[1..].iter_mut().zip(payload.iter().cycle()) {
            *slot = byte;
        }
    }
    message
}

/// Recover the payload from a padded message. A length byte above 47 (which
/// can only come from corruption) is clamped.
pub fn unpad(message: &Message) -> Vec<u8> {
    let len = (message[0] as usize).min(MAX_PAYLOAD_LEN);
    message[1..1 + len].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_payload_repeats() {
        let message = pad(b"Hello QuietCasting");
        assert_eq!(message[0], 18);
        assert_eq!(&message[1..19], b"Hello QuietCasting");
        assert_eq!(&message[19..37], b"Hello QuietCasting");
        assert_eq!(&message[37..48], b"Hello Quiet");
        assert_eq!(unpad(&message), b"Hello QuietCasting");
    }

    #[test]
    fn test_long_payload_truncates() {
        let payload: Vec<u8> = (0..100).collect();
        let message = pad(&payload);
        assert_eq!(message[0], 47);
        assert_eq!(&message[1..], &payload[..47]);
        assert_eq!(unpad(&message), &payload[..47]);
    }

    #[test]
    fn test_exact_fit() {
        let payload = [0xEEu8; MAX_PAYLOAD_LEN];
        let message = pad(&payload);
        assert_eq!(message[0], 47);
        assert_eq!(unpad(&message), payload);
    }

    #[test]
    fn test_empty_payload() {
        let message = pad(&[]);
        assert_eq!(message, [0u8; MESSAGE_LEN]);
        assert!(unpad(&message).is_empty());
    }

    #[test]
    fn test_corrupted_length_is_clamped() {
        let mut message = pad(b"abc");
        message[0] = 200;
        assert_eq!(unpad(&message).len(), MAX_PAYLOAD_LEN);
    }
}

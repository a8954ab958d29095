//! Error types for the verification engine.
//!
//! Two spec-level failure classes (malformed input, unusable crypto backend)
//! plus a domain check for mines parameter sets that can never terminate.
//! Wrong seed material or wrong nonce stringification is NOT an error here:
//! it produces a valid-looking but different digest, which is exactly what
//! the caller's expected-value comparison is for.

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// Malformed caller input: bad hex, odd-length hex, invalid base58
    /// character, wrong public key length.
    #[error("invalid {field}: {reason}")]
    Format { field: &'static str, reason: String },

    /// The cryptographic backend refused the operation. Never downgraded to
    /// a non-cryptographic fallback.
    #[error("cryptographic backend unavailable: {0}")]
    Environment(String),

    /// Parameters that make the requested derivation impossible, e.g. more
    /// mines than grid cells.
    #[error("impossible parameters: {0}")]
    Domain(String),
}

impl VerifyError {
    pub(crate) fn format(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Format {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_field() {
        let err = VerifyError::format("server_seed_hex", "odd number of hex digits");
        assert_eq!(
            err.to_string(),
            "invalid server_seed_hex: odd number of hex digits"
        );

        let err = VerifyError::Domain("mine_count 25 >= 25 grid cells".to_string());
        assert!(err.to_string().contains("mine_count 25"));
    }
}

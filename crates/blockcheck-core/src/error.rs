//! Header validation errors.

/// Names of the header record fields, used to point at the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Version,
    PreviousBlockHash,
    MerkleRoot,
    Time,
    Bits,
    Nonce,
}

impl HeaderField {
    /// Get the field name as it appears in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            HeaderField::Version => "version",
            HeaderField::PreviousBlockHash => "previousBlockHash",
            HeaderField::MerkleRoot => "merkleRoot",
            HeaderField::Time => "time",
            HeaderField::Bits => "bits",
            HeaderField::Nonce => "nonce",
        }
    }
}

impl core::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a field's hex form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexFault {
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("expected {expected} bytes, got {actual}")]
    WrongWidth { expected: usize, actual: usize },
}

/// Errors that abort a validation run before any hashing takes place.
///
/// A failed proof is not an error: it is reported through
/// [`crate::verify::VerificationResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("malformed field {field}: {reason} (value {value:?})")]
    MalformedField {
        field: HeaderField,
        value: String,
        reason: HexFault,
    },
}

impl HeaderError {
    pub(crate) fn malformed(field: HeaderField, value: &str, reason: HexFault) -> Self {
        HeaderError::MalformedField {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// The field that caused the error.
    pub fn field(&self) -> HeaderField {
        match self {
            HeaderError::MalformedField { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_field() {
        let err = HeaderError::malformed(HeaderField::MerkleRoot, "abc", HexFault::OddLength(3));
        let message = err.to_string();
        assert!(message.contains("merkleRoot"));
        assert!(message.contains("odd number of hex digits (3)"));
        assert!(message.contains("\"abc\""));
        assert_eq!(err.field(), HeaderField::MerkleRoot);
    }
}

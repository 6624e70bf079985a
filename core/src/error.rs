use thiserror::Error;

/// Error type for parsing unit-suffixed measurement text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitParseError {
    #[error("empty measurement")]
    Empty,

    #[error("malformed measurement: '{input}'")]
    Malformed { input: String },

    #[error("measurement is not a finite number: '{input}'")]
    NonFinite { input: String },
}

/// Returned by the strict `FromStr` parse of [`crate::IceType`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ice type: {0}")]
pub struct UnknownIceType(pub String);

/// Error type for blob persistence backends.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for measurement log mutations.
///
/// The in-memory log has already been changed when one of these is returned.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("failed to encode measurement log: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to persist measurement log: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parse_error_display() {
        assert_eq!(UnitParseError::Empty.to_string(), "empty measurement");

        let err = UnitParseError::Malformed {
            input: "ten cm".to_string(),
        };
        assert_eq!(err.to_string(), "malformed measurement: 'ten cm'");

        let err = UnitParseError::NonFinite {
            input: "inf cm".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "measurement is not a finite number: 'inf cm'"
        );
    }

    #[test]
    fn test_unknown_ice_type_display() {
        let err = UnknownIceType("slush".to_string());
        assert_eq!(err.to_string(), "unknown ice type: slush");
    }

    #[test]
    fn test_log_error_wraps_store_error() {
        let err: LogError = StoreError::InvalidKey("a/b".to_string()).into();
        assert_eq!(
            err.to_string(),
            "failed to persist measurement log: invalid storage key: a/b"
        );
    }
}

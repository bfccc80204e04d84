use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No leading digits in {0:?}")]
    NoDigits(String),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Operation '{operation}' expects {expected} input, got {actual}")]
    InputKindMismatch {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid JSON input: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NoDigits("abc".to_string()).to_string(),
            "No leading digits in \"abc\""
        );
        assert_eq!(
            Error::UnknownOperation("nope".to_string()).to_string(),
            "Unknown operation: nope"
        );

        let mismatch = Error::InputKindMismatch {
            operation: "triple",
            expected: "numbers",
            actual: "texts",
        };
        assert_eq!(
            mismatch.to_string(),
            "Operation 'triple' expects numbers input, got texts"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::Json(_)));
    }
}

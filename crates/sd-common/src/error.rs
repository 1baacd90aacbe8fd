//! Error types for the sales dashboard.

use thiserror::Error;

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the sales dashboard.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    // Input errors (20-29)
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("week {week} is outside 1..=52")]
    WeekOutOfRange { week: i64 },

    #[error("unknown sector: {0}")]
    UnknownSector(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    // Access errors (40-49)
    #[error("role {role} may not submit {form}")]
    Forbidden { role: String, form: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidRecord(_) => 20,
            Error::WeekOutOfRange { .. } => 21,
            Error::UnknownSector(_) => 22,
            Error::UnknownRole(_) => 23,
            Error::SchemaValidation(_) => 24,
            Error::Forbidden { .. } => 40,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_class() {
        assert_eq!(Error::Config("x".into()).code(), 10);
        assert_eq!(Error::WeekOutOfRange { week: 60 }.code(), 21);
        assert_eq!(
            Error::Forbidden {
                role: "readonly".into(),
                form: "sales".into()
            }
            .code(),
            40
        );
    }

    #[test]
    fn week_message_names_the_value() {
        let msg = Error::WeekOutOfRange { week: 0 }.to_string();
        assert!(msg.contains('0'));
        assert!(msg.contains("1..=52"));
    }
}

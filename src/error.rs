use thiserror::Error;

use crate::password::{MAX_LENGTH, MIN_LENGTH};

/// Rejected password length. Carries the length that was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidLength {
    #[error(
        "Password must be at least {min} characters long to include all character types.",
        min = MIN_LENGTH
    )]
    TooShort { requested: usize },
    #[error("Password cannot exceed {max} characters.", max = MAX_LENGTH)]
    TooLong { requested: usize },
}

impl InvalidLength {
    /// The length that failed validation
    pub fn requested(&self) -> usize {
        match self {
            InvalidLength::TooShort { requested } | InvalidLength::TooLong { requested } => {
                *requested
            }
        }
    }
}

/// Failure while reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_message_names_lower_bound() {
        let err = InvalidLength::TooShort { requested: 3 };
        assert_eq!(
            err.to_string(),
            "Password must be at least 4 characters long to include all character types."
        );
        assert_eq!(err.requested(), 3);
    }

    #[test]
    fn test_too_long_message_names_upper_bound() {
        let err = InvalidLength::TooLong { requested: 101 };
        assert_eq!(err.to_string(), "Password cannot exceed 100 characters.");
        assert_eq!(err.requested(), 101);
    }

    #[test]
    fn test_settings_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(err.to_string().starts_with("malformed settings file"));
    }
}

//! Error types for the settlement engine.
//!
//! The calculation core never fails; these errors come from the surfaces
//! around it: configuration loading, worksheet edits and request validation.

use thiserror::Error;

/// The main error type for the settlement engine.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::PeriodNotFound {
///     id: "p-9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Period not found: p-9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No period with the given id exists in the worksheet.
    #[error("Period not found: {id}")]
    PeriodNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Two periods of a request share the same id.
    #[error("Duplicate period id: {id}")]
    DuplicatePeriod {
        /// The conflicting id.
        id: String,
    },

    /// Attempted to remove the only remaining period.
    #[error("Cannot remove the last remaining period")]
    LastPeriodRemoval,

    /// No past-due item with the given id exists in the worksheet.
    #[error("Past-due item not found: {id}")]
    PastDueItemNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A request was structurally valid JSON but violated an input rule.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of the violated rule.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/legislation.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/legislation.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_last_period_removal_message() {
        assert_eq!(
            EngineError::LastPeriodRemoval.to_string(),
            "Cannot remove the last remaining period"
        );
    }

    #[test]
    fn test_past_due_item_not_found_displays_id() {
        let error = EngineError::PastDueItemNotFound {
            id: "item_7".to_string(),
        };
        assert_eq!(error.to_string(), "Past-due item not found: item_7");
    }

    #[test]
    fn test_duplicate_period_displays_id() {
        let error = EngineError::DuplicatePeriod {
            id: "1".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate period id: 1");
    }

    #[test]
    fn test_invalid_request_displays_message() {
        let error = EngineError::InvalidRequest {
            message: "at least one period is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid request: at least one period is required"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_last_period() -> EngineResult<()> {
            Err(EngineError::LastPeriodRemoval)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_last_period()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::LastPeriodRemoval)
        ));
    }
}

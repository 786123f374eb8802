//! Error types for the Salary Estimator.
//!
//! The estimator itself never fails. These errors cover loading reference
//! data, rejecting out-of-range input at the API/CLI edge, and clipboard
//! writes.

use thiserror::Error;

/// The main error type for the Salary Estimator.
///
/// # Example
///
/// ```
/// use salary_estimator::error::EstimatorError;
///
/// let error = EstimatorError::ConfigNotFound {
///     path: "/missing/catalog.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/catalog.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
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

    /// Reference data parsed but is internally inconsistent.
    #[error("Invalid reference data: {message}")]
    InvalidReferenceData {
        /// A description of the integrity defect.
        message: String,
    },

    /// A calculation input field was outside its allowed range.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Writing to the clipboard failed.
    #[error("Clipboard error: {message}")]
    ClipboardError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EstimatorError.
pub type EstimatorResult<T> = Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EstimatorError::ConfigNotFound {
            path: "/missing/catalog.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/catalog.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EstimatorError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_reference_data_displays_message() {
        let error = EstimatorError::InvalidReferenceData {
            message: "role 'rust' has no salary band".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid reference data: role 'rust' has no salary band"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EstimatorError::InvalidInput {
            field: "years".to_string(),
            message: "must be between 0 and 15".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'years': must be between 0 and 15"
        );
    }

    #[test]
    fn test_clipboard_error_displays_message() {
        let error = EstimatorError::ClipboardError {
            message: "permission denied".to_string(),
        };
        assert_eq!(error.to_string(), "Clipboard error: permission denied");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EstimatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EstimatorResult<()> {
            Err(EstimatorError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EstimatorResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

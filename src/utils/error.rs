use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxiParkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Trip #{trip_index} references unknown driver '{driver}'")]
    UnknownDriverError { trip_index: usize, driver: String },

    #[error("Trip #{trip_index} references unknown passenger '{passenger}'")]
    UnknownPassengerError { trip_index: usize, passenger: String },

    #[error("Trip #{trip_index} is invalid: {reason}")]
    InvalidTripError { trip_index: usize, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TaxiParkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TaxiParkError::IoError(_) => ErrorCategory::Io,
            TaxiParkError::SerializationError(_) | TaxiParkError::CsvError(_) => ErrorCategory::Data,
            TaxiParkError::ConfigValidationError { .. }
            | TaxiParkError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            TaxiParkError::UnknownDriverError { .. }
            | TaxiParkError::UnknownPassengerError { .. }
            | TaxiParkError::InvalidTripError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Validation => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Data => format!("The park data could not be read: {}", self),
            ErrorCategory::Config => format!("The configuration is invalid: {}", self),
            ErrorCategory::Validation => format!("The park data is inconsistent: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TaxiParkError::IoError(_) => "Check that the file exists and is readable",
            TaxiParkError::SerializationError(_) => {
                "Make sure the park file is valid JSON with all_drivers, all_passengers and trips"
            }
            TaxiParkError::CsvError(_) => "Check that the output destination accepts CSV data",
            TaxiParkError::ConfigValidationError { .. } => "Make sure the file is valid TOML",
            TaxiParkError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the configuration file"
            }
            TaxiParkError::UnknownDriverError { .. } => "Add the driver to all_drivers",
            TaxiParkError::UnknownPassengerError { .. } => "Add the passenger to all_passengers",
            TaxiParkError::InvalidTripError { .. } => {
                "Costs and discounts must be finite, non-negative numbers"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TaxiParkError>;

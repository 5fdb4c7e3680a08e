use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unsupported agency type: {discriminator}")]
    UnsupportedType { discriminator: String },

    #[error("Unsupported field for {agency_type}: {field}")]
    UnsupportedField { agency_type: String, field: String },

    #[error("Agency not found: {name}")]
    AgencyNotFound { name: String },

    #[error("Agency '{name}' is a {actual}, not a {declared}")]
    TypeMismatch {
        name: String,
        declared: String,
        actual: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input ended while reading '{prompt}'")]
    InputExhausted { prompt: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RegistryError {
    /// Short message for the diagnostic line shown to a user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::UnsupportedType { .. } => "Unsupported agency type.".to_string(),
            RegistryError::UnsupportedField { agency_type, .. } => {
                format!("Unsupported field for {}.", agency_type)
            }
            RegistryError::AgencyNotFound { .. } => "Agency not found.".to_string(),
            RegistryError::TypeMismatch { name, actual, .. } => {
                format!("Agency '{}' is registered as {}.", name, actual)
            }
            RegistryError::InvalidFieldValue { field, value, .. } => {
                format!("'{}' is not a valid {}.", value, field)
            }
            RegistryError::InputExhausted { .. } => "No more input available.".to_string(),
            RegistryError::IoError(_) => {
                "Could not read or write the terminal or file.".to_string()
            }
            RegistryError::CsvError(_) | RegistryError::SerializationError(_) => {
                "Could not export the registry.".to_string()
            }
            RegistryError::ConfigError { .. }
            | RegistryError::MissingConfigError { .. }
            | RegistryError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistryError::UnsupportedType { .. } => {
                "Use one of the known agency types: \"Print Media\" or \"Radio Station\""
            }
            RegistryError::UnsupportedField { .. } => {
                "Print Media accepts Periodicity and Circulation; Radio Station accepts Frequency Range and Frequency"
            }
            RegistryError::AgencyNotFound { .. } => "Check the agency name with the list command",
            RegistryError::TypeMismatch { .. } => "Pass the type the agency was registered with",
            RegistryError::InvalidFieldValue { .. } => {
                "Circulation must be a non-negative whole number"
            }
            RegistryError::InputExhausted { .. } => "Provide a value for every prompted field",
            RegistryError::IoError(_) => "Check file paths and permissions",
            RegistryError::CsvError(_) | RegistryError::SerializationError(_) => {
                "Try a different output format"
            }
            RegistryError::ConfigError { .. }
            | RegistryError::MissingConfigError { .. }
            | RegistryError::InvalidConfigValueError { .. } => {
                "Fix the seed file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_messages() {
        let err = RegistryError::AgencyNotFound {
            name: "Ghost".to_string(),
        };
        assert_eq!(err.to_string(), "Agency not found: Ghost");
        assert_eq!(err.user_friendly_message(), "Agency not found.");

        let err = RegistryError::UnsupportedField {
            agency_type: "Print Media".to_string(),
            field: "Color".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Unsupported field for Print Media.");
    }
}

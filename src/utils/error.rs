use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailcheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid email address for {field}: '{value}'")]
    InvalidAddressError { field: String, value: String },

    #[error("Delivery blocked, {} participant(s) with invalid addresses: {}", .rejected.len(), .rejected.join(", "))]
    GateRejectedError { rejected: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MailcheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::TomlError(_) => ErrorCategory::Parsing,
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidAddressError { .. } | Self::GateRejectedError { .. } => {
                ErrorCategory::Address
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Address => ErrorSeverity::Medium,
            ErrorCategory::Parsing | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI: 2 for rejected addresses, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High | ErrorSeverity::Critical => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the roster file exists and is readable",
            Self::CsvError(_) => "Make sure the CSV roster has a 'name,email' header row",
            Self::TomlError(_) => "Make sure the roster is valid TOML with [[participants]] entries",
            Self::MissingConfigError { .. } => "Add the missing field to the roster",
            Self::InvalidConfigValueError { .. } => "Fix the highlighted value in the roster",
            Self::InvalidAddressError { .. } | Self::GateRejectedError { .. } => {
                "Correct the listed addresses (local-part@domain.tld) and run the check again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read the roster: {}", e),
            Self::CsvError(_) | Self::TomlError(_) => {
                format!("The roster could not be parsed: {}", self)
            }
            Self::GateRejectedError { rejected } => format!(
                "No mail was sent. Invalid addresses for: {}",
                rejected.join(", ")
            ),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MailcheckError>;

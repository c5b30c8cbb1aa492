use thiserror::Error;

/// Why a set of flights could not be collapsed into a single itinerary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveError {
    #[error("no flights provided")]
    NoSegments,

    #[error("flight loop detected")]
    Loop,

    #[error("broken flight path")]
    BrokenPath,
}

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("json parsing: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("{field} {reason}")]
    InvalidFieldValue { field: String, reason: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Itinerary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FlightError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FlightError::IoError(_) => ErrorCategory::Io,
            FlightError::ConfigValidationError { .. }
            | FlightError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FlightError::SerializationError(_)
            | FlightError::ValidationError { .. }
            | FlightError::InvalidFieldValue { .. } => ErrorCategory::Input,
            FlightError::Resolve(_) => ErrorCategory::Itinerary,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Itinerary => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FlightError::IoError(_) => "Check that the address is free and the file is readable",
            FlightError::ConfigValidationError { .. }
            | FlightError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the TOML configuration file"
            }
            FlightError::SerializationError(_) => {
                "Pass a JSON object like {\"flights\": [{\"source\": \"SFO\", \"dest\": \"EWR\"}]}"
            }
            FlightError::ValidationError { .. } | FlightError::InvalidFieldValue { .. } => {
                "Every flight needs a non-empty source and dest"
            }
            FlightError::Resolve(ResolveError::NoSegments) => "Provide at least one flight",
            FlightError::Resolve(ResolveError::Loop) => {
                "Remove the flights that return to an airport already visited"
            }
            FlightError::Resolve(ResolveError::BrokenPath) => {
                "Make sure the flights form one unbroken chain without branches"
            }
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("System error: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Itinerary => format!("Cannot build itinerary: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;

//! Structured error type for the classification gate
//!
//! All fallible paths in the crate converge on [`GateError`] so that model,
//! configuration, and request-validation failures stay distinguishable all the
//! way up to the HTTP layer.

use std::fmt;

/// Unified error type for all gate operations
#[derive(Debug)]
pub enum GateError {
    /// Configuration-related errors (file loading, parsing, validation)
    Configuration {
        operation: String,
        source: ConfigErrorType,
        context: Option<String>,
    },

    /// Model-related errors (loading, initialization, inference)
    Model {
        model_type: ModelErrorType,
        operation: String,
        source: String,
        context: Option<String>,
    },

    /// Processing errors (tokenization, tensor operations)
    Processing {
        operation: String,
        source: String,
        input_context: Option<String>,
    },

    /// Validation errors (input validation, parameter checks)
    Validation {
        field: String,
        expected: String,
        actual: String,
    },

    /// I/O errors (file operations, device access)
    Io {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },

    /// External library errors (candle, tokenizers, hf-hub)
    External {
        library: String,
        operation: String,
        error: String,
    },
}

/// Configuration error subtypes
#[derive(Debug)]
pub enum ConfigErrorType {
    FileNotFound(String),
    ParseError(String),
    MissingField(String),
    InvalidData(String),
}

/// Model error subtypes
#[derive(Debug, Clone, Copy)]
pub enum ModelErrorType {
    ModernBert,
    Tokenizer,
    Classifier,
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::Configuration {
                operation,
                source,
                context,
            } => {
                write!(f, "Configuration error in '{}': {}", operation, source)?;
                if let Some(ctx) = context {
                    write!(f, " (context: {})", ctx)?;
                }
                Ok(())
            }
            GateError::Model {
                model_type,
                operation,
                source,
                context,
            } => {
                write!(
                    f,
                    "Model error ({:?}) in '{}': {}",
                    model_type, operation, source
                )?;
                if let Some(ctx) = context {
                    write!(f, " (context: {})", ctx)?;
                }
                Ok(())
            }
            GateError::Processing {
                operation,
                source,
                input_context,
            } => {
                write!(f, "Processing error in '{}': {}", operation, source)?;
                if let Some(ctx) = input_context {
                    write!(f, " (input: {})", ctx)?;
                }
                Ok(())
            }
            GateError::Validation {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Validation error for '{}': expected '{}', got '{}'",
                    field, expected, actual
                )
            }
            GateError::Io {
                operation,
                path,
                source,
            } => {
                write!(f, "I/O error in '{}': {}", operation, source)?;
                if let Some(p) = path {
                    write!(f, " (path: {})", p)?;
                }
                Ok(())
            }
            GateError::External {
                library,
                operation,
                error,
            } => {
                write!(
                    f,
                    "External error in {} during '{}': {}",
                    library, operation, error
                )
            }
        }
    }
}

impl fmt::Display for ConfigErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorType::FileNotFound(path) => write!(f, "file not found: {}", path),
            ConfigErrorType::ParseError(msg) => write!(f, "parse error: {}", msg),
            ConfigErrorType::MissingField(field) => write!(f, "missing required field: {}", field),
            ConfigErrorType::InvalidData(msg) => write!(f, "invalid data: {}", msg),
        }
    }
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GateError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for gate operations
pub type GateResult<T> = Result<T, GateError>;

impl From<GateError> for candle_core::Error {
    fn from(err: GateError) -> Self {
        candle_core::Error::Msg(err.to_string())
    }
}

impl From<std::io::Error> for GateError {
    fn from(err: std::io::Error) -> Self {
        GateError::Io {
            operation: "I/O operation".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<serde_json::Error> for GateError {
    fn from(err: serde_json::Error) -> Self {
        GateError::Configuration {
            operation: "JSON parsing".to_string(),
            source: ConfigErrorType::ParseError(err.to_string()),
            context: None,
        }
    }
}

/// Create a model error
#[macro_export]
macro_rules! model_error {
    ($model_type:expr, $operation:expr, $msg:expr) => {
        $crate::core::GateError::Model {
            model_type: $model_type,
            operation: $operation.to_string(),
            source: $msg.to_string(),
            context: None,
        }
    };
    ($model_type:expr, $operation:expr, $msg:expr, $context:expr) => {
        $crate::core::GateError::Model {
            model_type: $model_type,
            operation: $operation.to_string(),
            source: $msg.to_string(),
            context: Some($context.to_string()),
        }
    };
}

/// Create a validation error
#[macro_export]
macro_rules! validation_error {
    ($field:expr, $expected:expr, $actual:expr) => {
        $crate::core::GateError::Validation {
            field: $field.to_string(),
            expected: $expected.to_string(),
            actual: $actual.to_string(),
        }
    };
}

/// Convert candle_core::Error to GateError with operation context
pub fn from_candle_error(err: candle_core::Error, operation: &str) -> GateError {
    GateError::External {
        library: "candle-core".to_string(),
        operation: operation.to_string(),
        error: err.to_string(),
    }
}

/// Configuration file loading errors
pub mod config_errors {
    use super::*;

    pub fn file_not_found(path: &str) -> GateError {
        GateError::Configuration {
            operation: "config file loading".to_string(),
            source: ConfigErrorType::FileNotFound(path.to_string()),
            context: None,
        }
    }

    pub fn missing_field(field: &str, file: &str) -> GateError {
        GateError::Configuration {
            operation: "config validation".to_string(),
            source: ConfigErrorType::MissingField(field.to_string()),
            context: Some(format!("in file: {}", file)),
        }
    }

    pub fn invalid_json(file: &str, error: &str) -> GateError {
        GateError::Configuration {
            operation: "JSON parsing".to_string(),
            source: ConfigErrorType::ParseError(error.to_string()),
            context: Some(format!("file: {}", file)),
        }
    }

    pub fn invalid_labels(file: &str, detail: &str) -> GateError {
        GateError::Configuration {
            operation: "label validation".to_string(),
            source: ConfigErrorType::InvalidData(detail.to_string()),
            context: Some(format!("file: {}", file)),
        }
    }
}

/// Model operation errors
pub mod model_errors {
    use super::*;

    pub fn load_failure(model_type: ModelErrorType, path: &str, error: &str) -> GateError {
        GateError::Model {
            model_type,
            operation: "model loading".to_string(),
            source: error.to_string(),
            context: Some(format!("path: {}", path)),
        }
    }

    pub fn inference_failure(model_type: ModelErrorType, error: &str) -> GateError {
        GateError::Model {
            model_type,
            operation: "model inference".to_string(),
            source: error.to_string(),
            context: None,
        }
    }

    pub fn tokenizer_failure(error: &str) -> GateError {
        GateError::Model {
            model_type: ModelErrorType::Tokenizer,
            operation: "tokenization".to_string(),
            source: error.to_string(),
            context: None,
        }
    }
}

/// Processing operation errors
pub mod processing_errors {
    use super::*;

    pub fn tensor_operation(operation: &str, error: &str) -> GateError {
        GateError::Processing {
            operation: format!("tensor {}", operation),
            source: error.to_string(),
            input_context: None,
        }
    }
}

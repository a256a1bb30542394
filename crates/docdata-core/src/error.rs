//! Error types for docdata.
//!
//! Only two kinds of failure are ever meant to reach a pipeline caller:
//! transformer failures and configuration problems. Parse failures are
//! produced by block parsers and swallowed by the extractor, which turns them
//! into the "no metadata" result.

/// Errors that can occur in docdata.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A metadata block could not be parsed into fields.
    #[error("Parse error: {message}")]
    Parse {
        /// What the parser rejected
        message: String,
    },

    /// A transformer failed while converting a field's lines.
    #[error("Transform error{}: {message}", field_suffix(.field))]
    Transform {
        /// Field being transformed, when known
        field: Option<String>,
        /// What went wrong
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|f| format!(" in field '{f}'"))
        .unwrap_or_default()
}

/// Convenience `Result` type alias for docdata operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new transform error.
    pub fn transform<S: Into<String>>(message: S) -> Self {
        Error::Transform {
            field: None,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transform error with a field name.
    pub fn transform_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Transform {
            field: Some(field.into()),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transform error with a message and source error.
    pub fn transform_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transform {
            field: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error came from a block parser.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns whether this error came from a transformer.
    pub fn is_transform(&self) -> bool {
        matches!(self, Error::Transform { .. })
    }
}

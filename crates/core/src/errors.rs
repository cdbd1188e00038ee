/// Result type alias for curator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for curator operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or missing configuration
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Inventory data that violates the descriptor contract
    #[error("invalid input for '{field}': {message}")]
    InputValidation { field: String, message: String },

    /// Transport-level failures talking to the cluster
    #[error("network error for '{endpoint}': {message}")]
    Network {
        endpoint: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The cluster answered but the inventory could not be read
    #[error("failed to read inventory for '{scope}': {message}")]
    Inventory { scope: String, message: String },

    /// A single delete request failed
    #[error("failed to delete index '{index}': {message}")]
    Deletion { index: String, message: String },

    /// A run finished but some planned deletions failed
    #[error("{failed} of {planned} planned deletions failed")]
    IncompleteRun { failed: usize, planned: usize },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// An error annotated with additional context
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an input validation error for a named field
    #[must_use]
    pub fn input_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InputValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a network error with a source error
    #[must_use]
    pub fn network_with_source(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an inventory error
    #[must_use]
    pub fn inventory(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Inventory {
            scope: scope.into(),
            message: message.into(),
        }
    }

    /// Create a deletion error
    #[must_use]
    pub fn deletion(index: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Deletion {
            index: index.into(),
            message: message.into(),
        }
    }

    /// Create an incomplete run error
    #[must_use]
    pub fn incomplete_run(failed: usize, planned: usize) -> Self {
        Error::IncompleteRun { failed, planned }
    }

    /// Whether retrying the same operation later could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Network { .. } | Error::Deletion { .. } => true,
            Error::Context { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: message.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}

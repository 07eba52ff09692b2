use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{var} env var is empty")]
    MissingCredential { var: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("GraphQL operation '{operation}' failed: {}", messages.join("; "))]
    GraphQlError {
        operation: String,
        messages: Vec<String>,
    },

    #[error("Malformed response for '{operation}': {message}")]
    MalformedResponseError { operation: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("{stage}: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<ExportError>,
    },
}

impl ExportError {
    /// Wraps the error with the name of the step that was running.
    pub fn at(self, stage: impl Into<String>) -> Self {
        ExportError::Stage {
            stage: stage.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any stage wrappers.
    pub fn root(&self) -> &ExportError {
        match self {
            ExportError::Stage { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self.root(),
            ExportError::MissingCredential { .. }
                | ExportError::ConfigError { .. }
                | ExportError::InvalidConfigValueError { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.root() {
            ExportError::MissingCredential { var } => {
                format!("{} is not set. Export it before running the exporter.", var)
            }
            ExportError::ApiError(_) | ExportError::HttpStatusError { .. } => {
                format!("Could not reach the checks API ({})", self)
            }
            ExportError::GraphQlError { .. } => {
                format!("The checks API rejected a query ({})", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

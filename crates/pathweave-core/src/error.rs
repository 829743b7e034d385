//! Error types and exit codes for pathweave
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, rendering, interruption)
//! - 2: Usage error (bad flags/args, invalid values, unsupported input)
//! - 3: Data error (missing nodes/edges, duplicates, no path)

mod macros;

use thiserror::Error;

/// Exit codes for the pathweave binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, duplicate edge, unreachable target (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or analysing a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph model errors (exit code 3)
    #[error("node '{name}' is not in graph")]
    NodeNotFound { name: String },

    #[error("a node named '{name}' has already been added to the graph")]
    NodeAlreadyExists { name: String },

    #[error("edge between '{from}' and '{to}' is not in graph")]
    EdgeNotFound { from: String, to: String },

    #[error("an edge between '{from}' and '{to}' has already been added to the graph")]
    EdgeAlreadyExists { from: String, to: String },

    #[error("no path found between '{from}' and '{to}'")]
    PathNotFound { from: String, to: String },

    // Usage errors (exit code 2)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout engine '{engine}' not found (looked for {path})")]
    EngineNotFound { engine: String, path: String },

    #[error("layout engine '{engine}' rejected its input: {message}")]
    RenderSyntax { engine: String, message: String },

    #[error("failed to render with '{engine}': {reason}")]
    RenderFailed { engine: String, reason: String },

    #[error("analysis interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an unknown node name
    pub fn node_not_found(name: impl Into<String>) -> Self {
        GraphError::NodeNotFound { name: name.into() }
    }

    /// Create an error for a duplicate node name
    pub fn node_already_exists(name: impl Into<String>) -> Self {
        GraphError::NodeAlreadyExists { name: name.into() }
    }

    /// Create an error for a missing edge between two known nodes
    pub fn edge_not_found(source: impl Into<String>, target: impl Into<String>) -> Self {
        GraphError::EdgeNotFound {
            from: source.into(),
            to: target.into(),
        }
    }

    /// Create an error for a duplicate edge
    pub fn edge_already_exists(source: impl Into<String>, target: impl Into<String>) -> Self {
        GraphError::EdgeAlreadyExists {
            from: source.into(),
            to: target.into(),
        }
    }

    /// Create an error for an unreachable target
    pub fn path_not_found(source: impl Into<String>, target: impl Into<String>) -> Self {
        GraphError::PathNotFound {
            from: source.into(),
            to: target.into(),
        }
    }

    /// Create an error for an invalid argument or configuration value
    pub fn invalid_argument(message: impl std::fmt::Display) -> Self {
        GraphError::InvalidArgument(message.to_string())
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Whether a `try_*` variant should turn this error into a plain `false`/`None`
    pub fn is_absence_or_conflict(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound { .. }
                | GraphError::NodeAlreadyExists { .. }
                | GraphError::EdgeNotFound { .. }
                | GraphError::EdgeAlreadyExists { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidArgument(_)
            | GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::NodeNotFound { .. }
            | GraphError::NodeAlreadyExists { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::EdgeAlreadyExists { .. }
            | GraphError::PathNotFound { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Toml(_)
            | GraphError::Json(_)
            | GraphError::EngineNotFound { .. }
            | GraphError::RenderSyntax { .. }
            | GraphError::RenderFailed { .. }
            | GraphError::Interrupted
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::NodeAlreadyExists { .. } => "node_already_exists",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::EdgeAlreadyExists { .. } => "edge_already_exists",
            GraphError::PathNotFound { .. } => "path_not_found",
            GraphError::InvalidArgument(_) => "invalid_argument",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::EngineNotFound { .. } => "engine_not_found",
            GraphError::RenderSyntax { .. } => "render_syntax",
            GraphError::RenderFailed { .. } => "render_failed",
            GraphError::Interrupted => "interrupted",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathweave operations
pub type Result<T> = std::result::Result<T, GraphError>;

//! Error types and exit codes for mazepath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid maze settings)
//! - 3: Graph data error (duplicate vertex, invalid edge, missing vertex, unreachable end)

mod macros;

use thiserror::Error;

/// Exit codes for the mazepath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during mazepath operations
#[derive(Error, Debug)]
pub enum MazepathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph data errors (exit code 3)
    #[error("duplicate vertex: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MazepathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MazepathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex inserted twice
    pub fn duplicate_vertex(vertex: &impl std::fmt::Debug) -> Self {
        MazepathError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a rejected edge
    pub fn invalid_edge(
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        reason: impl Into<String>,
    ) -> Self {
        MazepathError::InvalidEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            reason: reason.into(),
        }
    }

    /// Create an error for a vertex missing from the graph
    pub fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        MazepathError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an end vertex with no path from the start
    pub fn unreachable(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        MazepathError::Unreachable {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MazepathError::UnknownFormat(_)
            | MazepathError::UsageError(_)
            | MazepathError::InvalidValue { .. } => ExitCode::Usage,

            MazepathError::DuplicateVertex { .. }
            | MazepathError::InvalidEdge { .. }
            | MazepathError::VertexNotFound { .. }
            | MazepathError::Unreachable { .. } => ExitCode::Data,

            MazepathError::Io(_)
            | MazepathError::Json(_)
            | MazepathError::Toml(_)
            | MazepathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MazepathError::UnknownFormat(_) => "unknown_format",
            MazepathError::UsageError(_) => "usage_error",
            MazepathError::InvalidValue { .. } => "invalid_value",
            MazepathError::DuplicateVertex { .. } => "duplicate_vertex",
            MazepathError::InvalidEdge { .. } => "invalid_edge",
            MazepathError::VertexNotFound { .. } => "vertex_not_found",
            MazepathError::Unreachable { .. } => "unreachable",
            MazepathError::Io(_) => "io_error",
            MazepathError::Json(_) => "json_error",
            MazepathError::Toml(_) => "toml_error",
            MazepathError::Other(_) => "other",
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

/// Result type alias for mazepath operations
pub type Result<T> = std::result::Result<T, MazepathError>;

//! Error types for Paddock.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=store file, 3=not_found, 4=validation, 8=io)
//! - Retryability flags for scripted consumers
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use thiserror::Error;

/// Result type alias for Paddock operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string or on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Store file (exit 2)
    MalformedRow,
    PartIdsExhausted,

    // Not Found (exit 3)
    KartNotFound,
    PartNotFound,
    TrackNotFound,

    // Validation (exit 4)
    UnknownPartType,
    InvalidArgument,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::MalformedRow => "MALFORMED_ROW",
            Self::PartIdsExhausted => "PART_IDS_EXHAUSTED",
            Self::KartNotFound => "KART_NOT_FOUND",
            Self::PartNotFound => "PART_NOT_FOUND",
            Self::TrackNotFound => "TRACK_NOT_FOUND",
            Self::UnknownPartType => "UNKNOWN_PART_TYPE",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::MalformedRow | Self::PartIdsExhausted => 2,
            Self::KartNotFound | Self::PartNotFound | Self::TrackNotFound => 3,
            Self::UnknownPartType | Self::InvalidArgument => 4,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether the caller should retry with corrected input.
    ///
    /// True for validation errors; false for not-found, I/O, or
    /// corrupt-file errors.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::UnknownPartType | Self::InvalidArgument)
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in Paddock operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Kart not found: {id}")]
    KartNotFound { id: u64 },

    #[error("Part not found: {id}")]
    PartNotFound { id: String },

    #[error("Track not found: {id}")]
    TrackNotFound { id: u64 },

    #[error("Unknown part type: {name}")]
    UnknownPartType { name: String },

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    #[error("Part id space exhausted: counter {counter} does not fit a 4-digit sequence")]
    PartIdsExhausted { counter: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::KartNotFound { .. } => ErrorCode::KartNotFound,
            Self::PartNotFound { .. } => ErrorCode::PartNotFound,
            Self::TrackNotFound { .. } => ErrorCode::TrackNotFound,
            Self::UnknownPartType { .. } => ErrorCode::UnknownPartType,
            Self::MalformedRow { .. } => ErrorCode::MalformedRow,
            Self::PartIdsExhausted { .. } => ErrorCode::PartIdsExhausted,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::KartNotFound { id } => Some(format!(
                "No kart with id {id}. Use `paddock kart list` to see registered karts."
            )),

            Self::PartNotFound { id } => Some(format!(
                "No part with id '{id}'. Use `paddock part list` to see registered parts."
            )),

            Self::TrackNotFound { id } => Some(format!(
                "No track with id {id}. Use `paddock track list` to see registered tracks."
            )),

            Self::UnknownPartType { name } => {
                let mut hint = format!(
                    "Valid part types: {}.",
                    crate::catalog::PART_TYPES.join(", ")
                );
                if let Some(suggestion) = crate::catalog::closest_type(name) {
                    hint.push_str(&format!(" Did you mean '{suggestion}'?"));
                }
                Some(hint)
            }

            Self::MalformedRow { .. } => Some(
                "The garage file is corrupt. Fix the offending row by hand or \
                 restore it from a backup; Paddock will not guess at mileage values."
                    .to_string(),
            ),

            Self::PartIdsExhausted { .. } => Some(
                "Part ids embed a 4-digit sequence number and this garage has \
                 used them all. Start a fresh garage file to register more parts."
                    .to_string(),
            ),

            Self::InvalidArgument(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, retryability, exit code, and
    /// optional recovery hint.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

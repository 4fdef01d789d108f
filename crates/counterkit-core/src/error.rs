//! Error handling for CounterKit
//!
//! Provides the error types for the layout engine and its callers:
//! - Layout errors (rejected piece mutations, unknown ids)
//! - Unified `Error` wrapping layout, I/O and JSON failures
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Raised when a layout mutation is rejected. A rejected mutation leaves the
/// layout untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A width, height or depth would become non-positive or non-finite
    #[error("Invalid {field}: {value} (must be a positive number)")]
    InvalidDimension {
        /// The dimension being set ("width", "height" or "depth").
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The operation targets a piece that is not in the layout
    #[error("Unknown piece id {id}")]
    UnknownPieceId {
        /// The id that was not found.
        id: u64,
    },

    /// A piece with the same id is already in the layout
    #[error("Duplicate piece id {id}")]
    DuplicatePieceId {
        /// The id that collided.
        id: u64,
    },

    /// Rotation angle is NaN or infinite
    #[error("Invalid rotation: {value}")]
    InvalidRotation {
        /// The rejected angle in degrees.
        value: f64,
    },

    /// Border radius is negative, non-finite or above the configured maximum
    #[error("Invalid border radius {value} (allowed 0..={max})")]
    InvalidBorderRadius {
        /// The rejected radius.
        value: f64,
        /// The largest accepted radius.
        max: f64,
    },

    /// A position or delta component is NaN or infinite
    #[error("Non-finite coordinate for {field}")]
    NonFiniteCoordinate {
        /// The offending component name.
        field: &'static str,
    },
}

impl LayoutError {
    /// True for conditions that are reported but not treated as failures
    /// by interactive callers (a stale id from a removed piece).
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, LayoutError::UnknownPieceId { .. })
    }
}

/// Main error type for CounterKit
///
/// A unified error type used at crate boundaries (file loading, templates,
/// configuration glue).
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

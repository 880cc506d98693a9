//! Error types for network construction and equation assembly.
//!
//! This module provides a unified error type [`QGraphError`] that covers
//! every failure in the pipeline: reading the adjacency file, parsing its
//! rows, checking the network shape and assembling the system matrix.

use thiserror::Error;

use crate::network::VertexId;

/// Result type alias using [`QGraphError`].
pub type Result<T> = std::result::Result<T, QGraphError>;

/// Unified error type for all QGraph operations.
#[derive(Error, Debug)]
pub enum QGraphError {
    // ============ Input Errors ============
    /// Error reading the adjacency matrix file
    #[error("Failed to read adjacency file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed adjacency matrix row or entry
    #[error("Format error at line {line}, column {column}: {message}")]
    Format {
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Network Errors ============
    /// The network is not a tree hanging off the root
    #[error("Structural error at vertex {vertex}: {message}")]
    Structural { vertex: VertexId, message: String },

    // ============ Assembly Errors ============
    /// Invalid assembly configuration value
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Matrix blocks with incompatible shapes were combined
    #[error("Dimension mismatch: {message}")]
    DimensionMismatch { message: String },
}

impl QGraphError {
    /// Create a format error
    pub fn format(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a structural error
    pub fn structural(vertex: VertexId, message: impl Into<String>) -> Self {
        Self::Structural {
            vertex,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

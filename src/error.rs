//! Error types for the frame model repository

use thiserror::Error;

use crate::model::Tag;

/// Main error type for repository and file operations
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Node {0} not found in model")]
    NodeNotFound(Tag),

    #[error("Frame section {0} not found in model")]
    FrameSectionNotFound(Tag),

    #[error("Wall section {0} not found in model")]
    WallSectionNotFound(Tag),

    #[error("Element {0} not found in model")]
    ElementNotFound(Tag),

    #[error("Failed to read model file: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure while reading the positional model file
///
/// `line` is the 1-based physical line number, `record` names the record
/// the loader expected at that point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input while reading {record}")]
    UnexpectedEof { record: &'static str },

    #[error("line {line}: {record} has no field {index}")]
    MissingField {
        line: usize,
        record: &'static str,
        index: usize,
    },

    #[error("line {line}: {record} field {index} is not a valid number: '{token}'")]
    InvalidNumber {
        line: usize,
        record: &'static str,
        index: usize,
        token: String,
    },

    #[error("line {line}: input is not valid text")]
    InvalidText { line: usize },
}

/// Result type for repository operations
pub type ModelResult<T> = Result<T, ModelError>;

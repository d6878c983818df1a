//! Error types for netlist and layout files.

use gplace_place::PlaceError;

/// Errors raised while reading a netlist or a layout report.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// An I/O error occurred while reading or writing a file.
    #[error("failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    /// A line could not be parsed.
    #[error("line {line}: {message}")]
    ParseError {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A well-formed line describes an invalid board.
    #[error("line {line}: {source}")]
    Board {
        /// 1-based line number.
        line: usize,
        /// The board construction error.
        #[source]
        source: PlaceError,
    },

    /// A JSON layout could not be produced.
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetlistError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Returns the 1-based line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::ParseError { line, .. } | Self::Board { line, .. } => Some(*line),
            Self::IoError(_) | Self::Json(_) => None,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown metric type tag: {0}")]
    UnknownMetricType(i32),
}

/// Result type alias for data model operations
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Creates a new index error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "precondition",
            Self::UnknownMetricType(_) => "schema",
        }
    }
}

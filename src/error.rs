use thiserror::Error;

/// Input rejected before a scan starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A fixed window must hold at least one element and fit in the sequence.
    #[error("window width {width} is invalid for a sequence of length {len}")]
    InvalidWidth { width: usize, len: usize },

    /// A count or width arrived negative at the `i32` boundary.
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: i64 },

    /// Malformed sequence content.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, WindowError>;

/// Converts a signed exercise parameter into a width or count.
pub fn non_negative(name: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| WindowError::Negative {
        name,
        value: i64::from(value),
    })
}

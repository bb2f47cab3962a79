/// Convenience result type used across thumbstrip.
pub type ThumbstripResult<T> = Result<T, ThumbstripError>;

/// Top-level error taxonomy used by layout APIs.
#[derive(thiserror::Error, Debug)]
pub enum ThumbstripError {
    /// The expanded mode names an item outside `[0, item_count)`.
    #[error("invalid focus index: {focus_index} is out of range for {item_count} items")]
    InvalidFocusIndex {
        /// Focus index requested by the caller.
        focus_index: usize,
        /// Item count passed to the same `prepare` call.
        item_count: usize,
    },

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbstripError {
    /// Build a [`ThumbstripError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ThumbstripError::InvalidFocusIndex`] value.
    pub fn invalid_focus_index(focus_index: usize, item_count: usize) -> Self {
        Self::InvalidFocusIndex {
            focus_index,
            item_count,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use thiserror::Error;

/// Errors caught before a write is dispatched to the server.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} title cannot be empty")]
    EmptyTitle(&'static str),
    #[error("Tag name cannot be empty")]
    EmptyTagName,
    #[error("Emotional indicator must be between 1 and 5, got {0}")]
    EmotionalIndicatorOutOfRange(i32),
    #[error("Completed chapters ({completed}) cannot exceed total chapters ({total})")]
    ChaptersExceedTotal { completed: u32, total: u32 },
    #[error("Progress percentage must be between 0 and 100")]
    ProgressOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyTitle("Course").to_string(),
            "Course title cannot be empty"
        );
        assert_eq!(
            ValidationError::EmotionalIndicatorOutOfRange(7).to_string(),
            "Emotional indicator must be between 1 and 5, got 7"
        );
        assert_eq!(
            ValidationError::ChaptersExceedTotal {
                completed: 12,
                total: 10
            }
            .to_string(),
            "Completed chapters (12) cannot exceed total chapters (10)"
        );
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Two input sequences that must be aligned differ in length.
    #[error("shape mismatch: `{field}` has length {actual}, expected {expected}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("tick series is empty")]
    EmptySeries,

    #[error("batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),
}

/// Fail with `ShapeMismatch` unless `actual == expected`.
pub fn ensure_len(field: &'static str, expected: usize, actual: usize) -> Result<(), EngineError> {
    if actual != expected {
        return Err(EngineError::ShapeMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

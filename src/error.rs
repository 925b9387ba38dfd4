//! Error types for workload runs.

use thiserror::Error;

/// Errors a workload run can fail with.
///
/// Validation happens before any worker is spawned, so a failed run performs
/// no partial work.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunnerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("worker count {requested} exceeds the configured limit of {limit}")]
    ResourceExhausted { requested: u32, limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RunnerError::InvalidArgument("count must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: count must be non-negative"
        );

        let err = RunnerError::ResourceExhausted {
            requested: 5000,
            limit: 4096,
        };
        assert_eq!(
            err.to_string(),
            "worker count 5000 exceeds the configured limit of 4096"
        );
    }
}

/// The main error type for Headway components
#[derive(Debug, thiserror::Error)]
pub enum HeadwayError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Convenience result type used across the crate
pub type Result<T> = std::result::Result<T, HeadwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeadwayError::NotFound("account 'Acme Corp'".to_string());
        assert_eq!(err.to_string(), "Not found: account 'Acme Corp'");

        let err = HeadwayError::Internal("catalog drift".to_string());
        assert_eq!(err.to_string(), "Internal error: catalog drift");
    }

    #[test]
    fn test_anyhow_passthrough() {
        let err: HeadwayError = anyhow::anyhow!("wrapped").into();
        assert_eq!(err.to_string(), "wrapped");
    }
}

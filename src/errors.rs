use thiserror::Error;

/// Everything that can go wrong while turning a pattern config into a path.
///
/// Errors are local to a single `generate` call. Nothing is retried and no
/// partial path is ever handed back.
#[derive(Debug, Error)]
pub enum GenError {
    /// A parameter the generator cannot interpret, such as a spiral with
    /// three or fewer sides or a negative scale.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A loop bound tripped. The caller may retry with adjusted parameters.
    #[error("generation would not terminate: {0}")]
    NonTerminating(String),

    /// Geometry helpers need at least one point.
    #[error("path has no points")]
    EmptyPath,

    #[error("config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("config serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

impl GenError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GenError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects NaN and infinities, which would otherwise poison every point.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, GenError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GenError::invalid(name, format!("expected a finite number, got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("x", 2.5).unwrap(), 2.5);
        assert!(matches!(
            require_finite("x", f64::NAN),
            Err(GenError::InvalidParameter { name: "x", .. })
        ));
        assert!(require_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let err = GenError::invalid("sides", "must be greater than 3");
        assert_eq!(err.to_string(), "invalid parameter `sides`: must be greater than 3");
        assert_eq!(GenError::EmptyPath.to_string(), "path has no points");
    }
}

/// Errors raised when a shape cannot be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A required numeric field is NaN or infinite.
    NonFinite {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    /// A gradient arc was asked to draw with no colors at all.
    EmptyGradient,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::NonFinite {
                shape,
                field,
                value,
            } => write!(
                f,
                "Shape configuration is abnormal: {}.{} is {}",
                shape, field, value
            ),
            ShapeError::EmptyGradient => write!(f, "Gradient arc has no colors"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Result type for shape drawing.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Check that every `(field, value)` pair of `shape` is finite.
pub(crate) fn ensure_finite(shape: &'static str, fields: &[(&'static str, f64)]) -> ShapeResult<()> {
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(field, value)) => Err(ShapeError::NonFinite {
            shape,
            field,
            value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_reports_first_bad_field() {
        let err = ensure_finite("pie", &[("rx", 1.0), ("ry", f64::NAN), ("ir", f64::INFINITY)])
            .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::NonFinite {
                shape: "pie",
                field: "ry",
                ..
            }
        ));
        assert!(err.to_string().contains("pie.ry"));
    }
}

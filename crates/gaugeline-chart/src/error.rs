/// Errors raised while resolving gauge options.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than two ticks leaves no interval to divide the span into.
    SplitNumTooSmall { series: usize, split_num: usize },

    /// `min == max` (or a non-finite bound) maps every value to the same angle.
    DegenerateRange { series: usize, min: f64, max: f64 },

    /// A length string that is neither a number nor a percentage.
    InvalidLength(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SplitNumTooSmall { series, split_num } => write!(
                f,
                "Gauge series {}: split_num must be at least 2, got {}",
                series, split_num
            ),
            ConfigError::DegenerateRange { series, min, max } => write!(
                f,
                "Gauge series {}: value range {}..{} is empty",
                series, min, max
            ),
            ConfigError::InvalidLength(input) => {
                write!(f, "Invalid length {:?}: expected a number or a percentage", input)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for option resolution.
pub type ConfigResult<T> = Result<T, ConfigError>;

use crate::error::ConfigError;
use std::str::FromStr;

/// A size or position that is either absolute or relative to the render area.
///
/// ```
/// use gaugeline_chart::Length;
///
/// let radius: Length = "60%".parse().unwrap();
/// assert_eq!(radius, Length::Percent(60.0));
/// assert_eq!(radius.resolve(200.0), 120.0);
/// assert_eq!(Length::from(42.0).resolve(200.0), 42.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percent of a base length chosen by whoever resolves it.
    Percent(f64),
}

impl Length {
    pub fn px(value: f64) -> Self {
        Length::Px(value)
    }

    pub fn percent(value: f64) -> Self {
        Length::Percent(value)
    }

    /// Pixel value against `base` (ignored for absolute lengths).
    pub fn resolve(&self, base: f64) -> f64 {
        match *self {
            Length::Px(px) => px,
            Length::Percent(percent) => percent / 100.0 * base,
        }
    }

    pub fn is_percent(&self) -> bool {
        matches!(self, Length::Percent(_))
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Length::Px(px)
    }
}

impl FromStr for Length {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidLength(s.to_string());

        match trimmed.strip_suffix('%') {
            Some(percent) => percent
                .trim()
                .parse::<f64>()
                .map(Length::Percent)
                .map_err(|_| invalid()),
            None => trimmed.parse::<f64>().map(Length::Px).map_err(|_| invalid()),
        }
    }
}

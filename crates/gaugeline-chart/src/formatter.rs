//! Label and readout formatters.
//!
//! A formatter is either a template string with placeholders or a callback.
//! Templates substitute the first occurrence of each placeholder only.

use crate::layout::DatumLayout;
use std::fmt;
use std::sync::Arc;

/// Render a number the way chart text shows it: integers without a
/// fractional part, everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoids printing "-0".
        return "0".to_string();
    }
    value.to_string()
}

/// One axis label value: computed numbers, or literal text from the user.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Number(value) => f.write_str(&format_number(*value)),
            LabelValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for LabelValue {
    fn from(value: f64) -> Self {
        LabelValue::Number(value)
    }
}

impl From<&str> for LabelValue {
    fn from(text: &str) -> Self {
        LabelValue::Text(text.to_string())
    }
}

impl From<String> for LabelValue {
    fn from(text: String) -> Self {
        LabelValue::Text(text)
    }
}

/// Arguments passed to a label callback.
#[derive(Debug, Clone, Copy)]
pub struct LabelContext<'a> {
    pub value: &'a LabelValue,
    pub index: usize,
}

pub type LabelCallback = Arc<dyn Fn(LabelContext<'_>) -> String + Send + Sync>;
pub type DetailCallback = Arc<dyn Fn(&DatumLayout) -> String + Send + Sync>;

/// Formats axis labels. Templates substitute `{value}`.
#[derive(Clone)]
pub enum LabelFormatter {
    Template(String),
    Callback(LabelCallback),
}

impl LabelFormatter {
    pub fn template(template: impl Into<String>) -> Self {
        LabelFormatter::Template(template.into())
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(LabelContext<'_>) -> String + Send + Sync + 'static,
    {
        LabelFormatter::Callback(Arc::new(f))
    }

    pub fn format(&self, value: &LabelValue, index: usize) -> String {
        match self {
            LabelFormatter::Template(template) => {
                template.replacen("{value}", &value.to_string(), 1)
            }
            LabelFormatter::Callback(callback) => callback(LabelContext { value, index }),
        }
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFormatter::Template(template) => f.debug_tuple("Template").field(template).finish(),
            LabelFormatter::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Formats per-datum readouts. Templates substitute `{value}` then `{name}`.
#[derive(Clone)]
pub enum DetailFormatter {
    Template(String),
    Callback(DetailCallback),
}

impl DetailFormatter {
    pub fn template(template: impl Into<String>) -> Self {
        DetailFormatter::Template(template.into())
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&DatumLayout) -> String + Send + Sync + 'static,
    {
        DetailFormatter::Callback(Arc::new(f))
    }

    pub fn format(&self, datum: &DatumLayout) -> String {
        match self {
            DetailFormatter::Template(template) => template
                .replacen("{value}", &format_number(datum.value), 1)
                .replacen("{name}", &datum.name, 1),
            DetailFormatter::Callback(callback) => callback(datum),
        }
    }
}

impl fmt::Debug for DetailFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailFormatter::Template(template) => f.debug_tuple("Template").field(template).finish(),
            DetailFormatter::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

// Formatters hold closures, so equality is by variant and template only.
impl PartialEq for LabelFormatter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LabelFormatter::Template(a), LabelFormatter::Template(b)) => a == b,
            (LabelFormatter::Callback(a), LabelFormatter::Callback(b)) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

impl PartialEq for DetailFormatter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DetailFormatter::Template(a), DetailFormatter::Template(b)) => a == b,
            (DetailFormatter::Callback(a), DetailFormatter::Callback(b)) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_label_template_replaces_first_placeholder() {
        let formatter = LabelFormatter::template("{value}% of {value}");
        assert_eq!(formatter.format(&LabelValue::Number(25.0), 1), "25% of {value}");
    }

    #[test]
    fn test_label_callback_receives_index() {
        let formatter = LabelFormatter::callback(|ctx| format!("#{} {}", ctx.index, ctx.value));
        assert_eq!(formatter.format(&LabelValue::from("low"), 0), "#0 low");
    }

    #[test]
    fn test_debug_hides_callback() {
        let formatter = LabelFormatter::callback(|_| String::new());
        assert_eq!(format!("{:?}", formatter), "Callback(..)");
    }
}

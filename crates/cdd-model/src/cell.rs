use std::fmt;

use crate::numeric::{format_numeric, parse_number};

/// A single spreadsheet cell after loading.
///
/// Instrument exports mix numbers, free text, and blanks within one column, so
/// every stage pattern-matches on the tag instead of assuming a column type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Absent,
}

impl CellValue {
    /// Builds a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Infers a cell from raw delimited text.
    ///
    /// Blank input is `Absent`, finite numeric input is `Number`, anything
    /// else is kept verbatim as `Text`.
    pub fn infer(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Absent;
        }
        match parse_number(raw) {
            Some(value) => Self::Number(value),
            None => Self::Text(raw.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True for `Absent` and for text made only of whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text used when matching join keys.
    ///
    /// Integral numbers lose their fractional part so a key read as `12345.0`
    /// from a spreadsheet matches `12345` read from CSV.
    pub fn key_string(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Number(value) => Some(format_numeric(*value)),
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_numeric(*value)),
            Self::Text(text) => f.write_str(text),
            Self::Absent => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

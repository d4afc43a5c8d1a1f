// src/error.rs

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::classification::UnknownCode;
use crate::section::Section;

/// A malformed line in a drive error log. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: invalid value '{value}' for field '{field}'")]
    InvalidValue {
        line: usize,
        field: String,
        value: String,
    },

    #[error("line {line}: unknown field '{field}' in {section} section")]
    UnknownField {
        line: usize,
        field: String,
        section: Section,
    },

    #[error("line {line}: field '{field}' given twice in one {section} block")]
    DuplicateField {
        line: usize,
        field: String,
        section: Section,
    },

    #[error("line {line}: {source}")]
    UnknownCode {
        line: usize,
        #[source]
        source: UnknownCode,
    },

    #[error("line {line}: expected two comma-separated classification codes, found '{found}'")]
    MissingCode { line: usize, found: String },

    /// Field lines that were never closed by a classification line.
    #[error("line {line}: record starting here has no classification line")]
    MissingClassification { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidValue { line, .. }
            | ParseError::UnknownField { line, .. }
            | ParseError::DuplicateField { line, .. }
            | ParseError::UnknownCode { line, .. }
            | ParseError::MissingCode { line, .. }
            | ParseError::MissingClassification { line } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum DriveplotError {
    /// The file could not be opened or gunzipped.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' does not decompress to UTF-8 text: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("'{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("no plottable points in the {0} table")]
    EmptyPlot(Section),

    /// The padded axis range of the data overflows `f64`.
    #[error("{section} values span {min}..{max}, too wide to plot")]
    UnplottableRange { section: Section, min: f64, max: f64 },

    #[error("failed to render plot: {0}")]
    Plot(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for DriveplotError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        DriveplotError::Plot(format!("{value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_reports_file_and_line() {
        let err = DriveplotError::Parse {
            path: PathBuf::from("logs/drive1.gz"),
            source: ParseError::InvalidValue {
                line: 7,
                field: "average".to_string(),
                value: "N/A".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "'logs/drive1.gz': line 7: invalid value 'N/A' for field 'average'"
        );
    }

    #[test]
    fn test_unknown_code_message() {
        let err = ParseError::UnknownCode {
            line: 3,
            source: UnknownCode("x".to_string()),
        };
        assert_eq!(err.line(), 3);
        assert_eq!(err.to_string(), "line 3: unknown classification code 'x'");
    }
}

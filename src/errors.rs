use std::io;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("Ring has no generating curves")]
    EmptyRing,

    #[error("Position has dimension {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Ordinate index {index} out of range for a position of dimension {dimension}")]
    OrdinateOutOfRange { index: usize, dimension: usize },

    #[error("Unsupported position dimension {0}: must be 2 or 3")]
    UnsupportedDimension(usize),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Expected {expected} but found {found} (line {line})")]
    Unexpected {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("Expected a number but found '{literal}' (line {line})")]
    InvalidNumber { literal: String, line: usize },

    #[error("Unknown geometry type '{keyword}' (line {line})")]
    UnknownGeometryType { keyword: String, line: usize },

    #[error("Geometry collections nested deeper than {max_depth} levels (line {line})")]
    TooDeep { max_depth: usize, line: usize },

    #[error("Invalid geometry at line {line}: {source}")]
    Geometry { source: GeometryError, line: usize },

    #[error("Failed to read WKT input: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// The line the failure was detected on, or `None` for I/O failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Unexpected { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::UnknownGeometryType { line, .. }
            | ParseError::TooDeep { line, .. }
            | ParseError::Geometry { line, .. } => Some(*line),
            ParseError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_line_and_token() {
        let err = ParseError::Unexpected {
            expected: "')'".to_string(),
            found: "','".to_string(),
            line: 3,
        };
        assert_eq!(err.to_string(), "Expected ')' but found ',' (line 3)");
        assert_eq!(err.line(), Some(3));

        let err = ParseError::UnknownGeometryType {
            keyword: "FOO".to_string(),
            line: 1,
        };
        assert_eq!(err.to_string(), "Unknown geometry type 'FOO' (line 1)");
    }

    #[test]
    fn test_io_error_has_no_line() {
        let err: ParseError = io::Error::new(io::ErrorKind::UnexpectedEof, "gone").into();
        assert_eq!(err.line(), None);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_geometry_error_is_wrapped() {
        let err = ParseError::Geometry {
            source: GeometryError::DimensionMismatch {
                expected: 2,
                found: 3,
            },
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "Invalid geometry at line 7: Position has dimension 3, expected 2"
        );
        assert_eq!(err.line(), Some(7));
    }
}

//! Crate-level error type and `Result` alias.
//! Resource-open failures carry the offending path; the remaining variants
//! surface the degraded cases (bad characters, operators, division by zero)
//! that lenient mode folds into a zero result.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open input {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open output {path:?}: {source}")]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line, expected `NUMERAL OP NUMERAL`: {line:?}")]
    MalformedLine { line: String },

    #[error("Empty numeral")]
    EmptyNumeral,

    #[error("Invalid numeral character {ch:?} in {token:?}")]
    InvalidNumeral { token: String, ch: char },

    #[error("Unknown operator: {op:?}")]
    UnknownOperator { op: char },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,
}

impl Error {
    /// True for errors that end the whole run rather than a single line.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::OpenInput { .. } | Error::OpenOutput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_errors_are_fatal_line_errors_are_not() {
        let open = Error::OpenInput {
            path: PathBuf::from("input.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(open.is_fatal());
        assert!(!Error::DivisionByZero.is_fatal());
        assert!(
            !Error::MalformedLine {
                line: "X +".to_string()
            }
            .is_fatal()
        );
    }

    #[test]
    fn messages_name_the_culprit() {
        let err = Error::InvalidNumeral {
            token: "XIZ".to_string(),
            ch: 'Z',
        };
        assert_eq!(err.to_string(), "Invalid numeral character 'Z' in \"XIZ\"");

        let err = Error::OpenOutput {
            path: PathBuf::from("out/output.txt"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("out/output.txt"));
    }
}

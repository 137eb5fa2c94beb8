use tracing::debug;

use crate::core::arith::{evaluate, try_evaluate};
use crate::core::numeral::{decode, try_decode};
use crate::core::words::spell_signed;
use crate::error::{Error, Result};
use crate::types::Mode;

/// The three raw fields of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    pub left: String,
    pub op: char,
    pub right: String,
}

/// Split a line into `NUMERAL OP NUMERAL`. Exactly three whitespace-separated
/// fields are required and the middle one must be a single character; the
/// operator itself is checked later by the evaluator.
pub fn parse_line(line: &str) -> Result<OperationRecord> {
    let malformed = || Error::MalformedLine {
        line: line.to_string(),
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [left, op, right] = fields.as_slice() else {
        return Err(malformed());
    };

    let mut op_chars = op.chars();
    let (Some(op), None) = (op_chars.next(), op_chars.next()) else {
        return Err(malformed());
    };

    Ok(OperationRecord {
        left: left.to_string(),
        op,
        right: right.to_string(),
    })
}

/// Decode, evaluate and spell one line.
pub fn process_line(line: &str, mode: Mode) -> Result<String> {
    let record = parse_line(line)?;

    let result = match mode {
        Mode::Lenient => {
            let left = decode(&record.left);
            let right = decode(&record.right);
            evaluate(left, right, record.op)
        }
        Mode::Strict => {
            let left = try_decode(&record.left)?;
            let right = try_decode(&record.right)?;
            try_evaluate(left, right, record.op)?
        }
    };

    debug!(
        "{} {} {} = {}",
        record.left, record.op, record.right, result
    );
    Ok(spell_signed(result))
}

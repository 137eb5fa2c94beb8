use crate::error::{Error, Result};
use crate::types::Operator;

/// Apply `op` to two integers, reporting every case that has no numeric answer.
pub fn try_evaluate(a: i64, b: i64, op: char) -> Result<i64> {
    let operator = Operator::from_char(op).ok_or(Error::UnknownOperator { op })?;
    match operator {
        Operator::Add => a.checked_add(b).ok_or(Error::Overflow),
        Operator::Sub => a.checked_sub(b).ok_or(Error::Overflow),
        Operator::Mul => a.checked_mul(b).ok_or(Error::Overflow),
        Operator::Div => {
            if b == 0 {
                return Err(Error::DivisionByZero);
            }
            // Truncates toward zero
            a.checked_div(b).ok_or(Error::Overflow)
        }
    }
}

/// Lenient evaluation: unknown operators, division by zero and overflow all yield 0.
pub fn evaluate(a: i64, b: i64, op: char) -> i64 {
    try_evaluate(a, b, op).unwrap_or(0)
}

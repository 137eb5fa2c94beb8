use crate::error::{Error, Result};

/// Value of a single numeral character, `None` for anything outside `IVXLCDM`.
pub fn numeral_value(c: char) -> Option<i64> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Pairwise subtractive rule over already-mapped values: a value smaller than
/// its successor is subtracted, anything else is added. Past the end counts as 0.
fn pairwise_sum(values: &[i64]) -> i64 {
    let mut total = 0;
    for (i, &current) in values.iter().enumerate() {
        let next = values.get(i + 1).copied().unwrap_or(0);
        if current < next {
            total -= current;
        } else {
            total += current;
        }
    }
    total
}

/// Decode a numeral without validation. Unknown characters count as 0 and
/// non-canonical forms such as `IIII` are accepted as-is.
pub fn decode(token: &str) -> i64 {
    let values: Vec<i64> = token
        .chars()
        .map(|c| numeral_value(c).unwrap_or(0))
        .collect();
    pairwise_sum(&values)
}

/// Decode a numeral, rejecting empty tokens and unknown characters.
pub fn try_decode(token: &str) -> Result<i64> {
    if token.is_empty() {
        return Err(Error::EmptyNumeral);
    }
    let values = token
        .chars()
        .map(|c| {
            numeral_value(c).ok_or_else(|| Error::InvalidNumeral {
                token: token.to_string(),
                ch: c,
            })
        })
        .collect::<Result<Vec<i64>>>()?;
    Ok(pairwise_sum(&values))
}

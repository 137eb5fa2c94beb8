//! English spelling of integers, capitalized word per word
//! ("One Thousand Nine Hundred Ninety Four").

const UNITS: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// Indexed by base-1000 chunk position; long enough for u64::MAX.
const SCALES: [&str; 7] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
];

/// Words for a chunk in `1..=999`.
fn spell_chunk(chunk: u64) -> Vec<&'static str> {
    let mut words = Vec::with_capacity(4);

    let hundreds = (chunk / 100) as usize;
    if hundreds > 0 {
        words.push(UNITS[hundreds]);
        words.push("Hundred");
    }

    let rest = (chunk % 100) as usize;
    if (10..20).contains(&rest) {
        words.push(TEENS[rest - 10]);
    } else {
        if rest / 10 > 0 {
            words.push(TENS[rest / 10]);
        }
        if rest % 10 > 0 {
            words.push(UNITS[rest % 10]);
        }
    }

    words
}

/// Spell a non-negative integer. Zero is `"Zero"`; there is never leading or
/// trailing whitespace.
pub fn spell(number: u64) -> String {
    if number == 0 {
        return "Zero".to_string();
    }

    let mut remaining = number;
    let mut scale = 0;
    let mut spelled = String::new();

    // Least significant chunk first, each one prepended to what we have so far
    while remaining > 0 {
        let chunk = remaining % 1000;
        remaining /= 1000;

        if chunk > 0 {
            let mut chunk_words = spell_chunk(chunk).join(" ");
            if scale > 0 {
                chunk_words.push(' ');
                chunk_words.push_str(SCALES[scale]);
            }
            if !spelled.is_empty() {
                chunk_words.push(' ');
                chunk_words.push_str(&spelled);
            }
            spelled = chunk_words;
        }

        scale += 1;
    }

    spelled.trim_end().to_string()
}

/// Spell a signed integer; negatives are prefixed with `"Negative"`.
pub fn spell_signed(number: i64) -> String {
    if number < 0 {
        format!("Negative {}", spell(number.unsigned_abs()))
    } else {
        spell(number as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(spell(0), "Zero");
        assert_eq!(spell(7), "Seven");
        assert_eq!(spell(10), "Ten");
        assert_eq!(spell(19), "Nineteen");
        assert_eq!(spell(20), "Twenty");
        assert_eq!(spell(36), "Thirty Six");
        assert_eq!(spell(90), "Ninety");
    }

    #[test]
    fn hundreds_and_thousands() {
        assert_eq!(spell(100), "One Hundred");
        assert_eq!(spell(115), "One Hundred Fifteen");
        assert_eq!(spell(1000), "One Thousand");
        assert_eq!(spell(1994), "One Thousand Nine Hundred Ninety Four");
        assert_eq!(spell(100_000), "One Hundred Thousand");
        assert_eq!(spell(3999), "Three Thousand Nine Hundred Ninety Nine");
    }

    #[test]
    fn zero_chunks_are_skipped() {
        assert_eq!(spell(1_000_000), "One Million");
        assert_eq!(spell(1_000_005), "One Million Five");
        assert_eq!(spell(2_000_300), "Two Million Three Hundred");
        assert_eq!(
            spell(1_234_567),
            "One Million Two Hundred Thirty Four Thousand Five Hundred Sixty Seven"
        );
    }

    #[test]
    fn scales_beyond_million() {
        assert_eq!(spell(2_000_000_000), "Two Billion");
        assert!(spell(u64::MAX).starts_with("Eighteen Quintillion"));
        assert!(!spell(u64::MAX).ends_with(' '));
    }

    #[test]
    fn signed_spelling() {
        assert_eq!(spell_signed(0), "Zero");
        assert_eq!(spell_signed(15), "Fifteen");
        assert_eq!(spell_signed(-9), "Negative Nine");
        assert!(spell_signed(i64::MIN).starts_with("Negative Nine Quintillion"));
    }
}

//! Roman numeral encoding for 1..=3999.

use crate::error::{CalcError, CalcResult};

const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Encode a number in canonical (subtractive) Roman numeral form.
pub fn to_roman(mut value: u32) -> CalcResult<String> {
    if !(1..=3999).contains(&value) {
        return Err(CalcError::OutOfRange(format!(
            "{value} is outside the Roman numeral range 1..=3999"
        )));
    }
    let mut out = String::new();
    for (step, glyphs) in ROMAN_TABLE {
        while value >= step {
            out.push_str(glyphs);
            value -= step;
        }
    }
    Ok(out)
}

/// Decode a Roman numeral, accepting only the canonical spelling.
///
/// Greedy decoding alone would accept forms like `IIII` or `IM`, so the
/// decoded value is re-encoded and compared with the input.
pub fn from_roman(text: &str) -> CalcResult<u32> {
    let upper = text.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(CalcError::InvalidSyntax("empty Roman numeral".to_string()));
    }
    let mut value: u32 = 0;
    let mut rest = upper.as_str();
    for (step, glyphs) in ROMAN_TABLE {
        while let Some(tail) = rest.strip_prefix(glyphs) {
            value += step;
            rest = tail;
        }
    }
    if !rest.is_empty() || to_roman(value)? != upper {
        return Err(CalcError::InvalidSyntax(format!("not a canonical Roman numeral: {text}")));
    }
    Ok(value)
}

use crate::error::{LuhnError, Result};

/// Read-only, index-addressable view over a number's digits.
///
/// Positions run left to right (most significant first). Implementors must
/// only be handed to the weighting routine after validation, so `digit_at`
/// may assume every position holds a value in `[0,9]`.
pub(crate) trait DigitSource {
    fn digit_count(&self) -> usize;
    fn digit_at(&self, index: usize) -> u8;
}

impl DigitSource for [u8] {
    fn digit_count(&self) -> usize {
        self.len()
    }

    fn digit_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl DigitSource for str {
    fn digit_count(&self) -> usize {
        self.len()
    }

    fn digit_at(&self, index: usize) -> u8 {
        self.as_bytes()[index] - b'0'
    }
}

/// Checks a digit sequence before any arithmetic runs on it.
///
/// Returns the sequence back on success so callers can chain with `?`.
pub fn validate_sequence(seq: Option<&[u8]>) -> Result<&[u8]> {
    let seq = seq.ok_or(LuhnError::NullInput)?;
    if seq.is_empty() {
        return Err(LuhnError::EmptyInput);
    }
    if let Some((index, &value)) = seq.iter().enumerate().find(|(_, d)| **d > 9) {
        return Err(LuhnError::OutOfRange { index, value });
    }
    Ok(seq)
}

/// Checks a digit string before any arithmetic runs on it.
///
/// Positions reported in errors are character positions, not byte offsets.
pub fn validate_digit_string(s: Option<&str>) -> Result<&str> {
    let s = s.ok_or(LuhnError::NullInput)?;
    if s.is_empty() {
        return Err(LuhnError::EmptyInput);
    }
    if let Some((index, character)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(LuhnError::InvalidCharacter { index, character });
    }
    Ok(s)
}

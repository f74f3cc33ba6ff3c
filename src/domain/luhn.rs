//! Luhn mod-10 checksum, validity check and check-digit derivation.
//!
//! Every operation comes in two flavours: one over a slice of single decimal
//! digits and one over a string of ASCII digit characters. Both flavours run
//! the same weighting routine through [`DigitSource`].

use crate::domain::digits::{DigitSource, validate_digit_string, validate_sequence};
use crate::error::Result;

/// Sums the Luhn-weighted digits mod 10.
///
/// Doubling is anchored at the rightmost digit: right-indexed positions
/// 1, 3, 5, ... are doubled, whatever the total length. `shift` moves every
/// digit that many positions further from the right, which is how a trailing
/// placeholder `0` is accounted for without copying the input.
fn weighted_sum<D: DigitSource + ?Sized>(digits: &D, shift: usize) -> u8 {
    let len = digits.digit_count();
    (0..len)
        .map(|i| {
            let digit = digits.digit_at(i);
            if (len - 1 - i + shift) % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .fold(0, |acc, weighted| (acc + weighted) % 10)
}

fn complement(checksum: u8) -> u8 {
    if checksum == 0 { 0 } else { 10 - checksum }
}

/// Calculates the Luhn checksum of a sequence of digits in the range `[0,9]`.
///
/// A checksum of `0` means the sequence is a valid Luhn number.
pub fn checksum(seq: &[u8]) -> Result<u8> {
    let seq = validate_sequence(Some(seq))?;
    Ok(weighted_sum(seq, 0))
}

/// Calculates the Luhn checksum of a string of ASCII digits.
pub fn checksum_str(s: &str) -> Result<u8> {
    let s = validate_digit_string(Some(s))?;
    Ok(weighted_sum(s, 0))
}

pub fn is_valid(seq: &[u8]) -> Result<bool> {
    Ok(checksum(seq)? == 0)
}

pub fn is_valid_str(s: &str) -> Result<bool> {
    Ok(checksum_str(s)? == 0)
}

/// Calculates the check digit that, appended to `seq`, makes its checksum zero.
///
/// `seq` is the number without its trailing check digit.
pub fn check_digit(seq: &[u8]) -> Result<u8> {
    let seq = validate_sequence(Some(seq))?;
    Ok(complement(weighted_sum(seq, 1)))
}

/// String flavour of [`check_digit`].
pub fn check_digit_str(s: &str) -> Result<u8> {
    let s = validate_digit_string(Some(s))?;
    Ok(complement(weighted_sum(s, 1)))
}

/// Returns `s` with its Luhn check digit appended.
pub fn complete_str(s: &str) -> Result<String> {
    let digit = check_digit_str(s)?;
    let mut completed = String::with_capacity(s.len() + 1);
    completed.push_str(s);
    completed.push(char::from(b'0' + digit));
    Ok(completed)
}

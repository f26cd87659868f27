//! CPF (Brazilian individual taxpayer id) checksum validation.

use crate::constants::CPF_LENGTH;

/// Returns `true` when `document` is exactly eleven ASCII digits, not all
/// equal, whose two trailing check digits match the mod-11 checksum.
pub fn validate(document: &str) -> bool {
    if document.len() != CPF_LENGTH || !document.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = document.bytes().map(|b| u32::from(b - b'0')).collect();

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Computes the check digit for the given prefix (weights descend from `len + 1` to 2).
fn check_digit(prefix: &[u32]) -> u32 {
    let weight_start = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();

    match sum % 11 {
        0 | 1 => 0,
        rest => 11 - rest,
    }
}

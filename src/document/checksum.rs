//! Weighted modulo-11 check digit.

/// Compute the check digit for `body`.
///
/// The first digit is weighted `initial_weight + 1`, each following digit
/// one less. When the weight falls below 2 it wraps back to 9, so long
/// bodies (entity documents) cycle through `9..=2` after the leading run.
///
/// The result is `"0"` when `sum % 11 < 2`, otherwise `11 - sum % 11`.
/// Non-digit characters in `body` are ignored.
#[must_use]
pub fn checksum(body: &str, initial_weight: u32) -> String {
    let mut weight = u64::from(initial_weight) + 1;
    // Kept reduced mod 11
    let mut sum: u64 = 0;

    for digit in body.chars().filter_map(|c| c.to_digit(10)) {
        sum = (sum + u64::from(digit) * (weight % 11)) % 11;
        weight -= 1;

        if weight < 2 {
            weight = 9;
        }
    }

    let remainder = sum % 11;
    if remainder < 2 {
        "0".to_string()
    } else {
        (11 - remainder).to_string()
    }
}

//! Luhn check-digit computation and validation.
//!
//! Both operations share one weighted-sum pass: every second digit is
//! doubled (with results above 9 folded back to a single digit) and the
//! total is reduced modulo 10. The entry points differ only in which
//! alternation phase the rightmost digit starts on.

use crate::error::CardmintError;

/// Alternation phase for the weighted sum.
///
/// `Full` scans a complete number: the rightmost digit is kept as-is and
/// doubling starts one position in. `Payload` scans a number still missing
/// its check digit, so every digit sits one position further right than it
/// will in the final number and doubling starts at the rightmost digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Full,
    Payload,
}

/// Weighted Luhn sum, right to left. `None` if any character is not an
/// ASCII decimal digit.
fn weighted_sum(digits: &str, phase: Phase) -> Option<u32> {
    let doubled_parity = match phase {
        Phase::Full => 1,
        Phase::Payload => 0,
    };

    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let mut value = c.to_digit(10)?;
        if i % 2 == doubled_parity {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
    }
    Some(sum)
}

/// Compute the check digit for a digit payload.
///
/// The returned digit appended to `payload` always satisfies [`validate`].
/// Fails on an empty payload or any non-digit character.
pub fn check_digit(payload: &str) -> Result<u32, CardmintError> {
    if payload.is_empty() {
        return Err(CardmintError::InvalidPattern(
            "payload must not be empty".to_string(),
        ));
    }

    let sum = weighted_sum(payload, Phase::Payload).ok_or_else(|| {
        CardmintError::InvalidPattern("payload must contain only digits".to_string())
    })?;

    Ok((10 - (sum % 10)) % 10)
}

/// Check whether a complete number satisfies the Luhn checksum.
///
/// Total over all inputs: empty or non-numeric strings are simply invalid,
/// never an error.
pub fn validate(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    match weighted_sum(number, Phase::Full) {
        Some(sum) => sum % 10 == 0,
        None => false,
    }
}

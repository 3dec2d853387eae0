//! Masked BIN patterns: literal digits plus wildcard positions.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::constants::PAYLOAD_LENGTH;
use crate::error::CardmintError;

/// Wildcard marker in masked patterns (matched case-insensitively)
pub const WILDCARD: char = 'x';

/// A masked card-number pattern.
///
/// Every character is either an ASCII decimal digit or the wildcard marker
/// `x`/`X`; anything else is rejected at construction rather than silently
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedPattern(String);

impl MaskedPattern {
    /// Parse user input into a pattern. Surrounding whitespace is trimmed.
    pub fn parse(input: &str) -> Result<Self, CardmintError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CardmintError::InvalidPattern(
                "pattern must not be empty".to_string(),
            ));
        }

        for (pos, c) in trimmed.chars().enumerate() {
            if !c.is_ascii_digit() && !c.eq_ignore_ascii_case(&WILDCARD) {
                return Err(CardmintError::InvalidPattern(format!(
                    "unexpected character {c:?} at position {pos}"
                )));
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if at least one position is a wildcard.
    pub fn has_wildcards(&self) -> bool {
        self.0.chars().any(|c| c.eq_ignore_ascii_case(&WILDCARD))
    }

    /// Normalize to exactly [`PAYLOAD_LENGTH`] characters: shorter patterns
    /// are right-padded with wildcards, longer ones truncated. Characters
    /// beyond the payload length never influence generated numbers.
    pub fn normalized(&self) -> Self {
        let mut chars: String = self.0.chars().take(PAYLOAD_LENGTH).collect();
        while chars.len() < PAYLOAD_LENGTH {
            chars.push(WILDCARD);
        }
        Self(chars)
    }

    /// Resolve the pattern into a concrete digit payload.
    ///
    /// Each wildcard becomes an independent uniform digit 0-9. The result
    /// is truncated to [`PAYLOAD_LENGTH`] so the appended check digit keeps
    /// the full number within sixteen digits.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, CardmintError> {
        let mut resolved = String::with_capacity(self.0.len());
        for c in self.0.chars() {
            if c.eq_ignore_ascii_case(&WILDCARD) {
                resolved.push((b'0' + rng.random_range(0..10u8)) as char);
            } else {
                resolved.push(c);
            }
        }

        // Unreachable after validated construction, but the payload feeds
        // straight into check-digit arithmetic.
        if !resolved.chars().all(|c| c.is_ascii_digit()) {
            return Err(CardmintError::InvalidPattern(
                "resolved pattern contains non-digit characters".to_string(),
            ));
        }

        if resolved.len() > PAYLOAD_LENGTH {
            resolved.truncate(PAYLOAD_LENGTH);
        }

        Ok(resolved)
    }
}

impl fmt::Display for MaskedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MaskedPattern {
    type Err = CardmintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

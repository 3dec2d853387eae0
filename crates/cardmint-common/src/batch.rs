//! Batch card assembly: resolve, check-digit, decorate, retry until quota.

use rand::Rng;

use crate::constants::{CVV_MAX, CVV_MIN, DEFAULT_ATTEMPT_MULTIPLIER};
use crate::error::CardmintError;
use crate::luhn;
use crate::pattern::MaskedPattern;
use crate::types::{BatchReport, CardRecord, Expiry};

/// Card assembly service
pub struct CardAssembler {
    /// Resolution attempts allowed per requested card
    pub attempt_multiplier: u32,
}

impl Default for CardAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPT_MULTIPLIER)
    }
}

impl CardAssembler {
    pub fn new(attempt_multiplier: u32) -> Self {
        Self {
            attempt_multiplier: attempt_multiplier.max(1),
        }
    }

    /// Generate up to `count` Luhn-valid card records from a masked pattern.
    ///
    /// The pattern is normalized to the payload length once, then resolved
    /// repeatedly until the quota is met or the attempt budget
    /// (`count * attempt_multiplier`) runs out. Returning fewer records than
    /// requested is not an error; callers treat an empty batch as a failure
    /// state of their own.
    pub fn generate_batch(
        &self,
        pattern: &MaskedPattern,
        count: u32,
        expiry: &Expiry,
    ) -> Result<BatchReport, CardmintError> {
        if count == 0 {
            return Err(CardmintError::InvalidInput(
                "count must be positive".to_string(),
            ));
        }

        let pattern = pattern.normalized();
        let max_attempts = count.saturating_mul(self.attempt_multiplier);

        let mut rng = rand::rng();
        let mut cards = Vec::with_capacity(count as usize);
        let mut attempts = 0u32;

        while (cards.len() as u32) < count && attempts < max_attempts {
            attempts += 1;

            let payload = match pattern.resolve(&mut rng) {
                Ok(payload) => payload,
                Err(_) => continue,
            };
            let digit = match luhn::check_digit(&payload) {
                Ok(digit) => digit,
                Err(_) => continue,
            };

            let number = format!("{payload}{digit}");
            // Valid by construction; the re-check keeps a broken candidate
            // from ever leaving the loop.
            if !luhn::validate(&number) {
                continue;
            }

            let cvv = rng.random_range(CVV_MIN..=CVV_MAX);
            cards.push(CardRecord::new(number, expiry.clone(), cvv));
        }

        Ok(BatchReport { cards, attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CARD_LENGTH;

    fn expiry() -> Expiry {
        Expiry::parse("01", "25").unwrap()
    }

    #[test]
    fn test_wildcard_pattern_fills_quota() {
        let assembler = CardAssembler::default();
        let pattern = MaskedPattern::parse("453900xxxxxxxxx").unwrap();

        let report = assembler.generate_batch(&pattern, 5, &expiry()).unwrap();

        assert_eq!(report.cards.len(), 5);
        assert!(report.attempts >= 5 && report.attempts <= 50);
        for card in &report.cards {
            assert_eq!(card.number.len(), CARD_LENGTH);
            assert!(card.number.starts_with("453900"));
            assert!(luhn::validate(&card.number));
        }
    }

    #[test]
    fn test_literal_pattern_is_deterministic() {
        let assembler = CardAssembler::default();
        let pattern = MaskedPattern::parse("453900000000000").unwrap();

        let report = assembler.generate_batch(&pattern, 3, &expiry()).unwrap();

        assert_eq!(report.cards.len(), 3);
        for card in &report.cards {
            assert_eq!(card.number, "4539000000000002");
        }

        let again = assembler.generate_batch(&pattern, 1, &expiry()).unwrap();
        assert_eq!(again.cards[0].number, "4539000000000002");
    }

    #[test]
    fn test_short_pattern_is_padded_before_the_loop() {
        let assembler = CardAssembler::default();
        let pattern = MaskedPattern::parse("4").unwrap();

        let report = assembler.generate_batch(&pattern, 2, &expiry()).unwrap();

        assert_eq!(report.cards.len(), 2);
        for card in &report.cards {
            assert_eq!(card.number.len(), CARD_LENGTH);
            assert!(card.number.starts_with('4'));
            assert!(luhn::validate(&card.number));
        }
    }

    #[test]
    fn test_long_pattern_is_truncated_before_the_loop() {
        let assembler = CardAssembler::default();
        // Sixteenth character and beyond never reach the output.
        let pattern = MaskedPattern::parse("45390000000000099999").unwrap();

        let report = assembler.generate_batch(&pattern, 1, &expiry()).unwrap();

        assert_eq!(report.cards[0].number, "4539000000000002");
    }

    #[test]
    fn test_records_carry_expiry_and_cvv() {
        let assembler = CardAssembler::default();
        let pattern = MaskedPattern::parse("453900xxxxxxxxx").unwrap();

        let report = assembler.generate_batch(&pattern, 4, &expiry()).unwrap();

        for card in &report.cards {
            assert_eq!(card.exp_month, "01");
            assert_eq!(card.exp_year, "25");
            let cvv: u16 = card.cvv.parse().unwrap();
            assert!((CVV_MIN..=CVV_MAX).contains(&cvv));
        }
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let assembler = CardAssembler::default();
        let pattern = MaskedPattern::parse("453900xxxxxxxxx").unwrap();

        assert!(assembler.generate_batch(&pattern, 0, &expiry()).is_err());
    }
}

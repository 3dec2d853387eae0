//! Core types shared across Cardmint components.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::RECORD_DELIMITER;
use crate::error::CardmintError;

/// Card expiry as zero-padded two-digit month and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    /// Two-digit month, "01" through "12"
    pub month: String,

    /// Two-digit year, no century assumed
    pub year: String,
}

impl Expiry {
    /// Validate user-supplied expiry fields.
    pub fn parse(month: &str, year: &str) -> Result<Self, CardmintError> {
        let numeric_month = two_digit(month).ok_or_else(|| {
            CardmintError::InvalidInput(format!("month must be two digits, got {month:?}"))
        })?;
        if !(1..=12).contains(&numeric_month) {
            return Err(CardmintError::InvalidInput(format!(
                "month out of range: {month}"
            )));
        }

        two_digit(year).ok_or_else(|| {
            CardmintError::InvalidInput(format!("year must be two digits, got {year:?}"))
        })?;

        Ok(Self {
            month: month.to_string(),
            year: year.to_string(),
        })
    }

    /// Uniform random expiry within an inclusive two-digit year range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, year_min: u8, year_max: u8) -> Self {
        let (lo, hi) = if year_min <= year_max {
            (year_min, year_max)
        } else {
            (year_max, year_min)
        };

        Self {
            month: format!("{:02}", rng.random_range(1..=12u8)),
            year: format!("{:02}", rng.random_range(lo..=hi.min(99))),
        }
    }
}

fn two_digit(field: &str) -> Option<u8> {
    if field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}

/// A generated card number with its expiry and CVV. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Full digit sequence including the check digit
    pub number: String,

    /// Two-digit expiry month
    pub exp_month: String,

    /// Two-digit expiry year
    pub exp_year: String,

    /// Three-digit verification code
    pub cvv: String,
}

impl CardRecord {
    pub fn new(number: String, expiry: Expiry, cvv: u16) -> Self {
        Self {
            number,
            exp_month: expiry.month,
            exp_year: expiry.year,
            cvv: cvv.to_string(),
        }
    }

    /// Render the record in the exported line format:
    /// `number|MM|YY|CVV`.
    pub fn line(&self) -> String {
        let d = RECORD_DELIMITER;
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.number, self.exp_month, self.exp_year, self.cvv
        )
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

/// Outcome of one batch-generation run.
///
/// A short batch is not an error; callers decide how to present an empty
/// one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Records produced, in generation order
    pub cards: Vec<CardRecord>,

    /// Resolution attempts spent
    pub attempts: u32,
}

impl BatchReport {
    /// One record line per card, the downloadable artifact format.
    pub fn to_text(&self) -> String {
        self.cards
            .iter()
            .map(CardRecord::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A saved card with its save timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub card: CardRecord,

    /// Unix epoch seconds at save time
    pub saved_at: i64,
}

impl SessionEntry {
    pub fn new(card: CardRecord) -> Self {
        Self {
            card,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Issuer metadata for a BIN prefix, as returned by the lookup service.
///
/// Any field may be missing; absence means "unknown", never malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankInfo>,
}

/// Issuing-country fields of [`BinMetadata`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha2: Option<String>,
}

/// Issuing-bank fields of [`BinMetadata`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_parse_validates_fields() {
        assert!(Expiry::parse("01", "25").is_ok());
        assert!(Expiry::parse("12", "00").is_ok());

        assert!(Expiry::parse("00", "25").is_err());
        assert!(Expiry::parse("13", "25").is_err());
        assert!(Expiry::parse("1", "25").is_err());
        assert!(Expiry::parse("01", "5").is_err());
        assert!(Expiry::parse("ab", "25").is_err());
    }

    #[test]
    fn test_expiry_random_stays_in_range() {
        let mut rng = rand::rng();

        for _ in 0..50 {
            let expiry = Expiry::random(&mut rng, 23, 30);
            let month: u8 = expiry.month.parse().unwrap();
            let year: u8 = expiry.year.parse().unwrap();

            assert!((1..=12).contains(&month));
            assert!((23..=30).contains(&year));
            assert_eq!(expiry.month.len(), 2);
            assert_eq!(expiry.year.len(), 2);
        }
    }

    #[test]
    fn test_card_record_line_format() {
        let expiry = Expiry::parse("01", "25").unwrap();
        let record = CardRecord::new("4539000000000002".to_string(), expiry, 123);

        assert_eq!(record.line(), "4539000000000002|01|25|123");
        assert_eq!(record.to_string(), record.line());
    }

    #[test]
    fn test_batch_report_text_joins_lines() {
        let expiry = Expiry::parse("02", "28").unwrap();
        let report = BatchReport {
            cards: vec![
                CardRecord::new("4539000000000002".to_string(), expiry.clone(), 111),
                CardRecord::new("79927398713".to_string(), expiry, 999),
            ],
            attempts: 2,
        };

        assert_eq!(
            report.to_text(),
            "4539000000000002|02|28|111\n79927398713|02|28|999"
        );
    }

    #[test]
    fn test_bin_metadata_tolerates_missing_fields() {
        let sparse: BinMetadata = serde_json::from_str(r#"{"scheme":"visa"}"#).unwrap();
        assert_eq!(sparse.scheme.as_deref(), Some("visa"));
        assert!(sparse.country.is_none());
        assert!(sparse.bank.is_none());

        let full: BinMetadata = serde_json::from_str(
            r#"{
                "scheme": "visa",
                "type": "debit",
                "brand": "Visa Classic",
                "country": {"name": "Denmark", "emoji": "🇩🇰", "currency": "DKK", "alpha2": "DK"},
                "bank": {"name": "Jyske Bank", "url": "www.jyskebank.dk", "phone": "+4589893300", "city": "Hjørring"}
            }"#,
        )
        .unwrap();
        assert_eq!(full.card_type.as_deref(), Some("debit"));
        assert_eq!(
            full.country.as_ref().and_then(|c| c.alpha2.as_deref()),
            Some("DK")
        );
        assert_eq!(
            full.bank.as_ref().and_then(|b| b.city.as_deref()),
            Some("Hjørring")
        );
    }

    #[test]
    fn test_session_entry_is_stamped() {
        let expiry = Expiry::parse("03", "27").unwrap();
        let entry = SessionEntry::new(CardRecord::new("79927398713".to_string(), expiry, 456));

        assert!(entry.saved_at > 0);
    }
}

//! Shared constants for Cardmint components.

/// Default Mint HTTP listen address
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";

/// Default BIN metadata lookup endpoint
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://lookup.binlist.net";

/// Default BIN lookup timeout in seconds
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Payload length before the check digit is appended
pub const PAYLOAD_LENGTH: usize = 15;

/// Full card length (payload plus check digit)
pub const CARD_LENGTH: usize = 16;

/// Minimum digits required in a BIN lookup key
pub const MIN_LOOKUP_DIGITS: usize = 6;

/// Lowest CVV value (inclusive)
pub const CVV_MIN: u16 = 100;

/// Highest CVV value (inclusive)
pub const CVV_MAX: u16 = 999;

/// Resolution attempts allowed per requested card
pub const DEFAULT_ATTEMPT_MULTIPLIER: u32 = 10;

/// Field delimiter in exported record lines
pub const RECORD_DELIMITER: char = '|';

/// Lowest two-digit year for randomized expiries (inclusive)
pub const DEFAULT_RANDOM_YEAR_MIN: u8 = 23;

/// Highest two-digit year for randomized expiries (inclusive)
pub const DEFAULT_RANDOM_YEAR_MAX: u8 = 30;

/// Timestamp format embedded in export filenames
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// HTTP header names
pub mod headers {
    /// Lookup-service schema version header
    pub const ACCEPT_VERSION: &str = "Accept-Version";

    /// Schema version requested from the lookup service
    pub const ACCEPT_VERSION_V3: &str = "3";
}

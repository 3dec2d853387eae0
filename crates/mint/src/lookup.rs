//! BIN metadata lookup against the public binlist-style service.

use std::time::Duration;

use cardmint_common::constants::{MIN_LOOKUP_DIGITS, headers};
use cardmint_common::{BinMetadata, CardmintError};

use crate::config::LookupConfig;

/// BIN lookup client.
///
/// One outbound GET per invocation: no retry, no caching. Transport
/// failures, non-success statuses, and malformed bodies all collapse to
/// "absent metadata" rather than surfacing as errors.
pub struct BinLookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl BinLookupClient {
    pub fn new(config: &LookupConfig) -> Result<Self, CardmintError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CardmintError::Lookup(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch issuer metadata for a BIN prefix.
    ///
    /// The key must be at least six ASCII digits; anything else is rejected
    /// locally without a network call.
    pub async fn lookup(&self, bin: &str) -> Result<Option<BinMetadata>, CardmintError> {
        let bin = bin.trim();
        if bin.len() < MIN_LOOKUP_DIGITS || !bin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CardmintError::InvalidInput(format!(
                "BIN must be at least {MIN_LOOKUP_DIGITS} digits"
            )));
        }

        let url = format!("{}/{}", self.base_url, bin);
        let response = match self
            .client
            .get(&url)
            .header(headers::ACCEPT_VERSION, headers::ACCEPT_VERSION_V3)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(bin = %bin, error = %e, "BIN lookup request failed");
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            tracing::debug!(
                bin = %bin,
                status = %response.status(),
                "BIN lookup returned non-success"
            );
            return Ok(None);
        }

        match response.json::<BinMetadata>().await {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) => {
                tracing::warn!(bin = %bin, error = %e, "BIN lookup body was malformed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BinLookupClient {
        BinLookupClient::new(&LookupConfig::default()).unwrap()
    }

    #[test]
    fn test_short_keys_are_rejected_without_io() {
        tokio_test::block_on(async {
            assert!(client().lookup("45390").await.is_err());
            assert!(client().lookup("").await.is_err());
        });
    }

    #[test]
    fn test_non_digit_keys_are_rejected_without_io() {
        tokio_test::block_on(async {
            assert!(client().lookup("4539ab").await.is_err());
            assert!(client().lookup("453 900").await.is_err());
        });
    }
}

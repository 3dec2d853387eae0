//! BIN metadata lookup endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use cardmint_common::BinMetadata;

use crate::state::AppState;

use super::error_status;

#[derive(Serialize)]
pub struct LookupResponse {
    found: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<BinMetadata>,
}

/// Look up issuer metadata for a BIN prefix
///
/// Absent metadata (unknown BIN, unreachable service, malformed body) is a
/// normal `found: false` response, never an error status.
pub async fn lookup_bin(
    State(state): State<AppState>,
    Path(bin): Path<String>,
) -> Result<Json<LookupResponse>, StatusCode> {
    let metadata = state.lookup.lookup(&bin).await.map_err(error_status)?;

    if metadata.is_none() {
        tracing::debug!(bin = %bin, "No metadata for BIN");
    }

    Ok(Json(LookupResponse {
        found: metadata.is_some(),
        metadata,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_metadata_serializes_without_a_key() {
        let absent = serde_json::to_value(LookupResponse {
            found: false,
            metadata: None,
        })
        .unwrap();
        assert_eq!(absent, serde_json::json!({"found": false}));

        let present = serde_json::to_value(LookupResponse {
            found: true,
            metadata: Some(BinMetadata {
                scheme: Some("visa".to_string()),
                ..Default::default()
            }),
        })
        .unwrap();
        assert_eq!(present["metadata"]["scheme"], "visa");
    }
}

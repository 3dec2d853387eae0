//! In-memory saved-cards vault, scoped to the process lifetime.

use std::sync::Arc;

use tokio::sync::RwLock;

use cardmint_common::{CardRecord, SessionEntry};

/// Append-only store of saved cards.
///
/// Entries live until a bulk clear; there is no per-entry deletion and
/// nothing is persisted across restarts.
#[derive(Clone, Default)]
pub struct SessionVault {
    entries: Arc<RwLock<Vec<SessionEntry>>>,
}

impl SessionVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp and append records, preserving their order. Returns how many
    /// were added.
    pub async fn append(&self, records: Vec<CardRecord>) -> usize {
        let mut entries = self.entries.write().await;
        let added = records.len();
        entries.extend(records.into_iter().map(SessionEntry::new));
        added
    }

    /// Drop every entry. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        removed
    }

    /// Snapshot of the saved entries in insertion order.
    pub async fn entries(&self) -> Vec<SessionEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Saved cards in the exported line format, one per line.
    pub async fn export_text(&self) -> String {
        let entries = self.entries.read().await;
        entries
            .iter()
            .map(|entry| entry.card.line())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardmint_common::Expiry;

    fn card(number: &str) -> CardRecord {
        let expiry = Expiry::parse("01", "25").unwrap();
        CardRecord::new(number.to_string(), expiry, 123)
    }

    #[test]
    fn test_append_preserves_order_and_count() {
        tokio_test::block_on(async {
            let vault = SessionVault::new();

            let added = vault
                .append(vec![card("4539000000000002"), card("79927398713")])
                .await;
            assert_eq!(added, 2);
            assert_eq!(vault.len().await, 2);

            vault.append(vec![card("4111111111111111")]).await;

            let entries = vault.entries().await;
            assert_eq!(entries.len(), 3);
            assert_eq!(entries[0].card.number, "4539000000000002");
            assert_eq!(entries[1].card.number, "79927398713");
            assert_eq!(entries[2].card.number, "4111111111111111");
        });
    }

    #[test]
    fn test_clear_empties_the_vault() {
        tokio_test::block_on(async {
            let vault = SessionVault::new();
            vault
                .append(vec![card("4539000000000002"), card("79927398713")])
                .await;

            assert_eq!(vault.clear().await, 2);
            assert!(vault.entries().await.is_empty());
            assert_eq!(vault.export_text().await, "");
        });
    }

    #[test]
    fn test_export_renders_record_lines() {
        tokio_test::block_on(async {
            let vault = SessionVault::new();
            vault
                .append(vec![card("4539000000000002"), card("79927398713")])
                .await;

            assert_eq!(
                vault.export_text().await,
                "4539000000000002|01|25|123\n79927398713|01|25|123"
            );
        });
    }
}

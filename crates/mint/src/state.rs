//! Application state and shared resources.

use anyhow::{Context, Result};
use std::sync::Arc;

use cardmint_common::CardAssembler;

use crate::config::AppConfig;
use crate::lookup::BinLookupClient;
use crate::session::SessionVault;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Card assembler
    pub assembler: Arc<CardAssembler>,

    /// BIN metadata lookup client
    pub lookup: Arc<BinLookupClient>,

    /// Cards saved during this session
    pub vault: SessionVault,
}

impl AppState {
    /// Create new application state, building the lookup client
    pub fn new(config: AppConfig) -> Result<Self> {
        config
            .generator
            .validate()
            .context("Invalid generator configuration")?;

        let assembler = Arc::new(CardAssembler::new(config.generator.attempt_multiplier));
        let lookup = Arc::new(
            BinLookupClient::new(&config.lookup).context("Failed to build lookup client")?,
        );

        Ok(Self {
            config,
            assembler,
            lookup,
            vault: SessionVault::new(),
        })
    }
}

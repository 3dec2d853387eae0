//! # Cardmint Common
//!
//! Shared types and the generation core used across Cardmint components.
//!
//! ## Modules
//! - `luhn` - Check-digit computation and validation
//! - `pattern` - Masked BIN patterns and wildcard resolution
//! - `batch` - Batch card assembly
//! - `types` - Core data structures (CardRecord, BinMetadata, etc.)
//! - `error` - Common error types
//! - `constants` - Shared configuration constants

pub mod batch;
pub mod constants;
pub mod error;
pub mod luhn;
pub mod pattern;
pub mod types;

pub use batch::CardAssembler;
pub use error::CardmintError;
pub use pattern::MaskedPattern;
pub use types::*;

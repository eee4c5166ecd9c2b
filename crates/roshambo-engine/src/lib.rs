pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("snapshot rejected: landmark confidence at or below floor")]
pub struct LowConfidenceError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed: expected 32 hex characters")]
pub struct ParseSeedError;

//! riskledger-core: per-account fraud risk scoring over a transaction
//! ledger.
//!
//! Three stages, applied strictly in sequence:
//!   1. loader     — CSV ingestion with optional truncation or seeded
//!                   subsampling
//!   2. aggregator — per-account behavioral features (amount stats,
//!                   type ratios, fraud rate, amount volatility)
//!   3. scorer     — min-max normalization and a fixed-weight combined
//!                   risk score
//!
//! The score is an explainable heuristic, not a learned probability.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod rng;
pub mod scorer;
pub mod types;

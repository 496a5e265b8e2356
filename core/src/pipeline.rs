//! One-shot pipeline: load, aggregate, score.

use crate::{
    aggregator::aggregate,
    config::PipelineConfig,
    error::ScoreResult,
    loader::{load_transactions, LoadOptions},
    scorer::{score, ScoredAccount},
};
use std::path::Path;

/// Run the full pipeline against a ledger file. Each stage reads its
/// whole input and produces a complete output before the next begins;
/// the input file is closed once loading finishes.
pub fn run(
    path: &Path,
    options: &LoadOptions,
    config: &PipelineConfig,
) -> ScoreResult<Vec<ScoredAccount>> {
    let ledger = load_transactions(path, options, config.sample_seed)?;
    let features = aggregate(&ledger)?;
    let scored = score(features, config);
    log::info!(
        "pipeline complete: {} records -> {} scored accounts",
        ledger.len(),
        scored.len()
    );
    Ok(scored)
}

//! Ledger ingestion: CSV parsing, head truncation, seeded subsampling.

use crate::{
    error::{ScoreError, ScoreResult},
    rng::SampleRng,
    types::{Ledger, Transaction},
};
use std::fs::File;
use std::path::Path;

/// Optional row reduction applied at load time.
///
/// `row_limit` wins when both are set: the limit check runs first and
/// sampling is never reached. This mirrors an order-of-checks policy,
/// not a combination of the two.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Keep only the first N records in file order.
    pub row_limit: Option<i64>,
    /// Keep a reproducible random fraction of records, in [0, 1].
    pub sample_fraction: Option<f64>,
}

/// Read the ledger at `path`, applying `options`. Sampling is driven by
/// `sample_seed` so repeated loads of the same input pick the same
/// records in the same order.
pub fn load_transactions(
    path: &Path,
    options: &LoadOptions,
    sample_seed: u64,
) -> ScoreResult<Ledger> {
    // Validate arguments before touching the file.
    if let Some(limit) = options.row_limit {
        if limit < 0 {
            return Err(ScoreError::InvalidArgument {
                reason: format!("row_limit must be non-negative, got {limit}"),
            });
        }
    } else if let Some(frac) = options.sample_fraction {
        if !(0.0..=1.0).contains(&frac) {
            return Err(ScoreError::InvalidArgument {
                reason: format!("sample_fraction must lie in [0, 1], got {frac}"),
            });
        }
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScoreError::InputNotFound {
            path: path.display().to_string(),
        },
        _ => ScoreError::Io(e),
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records: Vec<Transaction> = reader
        .deserialize()
        .collect::<Result<_, csv::Error>>()?;
    let loaded = records.len();

    if let Some(limit) = options.row_limit {
        records.truncate(limit as usize);
        log::info!(
            "loaded {} records from {} (row_limit {}, kept {})",
            loaded,
            path.display(),
            limit,
            records.len()
        );
    } else if let Some(frac) = options.sample_fraction {
        records = sample_records(records, frac, sample_seed);
        log::info!(
            "loaded {} records from {} (sample_fraction {}, kept {})",
            loaded,
            path.display(),
            frac,
            records.len()
        );
    } else {
        log::info!("loaded {} records from {}", loaded, path.display());
    }

    Ok(Ledger { records, columns })
}

/// Keep round(n * frac) records, chosen as a uniform subset by the
/// seeded RNG, preserving file order among the survivors.
fn sample_records(records: Vec<Transaction>, frac: f64, seed: u64) -> Vec<Transaction> {
    let n = records.len();
    let target = ((n as f64) * frac).round() as usize;
    let target = target.min(n);

    if target == n {
        return records;
    }

    let mut rng = SampleRng::new(seed);
    let keep = rng.sample_indices(n, target);

    let mut keep_iter = keep.into_iter().peekable();
    records
        .into_iter()
        .enumerate()
        .filter(|(i, _)| {
            if keep_iter.peek() == Some(i) {
                keep_iter.next();
                true
            } else {
                false
            }
        })
        .map(|(_, record)| record)
        .collect()
}

//! Min-max normalization and weighted risk scoring.
//!
//! Each configured column is normalized across all rows, then combined
//! into a single weighted score. Policy decisions, preserved from the
//! heuristic this replaces:
//!   - a degenerate column (max == min) normalizes to 0 everywhere
//!   - undefined values are excluded from min/max, stay undefined after
//!     normalization, and contribute 0 to the weighted sum
//!   - weights are NOT renormalized when columns are absent; a score
//!     over fewer columns simply lives on a smaller scale

use crate::{
    aggregator::AccountFeatures,
    config::{PipelineConfig, ScoreColumn},
};
use serde::Serialize;

/// A feature row with normalized copies of the scored columns and the
/// final weighted risk score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredAccount {
    pub features: AccountFeatures,
    pub norm_txn_count: Option<f64>,
    pub norm_total_amount: Option<f64>,
    pub norm_amount_volatility: Option<f64>,
    pub norm_fraud_rate: Option<f64>,
    pub risk_score: f64,
}

impl ScoredAccount {
    pub fn normalized(&self, column: ScoreColumn) -> Option<f64> {
        match column {
            ScoreColumn::TxnCount => self.norm_txn_count,
            ScoreColumn::TotalAmount => self.norm_total_amount,
            ScoreColumn::AmountVolatility => self.norm_amount_volatility,
            ScoreColumn::FraudRate => self.norm_fraud_rate,
        }
    }

    fn set_normalized(&mut self, column: ScoreColumn, value: Option<f64>) {
        match column {
            ScoreColumn::TxnCount => self.norm_txn_count = value,
            ScoreColumn::TotalAmount => self.norm_total_amount = value,
            ScoreColumn::AmountVolatility => self.norm_amount_volatility = value,
            ScoreColumn::FraudRate => self.norm_fraud_rate = value,
        }
    }
}

/// Score every feature row. Output has the same cardinality and order
/// as the input; the operation is total over any well-formed table.
pub fn score(features: Vec<AccountFeatures>, config: &PipelineConfig) -> Vec<ScoredAccount> {
    let mut rows: Vec<ScoredAccount> = features
        .into_iter()
        .map(|f| ScoredAccount {
            features: f,
            norm_txn_count: None,
            norm_total_amount: None,
            norm_amount_volatility: None,
            norm_fraud_rate: None,
            risk_score: 0.0,
        })
        .collect();

    for &column in &config.score_columns {
        let values: Vec<Option<f64>> = rows
            .iter()
            .map(|r| r.features.column_value(column))
            .collect();
        let normalized = min_max_normalize(&values);
        for (row, value) in rows.iter_mut().zip(normalized) {
            row.set_normalized(column, value);
        }
    }

    for row in &mut rows {
        let mut score = 0.0;
        for &column in &config.score_columns {
            // Undefined contributions are neutral, not disqualifying.
            score += config.weights.for_column(column) * row.normalized(column).unwrap_or(0.0);
        }
        row.risk_score = score;
    }

    log::debug!("scored {} account rows", rows.len());
    rows
}

/// Min-max normalize one column. Undefined entries are skipped for the
/// min/max and remain undefined; a constant column maps to all zeros.
fn min_max_normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values.iter().flatten() {
        bounds = Some(match bounds {
            None => (*v, *v),
            Some((lo, hi)) => (lo.min(*v), hi.max(*v)),
        });
    }

    match bounds {
        None => values.to_vec(),
        Some((lo, hi)) if hi == lo => values.iter().map(|v| v.map(|_| 0.0)).collect(),
        Some((lo, hi)) => values
            .iter()
            .map(|v| v.map(|x| (x - lo) / (hi - lo)))
            .collect(),
    }
}

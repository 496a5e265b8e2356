use serde::{Deserialize, Serialize};

/// Columns eligible for normalization and weighting in the scorer.
///
/// Presence in `PipelineConfig::score_columns` is what "column present"
/// means downstream: a customized aggregation that drops a feature is
/// expressed by omitting it here, and the scorer simply skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColumn {
    TxnCount,
    TotalAmount,
    AmountVolatility,
    FraudRate,
}

impl ScoreColumn {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TxnCount => "txn_count",
            Self::TotalAmount => "total_amount",
            Self::AmountVolatility => "amount_volatility",
            Self::FraudRate => "fraud_rate",
        }
    }
}

/// Per-column weights for the final risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub txn_count: f64,
    pub total_amount: f64,
    pub amount_volatility: f64,
    pub fraud_rate: f64,
}

impl ScoreWeights {
    pub fn for_column(&self, column: ScoreColumn) -> f64 {
        match column {
            ScoreColumn::TxnCount => self.txn_count,
            ScoreColumn::TotalAmount => self.total_amount,
            ScoreColumn::AmountVolatility => self.amount_volatility,
            ScoreColumn::FraudRate => self.fraud_rate,
        }
    }
}

/// Pipeline-wide configuration: scoring weights, the columns the scorer
/// normalizes, and the seed for reproducible subsampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub weights: ScoreWeights,
    pub score_columns: Vec<ScoreColumn>,
    pub sample_seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights {
                txn_count: 0.2,
                total_amount: 0.2,
                amount_volatility: 0.3,
                fraud_rate: 0.3,
            },
            score_columns: vec![
                ScoreColumn::TxnCount,
                ScoreColumn::TotalAmount,
                ScoreColumn::AmountVolatility,
                ScoreColumn::FraudRate,
            ],
            sample_seed: 42,
        }
    }
}

impl PipelineConfig {
    /// Load from a JSON file. Tests and callers that want the spec's
    /// stock weights use `PipelineConfig::default()`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

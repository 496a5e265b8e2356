//! Shared primitive types used across the pipeline.

use serde::{Deserialize, Serialize};

/// Originating account identifier (`nameOrig` in the ledger file).
pub type AccountId = String;

/// Transaction type codes tracked as per-account ratio features.
/// The ledger may carry other codes (e.g. CASH_IN); those still count
/// toward amounts and fraud rate but match no ratio.
pub mod txn_type {
    pub const PAYMENT: &str = "PAYMENT";
    pub const TRANSFER: &str = "TRANSFER";
    pub const CASH_OUT: &str = "CASH_OUT";
    pub const DEBIT: &str = "DEBIT";
}

/// One immutable ledger record. Serde renames mirror the source file's
/// column headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "nameOrig")]
    pub name_orig: AccountId,
    pub amount: f64,
    #[serde(rename = "type")]
    pub txn_type: String,
    #[serde(rename = "isFraud")]
    pub is_fraud: u8,
}

impl Transaction {
    /// Fraud flag as a 0/1 value for averaging.
    pub fn fraud_weight(&self) -> f64 {
        if self.is_fraud != 0 {
            1.0
        } else {
            0.0
        }
    }
}

/// Columns the aggregator cannot work without.
pub const REQUIRED_COLUMNS: [&str; 4] = ["nameOrig", "amount", "type", "isFraud"];

/// The full ordered ledger as loaded, plus the column headers observed in
/// the source file. Read-only after load; the aggregator checks the
/// headers so a customized upstream cannot silently drop a required
/// column.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub records: Vec<Transaction>,
    pub columns: Vec<String>,
}

impl Ledger {
    /// Build a ledger directly from records, assuming the canonical
    /// column set. Used by tests and in-memory callers.
    pub fn from_records(records: Vec<Transaction>) -> Self {
        Self {
            records,
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

//! Per-account feature aggregation.
//!
//! One pass over the ledger builds a key → record-index map, then each
//! group is reduced independently:
//!   1. count / sum / mean / sample std / max / min of amount
//!   2. type ratios for PAYMENT, TRANSFER, CASH_OUT, DEBIT
//!   3. fraud rate (mean of the 0/1 flag)
//!   4. derived amount volatility = std / mean
//!
//! Undefined numeric results (std of a single record, volatility over a
//! zero mean) are `None`, never a NaN that could leak into arithmetic.

use crate::{
    config::ScoreColumn,
    error::{ScoreError, ScoreResult},
    types::{txn_type, AccountId, Ledger, Transaction, REQUIRED_COLUMNS},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated behavioral features for one originating account.
#[derive(Debug, Clone, Serialize)]
pub struct AccountFeatures {
    #[serde(rename = "nameOrig")]
    pub account: AccountId,
    pub txn_count: u64,
    pub total_amount: f64,
    pub avg_amount: f64,
    /// Sample standard deviation (Bessel); `None` for single-record groups.
    pub std_amount: Option<f64>,
    pub max_amount: f64,
    pub min_amount: f64,
    pub payment_ratio: f64,
    pub transfer_ratio: f64,
    pub cashout_ratio: f64,
    pub debit_ratio: f64,
    pub fraud_rate: f64,
    /// std_amount / avg_amount; `None` when std is undefined or the
    /// mean is exactly zero.
    pub amount_volatility: Option<f64>,
}

impl AccountFeatures {
    /// Value of a scorable column, `None` where the feature is undefined.
    pub fn column_value(&self, column: ScoreColumn) -> Option<f64> {
        match column {
            ScoreColumn::TxnCount => Some(self.txn_count as f64),
            ScoreColumn::TotalAmount => Some(self.total_amount),
            ScoreColumn::AmountVolatility => self.amount_volatility,
            ScoreColumn::FraudRate => Some(self.fraud_rate),
        }
    }
}

/// Aggregate the ledger into one feature row per distinct `nameOrig`.
/// Rows come back in ascending account order so repeated runs produce
/// identical tables.
pub fn aggregate(ledger: &Ledger) -> ScoreResult<Vec<AccountFeatures>> {
    for column in REQUIRED_COLUMNS {
        if !ledger.has_column(column) {
            return Err(ScoreError::MissingColumn {
                name: column.to_string(),
            });
        }
    }

    let mut groups: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
    for record in &ledger.records {
        groups.entry(&record.name_orig).or_default().push(record);
    }

    let rows: Vec<AccountFeatures> = groups
        .into_iter()
        .map(|(account, records)| reduce_group(account, &records))
        .collect();

    log::debug!(
        "aggregated {} records into {} account rows",
        ledger.len(),
        rows.len()
    );
    Ok(rows)
}

fn reduce_group(account: &str, records: &[&Transaction]) -> AccountFeatures {
    let n = records.len();
    let count = n as f64;

    let total_amount: f64 = records.iter().map(|r| r.amount).sum();
    let avg_amount = total_amount / count;
    let max_amount = records.iter().map(|r| r.amount).fold(f64::MIN, f64::max);
    let min_amount = records.iter().map(|r| r.amount).fold(f64::MAX, f64::min);

    // Sample standard deviation with Bessel's correction; needs n >= 2.
    let std_amount = if n >= 2 {
        let sum_sq: f64 = records
            .iter()
            .map(|r| {
                let d = r.amount - avg_amount;
                d * d
            })
            .sum();
        Some((sum_sq / (count - 1.0)).sqrt())
    } else {
        None
    };

    let type_ratio = |code: &str| -> f64 {
        records.iter().filter(|r| r.txn_type == code).count() as f64 / count
    };

    let fraud_rate = records.iter().map(|r| r.fraud_weight()).sum::<f64>() / count;

    // A mean of exactly zero makes the ratio undefined, not infinite.
    let amount_volatility = match std_amount {
        Some(std) if avg_amount != 0.0 => Some(std / avg_amount),
        _ => None,
    };

    AccountFeatures {
        account: account.to_string(),
        txn_count: n as u64,
        total_amount,
        avg_amount,
        std_amount,
        max_amount,
        min_amount,
        payment_ratio: type_ratio(txn_type::PAYMENT),
        transfer_ratio: type_ratio(txn_type::TRANSFER),
        cashout_ratio: type_ratio(txn_type::CASH_OUT),
        debit_ratio: type_ratio(txn_type::DEBIT),
        fraud_rate,
        amount_volatility,
    }
}

//! End-to-end pipeline tests: ledger file in, scored table out.

use riskledger_core::{
    config::{PipelineConfig, ScoreColumn},
    error::ScoreError,
    loader::LoadOptions,
    pipeline,
};
use std::io::Write;
use std::path::PathBuf;

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("riskledger-{name}-{}.csv", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(content.as_bytes()).expect("write fixture");
    path
}

/// The spec's worked example, from file to final scores.
#[test]
fn end_to_end_worked_example() {
    let path = write_fixture(
        "e2e-example",
        "nameOrig,amount,type,isFraud\n\
         A,100,PAYMENT,0\n\
         A,300,PAYMENT,0\n\
         B,50,CASH_OUT,1\n",
    );
    let config = PipelineConfig::default();
    let scored = pipeline::run(&path, &LoadOptions::default(), &config).unwrap();

    assert_eq!(scored.len(), 2);
    let a = &scored[0];
    let b = &scored[1];
    assert_eq!(a.features.account, "A");
    assert_eq!(b.features.account, "B");

    assert!((a.risk_score - 0.4).abs() < 1e-12);
    assert!((b.risk_score - 0.3).abs() < 1e-12);
}

/// row_limit = 0 flows through as empty tables at every stage, no error.
#[test]
fn zero_row_limit_produces_empty_scored_table() {
    let path = write_fixture(
        "e2e-empty",
        "nameOrig,amount,type,isFraud\nA,100,PAYMENT,0\n",
    );
    let options = LoadOptions {
        row_limit: Some(0),
        ..Default::default()
    };
    let config = PipelineConfig::default();

    let scored = pipeline::run(&path, &options, &config).unwrap();
    assert!(scored.is_empty());
}

/// Invalid loader arguments surface before any output is produced.
#[test]
fn invalid_arguments_fail_the_whole_run() {
    let path = write_fixture(
        "e2e-invalid",
        "nameOrig,amount,type,isFraud\nA,100,PAYMENT,0\n",
    );
    let options = LoadOptions {
        sample_fraction: Some(1.5),
        ..Default::default()
    };
    let config = PipelineConfig::default();

    let err = pipeline::run(&path, &options, &config).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidArgument { .. }));
}

/// A reduced column set still runs end to end; skipped columns leave
/// their normalized fields unset.
#[test]
fn customized_column_subset_runs_end_to_end() {
    let path = write_fixture(
        "e2e-subset",
        "nameOrig,amount,type,isFraud\n\
         A,100,PAYMENT,0\n\
         B,900,TRANSFER,1\n",
    );
    let mut config = PipelineConfig::default();
    config.score_columns = vec![ScoreColumn::TxnCount, ScoreColumn::FraudRate];

    let scored = pipeline::run(&path, &LoadOptions::default(), &config).unwrap();

    for row in &scored {
        assert!(row.norm_total_amount.is_none());
        assert!(row.norm_amount_volatility.is_none());
        assert!(row.risk_score.is_finite());
        // Max reachable score is 0.2 + 0.3 with the stock weights.
        assert!(row.risk_score <= 0.5 + 1e-12);
    }
}

//! risk-runner: headless batch runner for the ledger risk scorer.
//!
//! Usage:
//!   risk-runner --input transactions.csv --output scores.csv
//!   risk-runner --input transactions.csv --rows 10000
//!   risk-runner --input transactions.csv --sample 0.1 --seed 42

use anyhow::Result;
use riskledger_core::{
    config::PipelineConfig,
    loader::LoadOptions,
    pipeline,
    scorer::ScoredAccount,
};
use std::env;
use std::path::Path;

/// Flat CSV shape for one scored account. The csv serializer cannot
/// flatten nested structs, so the row is spelled out here.
#[derive(serde::Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "nameOrig")]
    name_orig: &'a str,
    txn_count: u64,
    total_amount: f64,
    avg_amount: f64,
    std_amount: Option<f64>,
    max_amount: f64,
    min_amount: f64,
    payment_ratio: f64,
    transfer_ratio: f64,
    cashout_ratio: f64,
    debit_ratio: f64,
    fraud_rate: f64,
    amount_volatility: Option<f64>,
    norm_txn_count: Option<f64>,
    norm_total_amount: Option<f64>,
    norm_amount_volatility: Option<f64>,
    norm_fraud_rate: Option<f64>,
    risk_score: f64,
}

impl<'a> From<&'a ScoredAccount> for OutputRow<'a> {
    fn from(row: &'a ScoredAccount) -> Self {
        let f = &row.features;
        Self {
            name_orig: &f.account,
            txn_count: f.txn_count,
            total_amount: f.total_amount,
            avg_amount: f.avg_amount,
            std_amount: f.std_amount,
            max_amount: f.max_amount,
            min_amount: f.min_amount,
            payment_ratio: f.payment_ratio,
            transfer_ratio: f.transfer_ratio,
            cashout_ratio: f.cashout_ratio,
            debit_ratio: f.debit_ratio,
            fraud_rate: f.fraud_rate,
            amount_volatility: f.amount_volatility,
            norm_txn_count: row.norm_txn_count,
            norm_total_amount: row.norm_total_amount,
            norm_amount_volatility: row.norm_amount_volatility,
            norm_fraud_rate: row.norm_fraud_rate,
            risk_score: row.risk_score,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = match parse_str_arg(&args, "--input") {
        Some(path) => path.to_string(),
        None => {
            eprintln!("Usage: risk-runner --input <ledger.csv> [--rows N] [--sample F] [--seed S] [--config cfg.json] [--output scores.csv]");
            std::process::exit(2);
        }
    };
    let output = parse_str_arg(&args, "--output").map(str::to_string);
    let config_path = parse_str_arg(&args, "--config").map(str::to_string);

    let mut config = match config_path {
        Some(path) => PipelineConfig::load(&path)?,
        None => PipelineConfig::default(),
    };
    if let Some(seed) = parse_opt_arg::<u64>(&args, "--seed") {
        config.sample_seed = seed;
    }

    let options = LoadOptions {
        row_limit: parse_opt_arg::<i64>(&args, "--rows"),
        sample_fraction: parse_opt_arg::<f64>(&args, "--sample"),
    };

    println!("risk-runner");
    println!("  input:   {input}");
    println!("  rows:    {:?}", options.row_limit);
    println!("  sample:  {:?}", options.sample_fraction);
    println!("  seed:    {}", config.sample_seed);
    println!();

    let scored = pipeline::run(Path::new(&input), &options, &config)?;

    if let Some(out_path) = &output {
        write_scores(out_path, &scored)?;
        println!("wrote {} rows to {out_path}", scored.len());
    }

    print_summary(&scored);
    Ok(())
}

fn write_scores(path: &str, scored: &[ScoredAccount]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in scored {
        writer.serialize(OutputRow::from(row))?;
    }
    writer.flush()?;
    Ok(())
}

fn print_summary(scored: &[ScoredAccount]) {
    println!("=== RUN SUMMARY ===");
    println!("  accounts scored: {}", scored.len());

    if scored.is_empty() {
        return;
    }

    let flagged = scored.iter().filter(|r| r.features.fraud_rate > 0.0).count();
    println!("  with fraud hits: {flagged}");

    let mut ranked: Vec<&ScoredAccount> = scored.iter().collect();
    ranked.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    println!();
    println!("=== TOP RISK ACCOUNTS ===");
    for row in ranked.iter().take(10) {
        println!(
            "  {} | score {:.4} | txns {} | total ${:.2} | fraud rate {:.2}",
            row.features.account,
            row.risk_score,
            row.features.txn_count,
            row.features.total_amount,
            row.features.fraud_rate
        );
    }
}

fn parse_str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_opt_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = parse_str_arg(args, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring unparseable value '{raw}' for {flag}");
            None
        }
    }
}

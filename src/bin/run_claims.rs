//! Run entitlement calculation for a whole batch of claims from CSV
//!
//! Outputs one result row per claim for reconciliation against payments

use anyhow::Context;
use clap::Parser;
use entitlement_system::{
    claim::load_claims, Claim, CycleEntitlement, EngineSettings, EntitlementRunner,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Calculate cycle entitlements for a batch of claims")]
struct Args {
    /// Path to the claims CSV file
    #[arg(long, default_value = "data/claims.csv")]
    claims: PathBuf,

    /// Path to an engine settings JSON file (defaults to the standard programme)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Path to write the results CSV to
    #[arg(long, default_value = "claim_entitlements.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading claims from {}...", args.claims.display());

    let claims = load_claims(&args.claims)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to load claims from {}", args.claims.display()))?;
    println!("Loaded {} claims in {:?}", claims.len(), start.elapsed());

    let settings = match &args.settings {
        Some(path) => EngineSettings::from_json_path(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => EngineSettings::default_programme(),
    };
    let runner = EntitlementRunner::with_settings(settings);

    println!("Calculating entitlements...");
    let calc_start = Instant::now();

    // First cycles for every claim, so no previous entitlement to reconcile
    let results: Vec<(&Claim, Result<CycleEntitlement, _>)> = claims
        .par_iter()
        .map(|claim| (claim, runner.run(claim, None)))
        .collect();

    println!("Calculation complete in {:?}", calc_start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    writeln!(
        file,
        "ClaimID,CycleStart,PregnancyVouchers,Under1Vouchers,OneToFourVouchers,BackdatedVouchers,TotalVouchers,TotalValuePence"
    )?;

    let mut total_vouchers: u64 = 0;
    let mut total_value_pence: u64 = 0;
    let mut failures = 0usize;

    for (claim, result) in &results {
        match result {
            Ok(entitlement) => {
                writeln!(
                    file,
                    "{},{},{},{},{},{},{},{}",
                    claim.claim_id,
                    claim.cycle_start_date,
                    entitlement.vouchers_for_pregnancy,
                    entitlement.vouchers_for_children_under_one,
                    entitlement.vouchers_for_children_one_to_four,
                    entitlement.backdated_vouchers,
                    entitlement.total_vouchers(),
                    entitlement.total_value_in_pence(),
                )?;
                total_vouchers += u64::from(entitlement.total_vouchers());
                total_value_pence += entitlement.total_value_in_pence();
            }
            Err(err) => {
                // A bad claim aborts that claim only, never the batch
                log::warn!("claim {} failed: {}", claim.claim_id, err);
                failures += 1;
            }
        }
    }

    println!("Output written to {}", args.output.display());

    println!("\nBatch Summary:");
    println!("  Claims:        {}", claims.len());
    println!("  Failures:      {}", failures);
    println!("  Total Vouchers: {}", total_vouchers);
    println!(
        "  Total Value:    \u{a3}{:.2}",
        total_value_pence as f64 / 100.0
    );

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

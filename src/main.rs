//! Entitlement System CLI
//!
//! Runs a worked example claim through the entitlement engine

use chrono::NaiveDate;
use entitlement_system::{
    Claim, EntitlementRunner, PregnancyStatus, QualifyingReason,
};
use std::fs::File;

fn main() {
    env_logger::init();

    println!("Entitlement System v0.1.0");
    println!("=========================\n");

    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");

    // Example claim: pregnant claimant with a toddler, paid from 2025-01-06
    let claim = Claim::new(
        1001,
        QualifyingReason::QualifyingBenefit,
        PregnancyStatus::Pregnant {
            due_date: date(2025, 3, 14),
        },
        vec![date(2023, 6, 2)],
        date(2025, 1, 6),
    );

    println!("Claim: {}", claim.claim_id);
    println!("  Qualifying Reason: {:?}", claim.qualifying_reason);
    println!("  Pregnancy: {:?}", claim.pregnancy);
    println!("  Children DOBs: {:?}", claim.children_dobs);
    println!("  Cycle Start: {}", claim.cycle_start_date);
    println!();

    let runner = EntitlementRunner::new();
    let entitlement = runner.run(&claim, None).expect("calculation failed");

    println!("Cycle Entitlement ({} periods):", entitlement.period_entitlements.len());
    println!(
        "{:>12} {:>10} {:>8} {:>8} {:>8} {:>12}",
        "Date", "Pregnancy", "Under1", "1to4", "Total", "Value (p)"
    );
    println!("{}", "-".repeat(64));

    for period in &entitlement.period_entitlements {
        println!(
            "{:>12} {:>10} {:>8} {:>8} {:>8} {:>12}",
            period.entitlement_date.to_string(),
            period.vouchers_for_pregnancy,
            period.vouchers_for_children_under_one,
            period.vouchers_for_children_one_to_four,
            period.total_vouchers(),
            period.total_value_in_pence(),
        );
    }

    // Write the full result to JSON for inspection
    let json_path = "entitlement_output.json";
    let file = File::create(json_path).expect("Unable to create JSON file");
    serde_json::to_writer_pretty(file, &entitlement).expect("Unable to write JSON file");
    println!("\nFull result written to: {}", json_path);

    println!("\nSummary:");
    println!("  Pregnancy Vouchers:   {}", entitlement.vouchers_for_pregnancy);
    println!("  Under-1 Vouchers:     {}", entitlement.vouchers_for_children_under_one);
    println!("  1-to-4 Vouchers:      {}", entitlement.vouchers_for_children_one_to_four);
    println!("  Backdated Vouchers:   {}", entitlement.backdated_vouchers);
    println!("  Total Vouchers:       {}", entitlement.total_vouchers());
    println!(
        "  Total Value:          \u{a3}{:.2}",
        entitlement.total_value_in_pence() as f64 / 100.0
    );

    // Mid-cycle pregnancy update example
    let additional = runner.additional_pregnancy_vouchers(
        date(2025, 6, 20),
        claim.cycle_start_date,
        date(2025, 1, 10),
        claim.qualifying_reason,
    );
    println!("\nMid-cycle pregnancy declared on 2025-01-10 would add {} voucher(s)", additional);
}

//! Load claims from a CSV batch file

use super::{Claim, PregnancyStatus, QualifyingReason};
use chrono::NaiveDate;
use csv::Reader;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Default path to the claims batch file
pub const DEFAULT_CLAIMS_PATH: &str = "data/claims.csv";

/// Raw CSV row matching the claims batch columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ClaimID")]
    claim_id: u32,
    #[serde(rename = "QualifyingReason")]
    qualifying_reason: String,
    #[serde(rename = "DueDate")]
    due_date: String,
    #[serde(rename = "ChildrenDOBs")]
    children_dobs: String,
    #[serde(rename = "CycleStartDate")]
    cycle_start_date: String,
}

impl CsvRow {
    fn to_claim(self) -> Result<Claim, Box<dyn Error>> {
        let qualifying_reason = match self.qualifying_reason.as_str() {
            "QualifyingBenefit" => QualifyingReason::QualifyingBenefit,
            "Under18" => QualifyingReason::Under18,
            other => return Err(format!("Unknown QualifyingReason: {}", other).into()),
        };

        // An empty DueDate column means no pregnancy is being tracked
        let pregnancy = if self.due_date.is_empty() {
            PregnancyStatus::NotPregnant
        } else {
            PregnancyStatus::Pregnant {
                due_date: parse_date(&self.due_date)?,
            }
        };

        let children_dobs = self
            .children_dobs
            .split(';')
            .filter(|s| !s.is_empty())
            .map(parse_date)
            .collect::<Result<Vec<_>, _>>()?;

        let cycle_start_date = parse_date(&self.cycle_start_date)?;

        Ok(Claim {
            claim_id: self.claim_id,
            qualifying_reason,
            pregnancy,
            children_dobs,
            cycle_start_date,
        })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    s.parse::<NaiveDate>()
        .map_err(|_| format!("Invalid date: {}", s).into())
}

/// Load claims from a CSV file
pub fn load_claims(path: &Path) -> Result<Vec<Claim>, Box<dyn Error>> {
    let file = File::open(path)?;
    read_claims(file)
}

/// Load claims from the default batch file location
pub fn load_default_claims() -> Result<Vec<Claim>, Box<dyn Error>> {
    load_claims(Path::new(DEFAULT_CLAIMS_PATH))
}

fn read_claims<R: std::io::Read>(reader: R) -> Result<Vec<Claim>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut claims = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        claims.push(row.to_claim()?);
    }

    Ok(claims)
}

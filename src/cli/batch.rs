//! Match command - evaluate a recipient against a pool of candidate donors.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::donor::Donor;
use crate::core::recipient::Recipient;
use crate::matching::engine::{evaluate_batch, rank_compatible};
use crate::matching::scoring::{MatchClassification, MatchDetails, MatchResult};
use crate::report::{MatchReport, ReportIdSource, TimestampIdSource};
use crate::utils::validation::validate_donors;

/// Arguments for the match command
#[derive(Args)]
pub struct MatchArgs {
    /// Recipient profile (JSON object)
    #[arg(short, long)]
    pub recipient: PathBuf,

    /// Candidate donors (JSON array)
    #[arg(short, long)]
    pub donors: PathBuf,

    /// Fixed report ID instead of a clock-derived one (reproducible output)
    #[arg(long)]
    pub report_id: Option<String>,
}

/// Execute the match command
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed, a record
/// fails boundary validation, or the recipient's PRA is out of range.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let recipient = read_recipient(&args.recipient)?;
    let donors = read_donors(&args.donors)?;

    if verbose {
        eprintln!(
            "Matching {} candidate donors against recipient {} ({}, PRA {}%)",
            donors.len(),
            recipient.full_name,
            recipient.blood_type,
            recipient.pra,
        );
    }

    validate_donors(&donors)?;
    let results = evaluate_batch(&recipient, &donors)?;

    let mut id_source: Box<dyn ReportIdSource> = match args.report_id {
        Some(id) => Box::new(crate::report::FixedIdSource(id)),
        None => Box::new(TimestampIdSource),
    };
    let report = MatchReport::build(recipient, results, id_source.as_mut(), Utc::now());

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

pub(crate) fn read_recipient(path: &Path) -> anyhow::Result<Recipient> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read recipient file {}: {e}", path.display()))?;
    let recipient = serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("invalid recipient record in {}: {e}", path.display()))?;
    Ok(recipient)
}

fn read_donors(path: &Path) -> anyhow::Result<Vec<Donor>> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read donors file {}: {e}", path.display()))?;
    let donors = serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("invalid donor records in {}: {e}", path.display()))?;
    Ok(donors)
}

/// Short note explaining a non-excluded zero score.
fn incompatibility_note(details: &MatchDetails) -> &'static str {
    if !details.blood_type_match {
        "blood type incompatible"
    } else if !details.crossmatch_compatible {
        "crossmatch mismatch"
    } else {
        "zero compatibility score"
    }
}

fn print_text_report(report: &MatchReport) {
    let recipient = &report.recipient;
    let summary = &report.summary;

    println!("Kidney Match Report [{}]", report.report_id);
    println!(
        "Generated {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "\nRecipient: {} ({}), blood type {}, PRA {}%",
        recipient.full_name, recipient.id, recipient.blood_type, recipient.pra,
    );

    println!(
        "\nSummary: {} donors analyzed -> {} compatible, {} incompatible, {} excluded",
        summary.total, summary.compatible, summary.incompatible, summary.excluded,
    );
    if let Some(best) = summary.best_score {
        println!("Best match score: {:.1}%", best * 100.0);
    }

    let ranked = rank_compatible(&report.results);
    if !ranked.is_empty() {
        println!("\nCompatible donors (ranked):");
        for (index, result) in ranked.iter().enumerate() {
            print_compatible_donor(index + 1, result);
        }
    }

    let others: Vec<&MatchResult> = report
        .results
        .iter()
        .filter(|r| r.classification != MatchClassification::Compatible)
        .collect();
    if !others.is_empty() {
        println!("\nOther donors:");
        for result in others {
            let reason = match result.classification {
                MatchClassification::Excluded => result
                    .details
                    .excluded_reason
                    .as_deref()
                    .unwrap_or("excluded"),
                _ => incompatibility_note(&result.details),
            };
            println!(
                "   {} ({}): {} - {}",
                result.donor.full_name, result.donor.id, result.classification, reason,
            );
        }
    }

    println!(
        "\nAll matches must be verified by laboratory testing before proceeding."
    );
}

fn print_compatible_donor(rank: usize, result: &MatchResult) {
    println!(
        "   {rank}. {} ({}) - score {:.1}%",
        result.donor.full_name,
        result.donor.id,
        result.compatibility_score * 100.0,
    );
    println!(
        "      Blood type {} | HLA {}/12 | Crossmatch {}",
        result.donor.blood_type, result.details.hla_matches, result.donor.crossmatch_result,
    );
    if let Some(egfr) = result.donor.egfr {
        println!("      eGFR {egfr} mL/min/1.73m2");
    }
}

fn print_tsv_report(report: &MatchReport) {
    println!(
        "donor_id\tdonor_name\tblood_type\tscore\tclassification\tblood_type_match\thla_matches\tcrossmatch_compatible\texcluded_reason"
    );
    for result in &report.results {
        println!(
            "{}\t{}\t{}\t{:.2}\t{}\t{}\t{}\t{}\t{}",
            result.donor.id,
            result.donor.full_name,
            result.donor.blood_type,
            result.compatibility_score,
            result.classification,
            result.details.blood_type_match,
            result.details.hla_matches,
            result.details.crossmatch_compatible,
            result.details.excluded_reason.as_deref().unwrap_or(""),
        );
    }
}

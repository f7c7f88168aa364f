//! Score command - evaluate a single donor/recipient pair in detail.
//!
//! Unlike `match`, this surfaces the full per-locus HLA comparison so a
//! coordinator can see exactly where the agreement comes from.

use std::path::PathBuf;

use clap::Args;

use crate::cli::batch::read_recipient;
use crate::cli::OutputFormat;
use crate::core::donor::Donor;
use crate::core::hla::ALL_LOCI;
use crate::core::recipient::Recipient;
use crate::matching::hla::locus_matches;
use crate::matching::scoring::{MatchResult, TOTAL_HLA_ANTIGENS};
use crate::utils::validation::validate_recipient;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Donor profile (JSON object)
    #[arg(short, long)]
    pub donor: PathBuf,

    /// Recipient profile (JSON object)
    #[arg(short, long)]
    pub recipient: PathBuf,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, or the recipient
/// fails boundary validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let donor_text = std::fs::read_to_string(&args.donor)
        .map_err(|e| anyhow::anyhow!("cannot read donor file {}: {e}", args.donor.display()))?;
    let donor: Donor = serde_json::from_str(&donor_text)
        .map_err(|e| anyhow::anyhow!("invalid donor record in {}: {e}", args.donor.display()))?;
    let recipient = read_recipient(&args.recipient)?;

    validate_recipient(&recipient)?;

    if verbose {
        eprintln!(
            "Scoring donor {} ({}) against recipient {} ({})",
            donor.full_name, donor.blood_type, recipient.full_name, recipient.blood_type,
        );
    }

    let result = MatchResult::evaluate(&donor, &recipient);

    match format {
        OutputFormat::Text => print_text(&result, &recipient),
        OutputFormat::Json => print_json(&result, &recipient)?,
        OutputFormat::Tsv => print_tsv(&result),
    }

    Ok(())
}

fn print_text(result: &MatchResult, recipient: &Recipient) {
    let details = &result.details;

    println!(
        "\n{} ({}) vs {} ({})",
        result.donor.full_name, result.donor.blood_type, recipient.full_name, recipient.blood_type,
    );

    println!(
        "\n   Score: {:.1}% = {}/{} HLA x PRA factor {:.2}",
        result.compatibility_score * 100.0,
        details.hla_matches,
        TOTAL_HLA_ANTIGENS,
        f64::from(100 - recipient.pra) / 100.0,
    );
    println!("   Classification: {}", result.classification);

    println!(
        "\n   Blood type: {}",
        if details.blood_type_match {
            "compatible"
        } else {
            "INCOMPATIBLE (score forced to 0)"
        }
    );
    println!(
        "   Crossmatch: {} (donor: {}, required: {})",
        if details.crossmatch_compatible {
            "compatible"
        } else {
            "MISMATCH (score forced to 0)"
        },
        result.donor.crossmatch_result,
        recipient.crossmatch_requirement,
    );
    if let Some(reason) = &details.excluded_reason {
        println!("   Exclusion: {reason}");
    }

    println!("\n   HLA comparison:");
    for &locus in &ALL_LOCI {
        let donor_text = result.donor.hla_typing.locus(locus);
        let recipient_text = recipient.hla_typing.locus(locus);
        let matches = locus_matches(&result.donor.hla_typing, &recipient.hla_typing, locus);
        println!(
            "      {:<7} D: {:<16} R: {:<16} {} match(es)",
            format!("{locus}:"),
            if donor_text.is_empty() { "-" } else { donor_text },
            if recipient_text.is_empty() {
                "-"
            } else {
                recipient_text
            },
            matches,
        );
    }
}

fn print_json(result: &MatchResult, recipient: &Recipient) -> anyhow::Result<()> {
    let loci: Vec<serde_json::Value> = ALL_LOCI
        .iter()
        .map(|&locus| {
            serde_json::json!({
                "locus": locus.as_str(),
                "donor": result.donor.hla_typing.locus(locus),
                "recipient": recipient.hla_typing.locus(locus),
                "matches": locus_matches(&result.donor.hla_typing, &recipient.hla_typing, locus),
            })
        })
        .collect();

    let output = serde_json::json!({
        "donor": result.donor,
        "recipient": recipient,
        "compatibility_score": result.compatibility_score,
        "classification": result.classification,
        "details": result.details,
        "hla_comparison": loci,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(result: &MatchResult) {
    println!(
        "donor_id\tscore\tclassification\tblood_type_match\thla_matches\tcrossmatch_compatible\thas_unacceptable_antigens"
    );
    println!(
        "{}\t{:.2}\t{}\t{}\t{}\t{}\t{}",
        result.donor.id,
        result.compatibility_score,
        result.classification,
        result.details.blood_type_match,
        result.details.hla_matches,
        result.details.crossmatch_compatible,
        result.details.has_unacceptable_antigens,
    );
}

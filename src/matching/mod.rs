//! Donor-recipient compatibility matching engine.
//!
//! The engine is a pure, synchronous computation over materialized records:
//! no I/O, no shared state, safe to call concurrently.
//!
//! - [`hla`]: per-locus allele-set comparison
//! - [`crossmatch`]: exact-equality crossmatch veto
//! - [`antigens`]: unacceptable-antigen exclusion
//! - [`scoring`]: single-pair score aggregation ([`MatchResult`](scoring::MatchResult))
//! - [`engine`]: batch evaluation, classification, and summary derivations
//!
//! ## Scoring
//!
//! Blood type and crossmatch are hard gates; HLA and PRA are graded
//! multipliers applied once both gates pass:
//!
//! ```text
//! score = round2( hla_matches / 12 * (100 - pra) / 100 )   when gates pass
//!       = 0                                                otherwise
//! ```
//!
//! `hla_matches` is always computed and reported even when a gate zeroes the
//! score, so reports stay transparent about partial agreement.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kidney_match::core::{donor::Donor, recipient::Recipient};
//! use kidney_match::matching::engine::{evaluate_batch, rank_compatible, MatchSummary};
//!
//! # fn load() -> (Recipient, Vec<Donor>) { unimplemented!() }
//! let (recipient, donors) = load();
//! let results = evaluate_batch(&recipient, &donors)?;
//! let summary = MatchSummary::from_results(&results);
//! println!("{} of {} donors compatible", summary.compatible, summary.total);
//!
//! for result in rank_compatible(&results) {
//!     println!(
//!         "{}: {:.0}% ({}/12 HLA)",
//!         result.donor.full_name,
//!         result.compatibility_score * 100.0,
//!         result.details.hla_matches,
//!     );
//! }
//! # Ok::<(), kidney_match::utils::validation::ValidationError>(())
//! ```

pub mod antigens;
pub mod crossmatch;
pub mod engine;
pub mod hla;
pub mod scoring;

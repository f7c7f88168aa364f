//! # kidney-match
//!
//! A library for deterministic donor-recipient compatibility matching in a
//! kidney transplant registry.
//!
//! Given one recipient profile and a list of candidate donor profiles, the
//! engine computes a compatibility score and classification for each
//! candidate. Blood type and crossmatch act as hard vetoes; HLA agreement
//! and the recipient's panel-reactive-antibody percentage grade the score of
//! pairs that pass both gates. Donors carrying an antigen on the recipient's
//! unacceptable list are excluded outright.
//!
//! The engine is pure and synchronous: records go in, results come out, and
//! identical inputs always produce identical output. Persistence, auth, and
//! report rendering are external collaborators.
//!
//! This is a simplified allele-count heuristic, not a real-world
//! immunological scoring system; all matches must be verified by laboratory
//! testing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kidney_match::matching::engine::{evaluate_batch, rank_compatible};
//!
//! # fn load() -> (kidney_match::core::recipient::Recipient, Vec<kidney_match::core::donor::Donor>) { unimplemented!() }
//! let (recipient, donors) = load();
//! let results = evaluate_batch(&recipient, &donors)?;
//!
//! for m in rank_compatible(&results) {
//!     println!("{}: {:.1}%", m.donor.full_name, m.compatibility_score * 100.0);
//! }
//! # Ok::<(), kidney_match::utils::validation::ValidationError>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`]: blood groups, HLA typing, and registry records
//! - [`matching`]: the compatibility rules, scoring, and batch engine
//! - [`report`]: the structured report envelope consumed by report views
//! - [`cli`]: command-line interface implementation
//! - [`web`]: web service exposing the engine over HTTP

pub mod cli;
pub mod core;
pub mod matching;
pub mod report;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::blood::BloodType;
pub use crate::core::donor::{Donor, DonorStatus};
pub use crate::core::hla::{HlaLocus, HlaTyping};
pub use crate::core::recipient::Recipient;
pub use crate::matching::engine::{evaluate_batch, rank_compatible, MatchSummary};
pub use crate::matching::scoring::{MatchClassification, MatchDetails, MatchResult};
pub use crate::report::MatchReport;

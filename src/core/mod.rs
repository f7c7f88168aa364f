//! Core data types for donor-recipient matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`BloodType`](blood::BloodType): the eight ABO/Rh groups and the directed
//!   donation table
//! - [`HlaTyping`](hla::HlaTyping): six free-text loci of allele tokens
//! - [`Donor`](donor::Donor), [`Recipient`](recipient::Recipient): registry
//!   records as supplied by the persistence layer, read-only during matching
//!
//! Records keep `blood_type` as the raw intake token. Unrecognized tokens are
//! not an error: the compatibility lookup fails closed, so a typo can only
//! make a pair incompatible, never silently compatible.

pub mod blood;
pub mod donor;
pub mod hla;
pub mod recipient;

//! Shared helpers outside the matching engine proper.

pub mod validation;

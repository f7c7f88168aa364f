//! Web service wrapper around the matching engine.
//!
//! The engine itself has no network surface; this module layers a single
//! hardened HTTP endpoint on top of it for registry frontends.

pub mod server;

//! Common utilities for the boxkit style engine.
//!
//! This crate provides shared infrastructure used by the engine and its CLI:
//! - **Warning System** - deduplicated diagnostics routed through `tracing`

pub mod warning;

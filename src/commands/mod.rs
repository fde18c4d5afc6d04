//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — scan-target resolution into a scan configuration.
//! - `submit.rs` — pre-computed results ingestion and submission payloads.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod scan;
pub mod submit;

pub use scan::handle_scan;
pub use submit::handle_submit;

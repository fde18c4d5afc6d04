//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `catalog.rs` — natively recognized compliance frameworks.
//! - `resolver.rs` — scan-target strings → ordered policy identifiers.
//! - `selector.rs` — namespace filters → list/watch field selectors.
//! - `results.rs` — dual-shape results artifact ingestion.
//! - `inputs.rs` — input-source pattern checks.
//! - `report.rs` — posture report assembly for submission.
//! - `settings.rs` — local account settings.
//! - `audit.rs` — best-effort invocation log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod catalog;
pub mod inputs;
pub mod output;
pub mod report;
pub mod resolver;
pub mod results;
pub mod selector;
pub mod settings;

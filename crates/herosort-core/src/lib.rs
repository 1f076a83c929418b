/// HeroSort Core — path classification, asset layout, and report generation.
///
/// This crate contains all business logic with zero CLI dependencies.
/// The binary crate only parses arguments, initialises logging and calls
/// [`pipeline::run`].
///
/// # Modules
///
/// - [`model`] — Hero ids, skill/skin records and the per-hero indexes.
/// - [`classify`] — Pure filename/directory-name classification rules.
/// - [`scanner`] — Recursive file listing of the source trees.
/// - [`registry`] — Skill-name table loaded from CSV.
/// - [`layout`] — Rebuilds the `hero/` output tree from the indexes.
/// - [`report`] — Hero spine, hero skill table and plaintext reports.
/// - [`pipeline`] — The end-to-end run.
pub mod classify;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod scanner;

pub use config::{OutputLayout, RunConfig};
pub use error::{Error, Result};
pub use pipeline::{run, RunSummary};

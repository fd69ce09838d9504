/// FossilSleuth Core: loading, data model, and analysis.
///
/// This crate contains all business logic with zero drawing dependencies.
/// It is designed to be reusable across different frontends (PNG/HTML
/// report, CLI, notebook bindings).
///
/// # Modules
///
/// - [`model`]: Fossil record table and display formatting helpers.
/// - [`loader`]: Reads `dinosaurs.csv` into a [`model::FossilTable`].
/// - [`analysis`]: One module per question asked of the table.
/// - [`config`]: Data/output directory resolution.
/// - [`error`]: Failure taxonomy shared by every stage.
pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;

pub use error::{FossilError, Result};

/// FossilSleuth Render: static charts, the interactive map, and the report
/// pipeline that drives them.
///
/// Business logic lives in `fossilsleuth-core`. This crate only turns its
/// results into files and console output.
pub mod charts;
pub mod map;
pub mod output;
pub mod report;
pub mod theme;

pub use output::{Artifact, OutputLayout};
pub use report::{run, ReportSummary};

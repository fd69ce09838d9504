/// Data model for the fossil record table.
///
/// Re-exports the record/table types and supporting formatters.
pub mod format;
pub mod record;
pub mod table;

pub use record::{Diet, FossilRecord};
pub use table::FossilTable;

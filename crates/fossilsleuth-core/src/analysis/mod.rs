/// Analysis modules: one per question asked of the fossil table.
///
/// Every block reads the shared table and is independent of the others.
pub mod age;
pub mod diet;
pub mod geo;
pub mod largest;
pub mod names;
pub mod stats;
pub mod types;

pub use age::{age_trend, AgeColumn, AgeTrend};
pub use diet::{diet_counts, diet_length_summary, DietCounts, DietLength};
pub use geo::{natural_earth, project_records, GeoPoint, GeoProjection};
pub use largest::{largest_specimens, missing_lengths, LargestSpecimens, MissingLengths};
pub use names::distinct_name_count;
pub use stats::{BoxStats, DensityCurve, LinearFit};
pub use types::{most_common_type, type_counts, TypeCount};

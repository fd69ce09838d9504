/// Type frequency: which dinosaur type occurs most often.
///
/// The descending ordering doubles as the category order of the type chart.
use crate::model::FossilTable;
use compact_str::CompactString;
use std::collections::HashMap;

/// Occurrence count for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub kind: CompactString,
    pub count: u64,
}

/// Count records per type, sorted by count descending.
///
/// Records with no type are not counted. Equal counts are ordered
/// alphabetically so the chart order is stable between runs.
pub fn type_counts(table: &FossilTable) -> Vec<TypeCount> {
    let mut map: HashMap<&str, u64> = HashMap::new();
    for kind in table.iter().filter_map(|r| r.kind.as_deref()) {
        *map.entry(kind).or_insert(0) += 1;
    }

    let mut results: Vec<TypeCount> = map
        .into_iter()
        .map(|(kind, count)| TypeCount {
            kind: CompactString::new(kind),
            count,
        })
        .collect();
    results.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.kind.cmp(&b.kind)));
    results
}

/// The most frequent type, or `None` when no record has a type.
pub fn most_common_type(counts: &[TypeCount]) -> Option<&TypeCount> {
    counts.first()
}

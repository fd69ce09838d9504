/// In-memory fossil record table.
///
/// Rows are stored in file order in a flat `Vec<FossilRecord>`. Columns are
/// read through iterator accessors instead of being materialized, since
/// every analysis is a single pass.
use super::record::{Diet, FossilRecord};

#[derive(Debug, Clone, Default)]
pub struct FossilTable {
    /// Every record, in file order.
    pub records: Vec<FossilRecord>,
}

impl FossilTable {
    /// Create an empty table with pre-allocated capacity.
    pub fn with_capacity(estimated_rows: usize) -> Self {
        Self {
            records: Vec::with_capacity(estimated_rows),
        }
    }

    pub fn from_records(records: Vec<FossilRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: FossilRecord) {
        self.records.push(record);
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FossilRecord> {
        self.records.iter()
    }

    /// The `name` column.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// The `length_m` column, `None` where missing.
    pub fn lengths(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.records.iter().map(|r| r.length_m)
    }

    /// Non-missing lengths only.
    pub fn known_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().filter_map(|r| r.length_m)
    }

    /// Non-missing lengths of records with the given diet.
    pub fn lengths_for_diet(&self, diet: Diet) -> impl Iterator<Item = f64> + '_ {
        self.records
            .iter()
            .filter(move |r| r.diet == Some(diet))
            .filter_map(|r| r.length_m)
    }
}

impl<'a> IntoIterator for &'a FossilTable {
    type Item = &'a FossilRecord;
    type IntoIter = std::slice::Iter<'a, FossilRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Record builders shared by the unit tests of every analysis module.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use compact_str::CompactString;

    /// A record with everything but the analysed columns zeroed out.
    pub fn record(name: &str, length_m: Option<f64>) -> FossilRecord {
        FossilRecord {
            occurrence_no: 0,
            name: CompactString::new(name),
            diet: None,
            kind: None,
            length_m,
            max_ma: 0.0,
            min_ma: 0.0,
            region: None,
            lng: 0.0,
            lat: 0.0,
            class: None,
            family: None,
        }
    }

    pub fn with_diet(mut rec: FossilRecord, diet: Diet) -> FossilRecord {
        rec.diet = Some(diet);
        rec
    }

    pub fn with_kind(mut rec: FossilRecord, kind: &str) -> FossilRecord {
        rec.kind = Some(CompactString::new(kind));
        rec
    }

    pub fn with_ages(mut rec: FossilRecord, max_ma: f64, min_ma: f64) -> FossilRecord {
        rec.max_ma = max_ma;
        rec.min_ma = min_ma;
        rec
    }

    /// Table from `(name, length)` pairs.
    pub fn table_of(rows: &[(&str, Option<f64>)]) -> FossilTable {
        FossilTable::from_records(rows.iter().map(|&(n, l)| record(n, l)).collect())
    }
}

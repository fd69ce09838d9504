/// Largest-specimen lookup and missing-length accounting.
///
/// With most lengths unrecorded, the "largest" answer only holds for the
/// measured records; [`MissingLengths`] quantifies how much is unknown.
use super::names::distinct_name_count;
use crate::model::FossilTable;
use compact_str::CompactString;
use std::collections::HashSet;

/// Every name sharing the maximum recorded length.
#[derive(Debug, Clone, PartialEq)]
pub struct LargestSpecimens {
    /// Column maximum, ignoring missing values. `None` if no length is recorded.
    pub max_length: Option<f64>,
    /// Distinct names whose length equals `max_length`, in first-appearance order.
    pub names: Vec<CompactString>,
}

/// Find the maximum length and all names that reach it. Ties are kept.
pub fn largest_specimens(table: &FossilTable) -> LargestSpecimens {
    let max_length = table.known_lengths().reduce(f64::max);

    let mut names = Vec::new();
    if let Some(max) = max_length {
        let mut seen = HashSet::new();
        for rec in table.iter().filter(|r| r.length_m == Some(max)) {
            if seen.insert(rec.name.as_str()) {
                names.push(rec.name.clone());
            }
        }
    }

    LargestSpecimens { max_length, names }
}

/// How much of the `length_m` column is missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissingLengths {
    /// Rows with no recorded length.
    pub missing_rows: usize,
    /// Distinct names among the rows with no recorded length.
    pub missing_names: usize,
    pub total_rows: usize,
    pub distinct_names: usize,
}

impl MissingLengths {
    /// Rows with an unrecorded length per distinct name, in percent.
    ///
    /// This is the headline figure: the numerator counts rows and the
    /// denominator counts names, so a name recorded several times without a
    /// length can push it past 100.
    pub fn percent_rows_of_names(&self) -> f64 {
        if self.distinct_names == 0 {
            0.0
        } else {
            self.missing_rows as f64 / self.distinct_names as f64 * 100.0
        }
    }

    /// Share of distinct names with an unrecorded length, in percent.
    ///
    /// Numerator and denominator both count names. A name with one measured
    /// and one unmeasured record counts as missing.
    pub fn percent_of_names(&self) -> f64 {
        if self.distinct_names == 0 {
            0.0
        } else {
            self.missing_names as f64 / self.distinct_names as f64 * 100.0
        }
    }

    /// Share of rows with an unrecorded length, in percent.
    pub fn percent_of_rows(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            self.missing_rows as f64 / self.total_rows as f64 * 100.0
        }
    }
}

pub fn missing_lengths(table: &FossilTable) -> MissingLengths {
    let missing: Vec<&str> = table
        .iter()
        .filter(|r| r.length_m.is_none())
        .map(|r| r.name.as_str())
        .collect();

    MissingLengths {
        missing_rows: missing.len(),
        missing_names: missing.iter().collect::<HashSet<_>>().len(),
        total_rows: table.len(),
        distinct_names: distinct_name_count(table),
    }
}

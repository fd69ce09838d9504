/// Age-vs-length trend: did dinosaurs get bigger over time?
///
/// Derives `age = max_ma - min_ma` for every record and fits a straight line
/// of length on age over the records with a measured length.
use super::stats::LinearFit;
use crate::model::FossilTable;
use tracing::debug;

/// The derived `age` column, parallel to `FossilTable::records`.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeColumn {
    pub ages: Vec<f64>,
}

impl AgeColumn {
    pub fn derive(table: &FossilTable) -> Self {
        Self {
            ages: table.iter().map(|r| r.age()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }
}

/// Scatter points and best-fit line for the age plot.
#[derive(Debug, Clone)]
pub struct AgeTrend {
    pub ages: AgeColumn,
    /// `(age, length_m)` for records with a measured length.
    pub points: Vec<(f64, f64)>,
    /// `None` when there are too few points or no spread in age.
    pub fit: Option<LinearFit>,
}

impl AgeTrend {
    /// `true` when the fitted line slopes downward (older fossils are longer).
    pub fn is_decreasing(&self) -> bool {
        self.fit.is_some_and(|f| f.slope < 0.0)
    }
}

pub fn age_trend(table: &FossilTable) -> AgeTrend {
    let ages = AgeColumn::derive(table);
    let points: Vec<(f64, f64)> = ages
        .ages
        .iter()
        .zip(table.lengths())
        .filter_map(|(&age, length)| length.map(|l| (age, l)))
        .collect();
    let fit = LinearFit::fit(&points);
    debug!(
        "Age trend over {} measured records: {:?}",
        points.len(),
        fit
    );
    AgeTrend { ages, points, fit }
}

/// Diet breakdowns: how many records per diet, and how length is
/// distributed within each diet.
use super::stats::BoxStats;
use crate::model::{Diet, FossilTable};

/// Record count per diet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietCounts {
    /// One entry per diet in [`Diet::ALL`] order, zero counts included.
    pub counts: Vec<(Diet, u64)>,
    /// Records whose diet is missing.
    pub missing: u64,
}

impl DietCounts {
    pub fn get(&self, diet: Diet) -> u64 {
        self.counts
            .iter()
            .find(|(d, _)| *d == diet)
            .map_or(0, |(_, c)| *c)
    }
}

pub fn diet_counts(table: &FossilTable) -> DietCounts {
    let mut counts: Vec<(Diet, u64)> = Diet::ALL.iter().map(|&d| (d, 0)).collect();
    let mut missing = 0;
    for rec in table {
        match rec.diet {
            Some(diet) => {
                if let Some(slot) = counts.iter_mut().find(|(d, _)| *d == diet) {
                    slot.1 += 1;
                }
            }
            None => missing += 1,
        }
    }
    DietCounts { counts, missing }
}

/// Length distribution summary for one diet.
#[derive(Debug, Clone, PartialEq)]
pub struct DietLength {
    pub diet: Diet,
    pub stats: BoxStats,
}

/// Box statistics of `length_m` per diet, in [`Diet::ALL`] order.
///
/// Diets with no measured record are omitted.
pub fn diet_length_summary(table: &FossilTable) -> Vec<DietLength> {
    Diet::ALL
        .iter()
        .filter_map(|&diet| {
            BoxStats::from_values(table.lengths_for_diet(diet))
                .map(|stats| DietLength { diet, stats })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::fixtures::{record, with_diet};

    fn sample() -> FossilTable {
        FossilTable::from_records(vec![
            with_diet(record("T. rex", Some(12.0)), Diet::Carnivorous),
            with_diet(record("Velociraptor", Some(2.0)), Diet::Carnivorous),
            with_diet(record("Brachiosaurus", Some(26.0)), Diet::Herbivorous),
            with_diet(record("Diplodocus", Some(30.0)), Diet::Herbivorous),
            with_diet(record("Iguanodon", None), Diet::Herbivorous),
            record("Unknown", Some(4.0)),
        ])
    }

    #[test]
    fn counts_include_zero_and_missing() {
        let counts = diet_counts(&sample());
        assert_eq!(counts.get(Diet::Carnivorous), 2);
        assert_eq!(counts.get(Diet::Herbivorous), 3);
        assert_eq!(counts.get(Diet::Omnivorous), 0);
        assert_eq!(counts.missing, 1);
        assert_eq!(counts.counts.len(), 3);
    }

    #[test]
    fn length_summary_per_diet() {
        let summary = diet_length_summary(&sample());
        // Omnivorous has no records, so only two groups.
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].diet, Diet::Carnivorous);
        assert_eq!(summary[0].stats.count, 2);
        assert!((summary[0].stats.median - 7.0).abs() < 1e-9);
        assert_eq!(summary[1].diet, Diet::Herbivorous);
        // Missing length is skipped.
        assert_eq!(summary[1].stats.count, 2);
        assert!((summary[1].stats.median - 28.0).abs() < 1e-9);
    }

    /// Records without a diet do not leak into any group.
    #[test]
    fn undieted_records_are_not_grouped() {
        let total: usize = diet_length_summary(&sample())
            .iter()
            .map(|d| d.stats.count)
            .sum();
        assert_eq!(total, 4);
    }
}

/// Distinct-name count: how many different dinosaurs are in the data.
use crate::model::FossilTable;
use std::collections::HashSet;

/// Number of unique values in the `name` column.
pub fn distinct_name_count(table: &FossilTable) -> usize {
    table.names().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::fixtures::table_of;

    #[test]
    fn counts_each_name_once() {
        let table = table_of(&[
            ("Allosaurus", Some(12.0)),
            ("Allosaurus", None),
            ("Stegosaurus", Some(9.0)),
            ("Allosaurus", Some(8.5)),
        ]);
        assert_eq!(distinct_name_count(&table), 2);
    }

    /// Names are compared exactly, so case variants stay distinct.
    #[test]
    fn comparison_is_exact() {
        let table = table_of(&[("Iguanodon", None), ("iguanodon", None)]);
        assert_eq!(distinct_name_count(&table), 2);
    }

    #[test]
    fn empty_table_has_no_names() {
        assert_eq!(distinct_name_count(&table_of(&[])), 0);
    }
}

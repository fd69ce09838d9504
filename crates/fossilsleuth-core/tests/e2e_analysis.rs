/// End-to-end loader and analysis tests.
///
/// A small but realistic `dinosaurs.csv` is written to a temporary data
/// directory and loaded through the public `load_table` entry point, then
/// every analysis block is run against the loaded table. No mocking: the
/// same code path the report uses.
use fossilsleuth_core::analysis::{
    age_trend, diet_counts, diet_length_summary, distinct_name_count, largest_specimens,
    missing_lengths, most_common_type, project_records, type_counts,
};
use fossilsleuth_core::loader::{load_table, DATASET_FILE};
use fossilsleuth_core::model::Diet;
use fossilsleuth_core::FossilError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

const SAMPLE_CSV: &str = "\
occurrence_no,name,diet,type,length_m,max_ma,min_ma,region,lng,lat,class,family
130294,Supersaurus,herbivorous,sauropod,35.0,155.7,150.8,Colorado,-108.5,38.9,Saurischia,Diplodocidae
130295,Argentinosaurus,herbivorous,sauropod,35.0,99.6,93.5,Neuquén,-69.1,-38.9,Saurischia,Antarctosauridae
130296,Tyrannosaurus,carnivorous,large theropod,12.0,70.6,66.043,Montana,-106.3,47.6,Saurischia,Tyrannosauridae
130297,Tyrannosaurus,carnivorous,large theropod,,70.6,66.043,Wyoming,-104.2,43.0,Saurischia,Tyrannosauridae
130298,Oviraptor,omnivorous,small theropod,1.6,75.0,71.0,Ömnögovi,101.2,43.5,Saurischia,Oviraptoridae
130299,Iguanodon,herbivorous,ornithopod,10.0,126.3,125.0,Europe,4.4,50.5,Ornithischia,Iguanodontidae
130300,Triceratops,herbivorous,ceratopsian,,70.6,66.043,Alberta,-112.6,51.4,Ornithischia,Ceratopsidae
130301,Ankylosaurus,,armored dinosaur,,70.6,66.043,Montana,-107.0,46.5,Ornithischia,Ankylosauridae
";

/// Write the sample dataset into `dir` under the fixed file name.
fn write_dataset(dir: &Path, body: &str) {
    fs::write(dir.join(DATASET_FILE), body).expect("failed to write dataset");
}

fn loaded_sample() -> (TempDir, fossilsleuth_core::model::FossilTable) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    write_dataset(tmp.path(), SAMPLE_CSV);
    let table = load_table(tmp.path()).expect("sample dataset must load");
    (tmp, table)
}

// ── Loader ───────────────────────────────────────────────────────────────────

/// Row count equals the number of data rows in the file.
#[test]
fn row_count_matches_file() {
    let (_tmp, table) = loaded_sample();
    let data_rows = SAMPLE_CSV.lines().count() - 1;
    assert_eq!(table.len(), data_rows);
}

#[test]
fn absent_file_fails_fast() {
    let tmp = TempDir::new().unwrap();
    let err = load_table(tmp.path()).unwrap_err();
    assert!(matches!(err, FossilError::Io { .. }), "got {err}");
}

#[test]
fn malformed_file_fails_fast() {
    let tmp = TempDir::new().unwrap();
    write_dataset(tmp.path(), "occurrence_no,name\nnot-a-number,X\n");
    let err = load_table(tmp.path()).unwrap_err();
    assert!(matches!(err, FossilError::Csv { .. }), "got {err}");
}

/// Non-ASCII region names survive the round trip through the loader.
#[test]
fn unicode_fields_are_preserved() {
    let (_tmp, table) = loaded_sample();
    assert_eq!(table.records[1].region.as_deref(), Some("Neuquén"));
}

// ── Analyses ─────────────────────────────────────────────────────────────────

#[test]
fn distinct_names() {
    let (_tmp, table) = loaded_sample();
    assert_eq!(distinct_name_count(&table), 7);
}

/// Both 35 m sauropods share the title.
#[test]
fn largest_is_a_tie() {
    let (_tmp, table) = loaded_sample();
    let largest = largest_specimens(&table);
    assert_eq!(largest.max_length, Some(35.0));
    assert_eq!(largest.names, vec!["Supersaurus", "Argentinosaurus"]);
}

/// Three names lack a length somewhere in the data. Tyrannosaurus has one
/// measured and one unmeasured record and counts as missing.
#[test]
fn missing_lengths_counted_by_name() {
    let (_tmp, table) = loaded_sample();
    let missing = missing_lengths(&table);
    assert_eq!(missing.missing_rows, 3);
    assert_eq!(missing.missing_names, 3);
    assert!((missing.percent_of_names() - 3.0 / 7.0 * 100.0).abs() < 1e-9);
}

#[test]
fn sauropods_and_large_theropods_lead_types() {
    let (_tmp, table) = loaded_sample();
    let counts = type_counts(&table);
    let top = most_common_type(&counts).unwrap();
    assert_eq!(top.count, 2);
    assert!(counts.iter().all(|c| top.count >= c.count));
    assert_eq!(counts.iter().map(|c| c.count).sum::<u64>(), 8);
}

#[test]
fn diet_breakdown() {
    let (_tmp, table) = loaded_sample();
    let counts = diet_counts(&table);
    assert_eq!(counts.get(Diet::Herbivorous), 4);
    assert_eq!(counts.get(Diet::Carnivorous), 2);
    assert_eq!(counts.get(Diet::Omnivorous), 1);
    assert_eq!(counts.missing, 1);

    let summary = diet_length_summary(&table);
    let herb = summary
        .iter()
        .find(|d| d.diet == Diet::Herbivorous)
        .expect("herbivorous group missing");
    assert_eq!(herb.stats.count, 3);
    assert!((herb.stats.median - 35.0).abs() < 1e-9);
}

#[test]
fn age_column_and_trend() {
    let (_tmp, table) = loaded_sample();
    let trend = age_trend(&table);
    assert_eq!(trend.ages.len(), table.len());
    for (rec, age) in table.iter().zip(&trend.ages.ages) {
        assert!((age - (rec.max_ma - rec.min_ma)).abs() < 1e-12);
    }
    assert_eq!(trend.points.len(), 5);
    assert!(trend.fit.is_some());
}

#[test]
fn every_site_is_projected() {
    let (_tmp, table) = loaded_sample();
    let projection = project_records(&table);
    assert_eq!(projection.points.len(), table.len());
    assert_eq!(projection.skipped, 0);
    assert_eq!(projection.length_range, Some((1.6, 35.0)));
}

/// Dataset loader: reads `dinosaurs.csv` into a [`FossilTable`].
///
/// The schema is fixed. Columns are matched by header name, so column order
/// in the file does not matter, but every required column must be present.
/// The first malformed row aborts the load.
use crate::error::{FossilError, Result};
use crate::model::record::RawRecord;
use crate::model::{FossilRecord, FossilTable};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// File name of the dataset inside the data directory.
pub const DATASET_FILE: &str = "dinosaurs.csv";

/// Load `dinosaurs.csv` from `data_dir`.
pub fn load_table(data_dir: &Path) -> Result<FossilTable> {
    load_file(&data_dir.join(DATASET_FILE))
}

/// Load a fossil table from an explicit CSV path.
pub fn load_file(path: &Path) -> Result<FossilTable> {
    let file = File::open(path).map_err(|source| FossilError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(file, path)?;
    info!("Loaded {} records from {}", table.len(), path.display());
    Ok(table)
}

/// Parse CSV from any reader. `origin` is only used in error messages.
pub fn read_table<R: Read>(reader: R, origin: &Path) -> Result<FossilTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let csv_err = |source: csv::Error| FossilError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let headers = csv_reader.headers().map_err(csv_err)?.clone();
    debug!("Dataset columns: {:?}", headers.iter().collect::<Vec<_>>());

    let mut table = FossilTable::with_capacity(1_024);
    for row in csv_reader.deserialize::<RawRecord>() {
        let raw = row.map_err(csv_err)?;
        table.push(FossilRecord::try_from(raw)?);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Diet;

    const HEADER: &str =
        "occurrence_no,name,diet,type,length_m,max_ma,min_ma,region,lng,lat,class,family\n";

    fn parse(body: &str) -> Result<FossilTable> {
        let text = format!("{HEADER}{body}");
        read_table(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn parses_full_row() {
        let table = parse(
            "130209,Aachenosaurus,herbivorous,ornithopod,,70.6,66.043,Europe,5.6,50.5,Ornithischia,Hadrosauridae\n",
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        let rec = &table.records[0];
        assert_eq!(rec.occurrence_no, 130209);
        assert_eq!(rec.name, "Aachenosaurus");
        assert_eq!(rec.diet, Some(Diet::Herbivorous));
        assert_eq!(rec.kind.as_deref(), Some("ornithopod"));
        assert_eq!(rec.length_m, None);
        assert_eq!(rec.family.as_deref(), Some("Hadrosauridae"));
    }

    #[test]
    fn missing_diet_is_none() {
        let table = parse("1,Ajkaceratops,,ceratopsian,1.0,86.3,83.6,Europe,17.5,47.1,,\n").unwrap();
        assert_eq!(table.records[0].diet, None);
        assert_eq!(table.records[0].length_m, Some(1.0));
    }

    #[test]
    fn row_count_matches_data_rows() {
        let table = parse(concat!(
            "1,A,carnivorous,small theropod,2,100,90,Asia,100,40,,\n",
            "2,B,herbivorous,sauropod,20,150,140,Africa,20,-10,,\n",
            "3,A,carnivorous,small theropod,,100,90,Asia,101,41,,\n",
        ))
        .unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn unknown_diet_fails_the_load() {
        let err = parse("1,A,insectivorous,small theropod,2,100,90,Asia,100,40,,\n").unwrap_err();
        assert!(matches!(err, FossilError::UnknownDiet { .. }));
    }

    #[test]
    fn non_numeric_length_fails_the_load() {
        let err = parse("1,A,carnivorous,small theropod,long,100,90,Asia,100,40,,\n").unwrap_err();
        assert!(matches!(err, FossilError::Csv { .. }));
    }

    #[test]
    fn missing_required_column_fails_the_load() {
        let text = "occurrence_no,name,diet,type,length_m,max_ma,min_ma,lng\n1,A,,,,1,0,0\n";
        let err = read_table(text.as_bytes(), Path::new("inline.csv")).unwrap_err();
        assert!(matches!(err, FossilError::Csv { .. }));
    }

    /// Optional descriptive columns may be absent from the header entirely.
    #[test]
    fn optional_columns_may_be_absent() {
        let text = "occurrence_no,name,diet,type,length_m,max_ma,min_ma,lng,lat\n7,B,omnivorous,ornithopod,3,10,5,1,2\n";
        let table = read_table(text.as_bytes(), Path::new("inline.csv")).unwrap();
        assert_eq!(table.records[0].region, None);
        assert_eq!(table.records[0].diet, Some(Diet::Omnivorous));
    }
}

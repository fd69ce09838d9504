/// A single fossil occurrence: one row of `dinosaurs.csv`.
use crate::error::FossilError;
use compact_str::CompactString;
use serde::Deserialize;
use std::str::FromStr;

/// Dietary classification. The dataset uses exactly these three labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Diet {
    Carnivorous,
    Herbivorous,
    Omnivorous,
}

impl Diet {
    /// All diets in display order.
    pub const ALL: [Diet; 3] = [Diet::Carnivorous, Diet::Herbivorous, Diet::Omnivorous];

    /// Label as it appears in the dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Carnivorous => "carnivorous",
            Self::Herbivorous => "herbivorous",
            Self::Omnivorous => "omnivorous",
        }
    }

    /// Capitalized label for chart axes and console output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Carnivorous => "Carnivorous",
            Self::Herbivorous => "Herbivorous",
            Self::Omnivorous => "Omnivorous",
        }
    }
}

impl FromStr for Diet {
    type Err = FossilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| FossilError::UnknownDiet {
                value: s.to_string(),
            })
    }
}

/// Row exactly as deserialized from the CSV, before categorical columns are
/// validated.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    pub occurrence_no: u64,
    pub name: CompactString,
    pub diet: Option<CompactString>,
    #[serde(rename = "type")]
    pub kind: Option<CompactString>,
    pub length_m: Option<f64>,
    pub max_ma: f64,
    pub min_ma: f64,
    #[serde(default)]
    pub region: Option<CompactString>,
    pub lng: f64,
    pub lat: f64,
    #[serde(default)]
    pub class: Option<CompactString>,
    #[serde(default)]
    pub family: Option<CompactString>,
}

/// A validated fossil record.
#[derive(Debug, Clone, PartialEq)]
pub struct FossilRecord {
    /// Unique occurrence identifier.
    pub occurrence_no: u64,
    /// Common name. Many records share a name.
    pub name: CompactString,
    pub diet: Option<Diet>,
    /// Broad taxonomic category (`sauropod`, `large theropod`, ...).
    pub kind: Option<CompactString>,
    /// Recorded length in meters. Missing for most records.
    pub length_m: Option<f64>,
    /// Older geological age bound, million years.
    pub max_ma: f64,
    /// Younger geological age bound, million years.
    pub min_ma: f64,
    pub region: Option<CompactString>,
    pub lng: f64,
    pub lat: f64,
    pub class: Option<CompactString>,
    pub family: Option<CompactString>,
}

impl FossilRecord {
    /// Span between the age bounds: `max_ma - min_ma`.
    #[inline]
    pub fn age(&self) -> f64 {
        self.max_ma - self.min_ma
    }
}

impl TryFrom<RawRecord> for FossilRecord {
    type Error = FossilError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let diet = match raw.diet.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(label) => Some(label.parse()?),
        };

        Ok(Self {
            occurrence_no: raw.occurrence_no,
            name: raw.name,
            diet,
            kind: raw.kind.filter(|k| !k.trim().is_empty()),
            length_m: raw.length_m.filter(|v| v.is_finite()),
            max_ma: raw.max_ma,
            min_ma: raw.min_ma,
            region: raw.region,
            lng: raw.lng,
            lat: raw.lat,
            class: raw.class,
            family: raw.family,
        })
    }
}

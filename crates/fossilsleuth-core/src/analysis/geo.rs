/// Geographic projection of find sites.
///
/// Uses the Natural Earth projection (Šavrič, Jenny, Patterson, Jenny 2011),
/// a compromise pseudocylindrical projection. Projected coordinates are in
/// radians-scaled units: x spans roughly ±2.73 and y ±1.42.
use crate::model::FossilTable;
use compact_str::CompactString;

/// Project longitude/latitude (degrees) to Natural Earth plane coordinates.
///
/// `y` grows northward.
pub fn natural_earth(lng_deg: f64, lat_deg: f64) -> (f64, f64) {
    let lambda = lng_deg.to_radians();
    let phi = lat_deg.to_radians();
    let phi2 = phi * phi;
    let phi4 = phi2 * phi2;
    let x = lambda
        * (0.8707 - 0.131979 * phi2
            + phi4 * (-0.013791 + phi4 * (0.003971 * phi2 - 0.001529 * phi4)));
    let y = phi
        * (1.007226 + phi2 * (0.015085 + phi4 * (-0.044475 + 0.028874 * phi2 - 0.005916 * phi4)));
    (x, y)
}

/// One record placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub occurrence_no: u64,
    pub name: CompactString,
    pub lng: f64,
    pub lat: f64,
    /// Projected `(x, y)`.
    pub projected: (f64, f64),
    /// Color value. `None` when the length is unrecorded.
    pub length_m: Option<f64>,
}

/// Every record with a valid coordinate, plus the color scale range.
#[derive(Debug, Clone)]
pub struct GeoProjection {
    pub points: Vec<GeoPoint>,
    /// `(min, max)` of the recorded lengths among the projected points.
    pub length_range: Option<(f64, f64)>,
    /// Records dropped for an out-of-range or non-finite coordinate.
    pub skipped: usize,
}

fn valid_coordinate(lng: f64, lat: f64) -> bool {
    lng.is_finite() && lat.is_finite() && (-180.0..=180.0).contains(&lng) && (-90.0..=90.0).contains(&lat)
}

pub fn project_records(table: &FossilTable) -> GeoProjection {
    let mut points = Vec::with_capacity(table.len());
    let mut skipped = 0;

    for rec in table {
        if !valid_coordinate(rec.lng, rec.lat) {
            skipped += 1;
            continue;
        }
        points.push(GeoPoint {
            occurrence_no: rec.occurrence_no,
            name: rec.name.clone(),
            lng: rec.lng,
            lat: rec.lat,
            projected: natural_earth(rec.lng, rec.lat),
            length_m: rec.length_m,
        });
    }

    let length_range = points
        .iter()
        .filter_map(|p| p.length_m)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    GeoProjection {
        points,
        length_range,
        skipped,
    }
}

/// Colour scheme for FossilSleuth charts and the interactive map.
///
/// All colour constants are defined here so the chart code references
/// semantically-named values rather than raw hex codes.
use fossilsleuth_core::model::Diet;
use plotters::style::RGBColor;

/// Carnivorous bars and boxes.
pub const CARNIVOROUS: RGBColor = RGBColor(0xAE, 0x41, 0x5E);
/// Herbivorous bars and boxes.
pub const HERBIVOROUS: RGBColor = RGBColor(0x2D, 0x79, 0x3E);
/// Omnivorous bars and boxes.
pub const OMNIVOROUS: RGBColor = RGBColor(0x2D, 0x42, 0x79);

/// Single-series fill (type counts, density curve).
pub const ACCENT: RGBColor = RGBColor(0x4C, 0x72, 0xB0);
/// Scatter points on the age plot.
pub const POINT: RGBColor = RGBColor(0x00, 0x00, 0x00);
/// Fitted trend line on the age plot.
pub const TREND: RGBColor = RGBColor(0x00, 0x00, 0xFF);
/// Box outlines, whiskers, and medians.
pub const OUTLINE: RGBColor = RGBColor(0x3D, 0x3D, 0x3D);
/// Map markers whose length is unrecorded.
pub const MISSING: RGBColor = RGBColor(0xA0, 0xA0, 0xA8);
/// Ocean fill behind the map graticule.
pub const OCEAN: RGBColor = RGBColor(0xF2, 0xF5, 0xFA);

/// Stops of the continuous length scale (Plasma), low to high.
const PLASMA: [RGBColor; 10] = [
    RGBColor(0x0d, 0x08, 0x87),
    RGBColor(0x46, 0x03, 0x9f),
    RGBColor(0x72, 0x01, 0xa8),
    RGBColor(0x9c, 0x17, 0x9e),
    RGBColor(0xbd, 0x37, 0x86),
    RGBColor(0xd8, 0x57, 0x6b),
    RGBColor(0xed, 0x79, 0x53),
    RGBColor(0xfb, 0x9f, 0x3a),
    RGBColor(0xfd, 0xca, 0x26),
    RGBColor(0xf0, 0xf9, 0x21),
];

/// Fixed colour for each diet.
pub fn diet_color(diet: Diet) -> RGBColor {
    match diet {
        Diet::Carnivorous => CARNIVOROUS,
        Diet::Herbivorous => HERBIVOROUS,
        Diet::Omnivorous => OMNIVOROUS,
    }
}

/// Colour of `value` on the continuous scale spanning `min..=max`.
///
/// Values outside the range are clamped. A degenerate range maps everything
/// to the middle of the scale.
pub fn scale_color(value: f64, min: f64, max: f64) -> RGBColor {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let segments = (PLASMA.len() - 1) as f64;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(PLASMA.len() - 2);
    lerp_color(PLASMA[i], PLASMA[i + 1], pos - i as f64)
}

/// The scale stops as `(offset, colour)` pairs, for gradients in HTML.
pub fn scale_stops() -> impl Iterator<Item = (f64, RGBColor)> {
    let last = (PLASMA.len() - 1) as f64;
    PLASMA
        .iter()
        .enumerate()
        .map(move |(i, &c)| (i as f64 / last, c))
}

/// CSS hex notation, `#rrggbb`.
pub fn hex(color: RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

/// Linear interpolation between two colours.
fn lerp_color(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f64 * (1.0 - t) + y as f64 * t).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_palette_is_fixed() {
        assert_eq!(hex(diet_color(Diet::Carnivorous)), "#ae415e");
        assert_eq!(hex(diet_color(Diet::Herbivorous)), "#2d793e");
        assert_eq!(hex(diet_color(Diet::Omnivorous)), "#2d4279");
    }

    #[test]
    fn scale_endpoints_hit_first_and_last_stop() {
        assert_eq!(scale_color(0.0, 0.0, 10.0), PLASMA[0]);
        assert_eq!(scale_color(10.0, 0.0, 10.0), PLASMA[9]);
    }

    #[test]
    fn scale_clamps_out_of_range() {
        assert_eq!(scale_color(-5.0, 0.0, 10.0), PLASMA[0]);
        assert_eq!(scale_color(50.0, 0.0, 10.0), PLASMA[9]);
    }

    #[test]
    fn degenerate_range_is_mid_scale() {
        let mid = scale_color(3.0, 3.0, 3.0);
        assert_eq!(mid, lerp_color(PLASMA[4], PLASMA[5], 0.5));
    }

    #[test]
    fn lerp_midpoint() {
        let c = lerp_color(RGBColor(0, 0, 0), RGBColor(200, 100, 50), 0.5);
        assert_eq!(c, RGBColor(100, 50, 25));
    }

    #[test]
    fn stops_span_unit_interval() {
        let stops: Vec<(f64, RGBColor)> = scale_stops().collect();
        assert_eq!(stops.len(), 10);
        assert_eq!(stops[0].0, 0.0);
        assert_eq!(stops[9].0, 1.0);
    }
}

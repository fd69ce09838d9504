/// Static PNG charts.
///
/// Each chart module exposes a backend-generic `draw` function and a
/// `render` wrapper that writes a PNG. Figures are sized in inches and
/// rasterised at a fixed [`DPI`], so font sizes are given in points and
/// converted with [`pt`].
pub mod age_trend;
pub mod diet_boxplot;
pub mod diet_count;
pub mod length_distribution;
pub mod type_count;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// Resolution of every static image.
pub const DPI: f64 = 400.0;

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
}

impl Figure {
    /// Square figure used for categorical count plots.
    pub const SQUARE: Figure = Figure {
        width_in: 5.0,
        height_in: 5.0,
    };
    /// Landscape figure used for single-axes plots.
    pub const WIDE: Figure = Figure {
        width_in: 6.4,
        height_in: 4.8,
    };

    /// Pixel size at [`DPI`].
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * DPI).round() as u32,
            (self.height_in * DPI).round() as u32,
        )
    }
}

/// Convert a size in points to pixels at [`DPI`].
#[inline]
pub fn pt(points: f64) -> f64 {
    points * DPI / 72.0
}

/// Same as [`pt`], rounded for APIs that take whole pixels.
#[inline]
pub fn pt_px(points: f64) -> u32 {
    pt(points).round() as u32
}

/// Sans-serif font at the given point size.
pub fn font(points: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, pt(points), FontStyle::Normal)
}

pub const TICK_PT: f64 = 9.0;
pub const AXIS_TITLE_PT: f64 = 11.0;

/// `true` when a sans-serif font can be laid out. The bitmap backend needs
/// one for every axis label, so chart rendering fails without it.
pub fn fonts_available() -> bool {
    font(TICK_PT).box_size("Ag").is_ok()
}

/// X range for `n` categories centred on `0, 1, …, n-1`.
pub fn category_range(n: usize) -> Range<f64> {
    -0.5..(n.max(1) as f64 - 0.5)
}

/// Tick label for position `x` on a category axis: the label at an integer
/// position, empty elsewhere.
pub fn category_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Tick count that guarantees every integer in [`category_range`] gets a tick.
pub fn category_ticks(n: usize) -> usize {
    2 * n.max(1) + 1
}

/// Tick label for a count axis: whole numbers only.
pub fn integer_label(y: f64) -> String {
    if (y - y.round()).abs() < 1e-6 {
        format!("{y:.0}")
    } else {
        String::new()
    }
}

/// Upper bound for a value axis: the data maximum plus 5% headroom.
pub fn headroom(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

/// Rasterise `draw` into a PNG at `path`.
pub fn render_png<F>(path: &Path, figure: Figure, draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let (w, h) = figure.pixels();
    debug!("Rendering {}x{} PNG to {}", w, h, path.display());

    let root = BitMapBackend::new(path, (w, h)).into_drawing_area();
    root.fill(&WHITE)?;
    draw(&root)?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

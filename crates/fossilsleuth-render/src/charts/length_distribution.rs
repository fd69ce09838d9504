/// Kernel density curve of recorded lengths.
use super::{font, headroom, pt, pt_px, render_png, Figure, AXIS_TITLE_PT, TICK_PT};
use crate::theme::ACCENT;
use anyhow::Result;
use fossilsleuth_core::analysis::DensityCurve;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Axis ranges for the curve; unit ranges when there is nothing to plot.
pub fn axis_ranges(curve: Option<&DensityCurve>) -> (Range<f64>, Range<f64>) {
    match curve {
        Some(c) if c.points.len() >= 2 => {
            let x0 = c.points[0].0;
            let x1 = c.points[c.points.len() - 1].0;
            (x0..x1, 0.0..headroom(c.peak()))
        }
        _ => (0.0..1.0, 0.0..1.0),
    }
}

pub fn draw<DB>(root: &DrawingArea<DB, Shift>, curve: Option<&DensityCurve>) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = axis_ranges(curve);

    let mut chart = ChartBuilder::on(root)
        .margin(pt_px(8.0))
        .x_label_area_size(pt_px(32.0))
        .y_label_area_size(pt_px(52.0))
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.3}"))
        .label_style(font(TICK_PT))
        .axis_desc_style(font(AXIS_TITLE_PT))
        .x_desc("Length (in m)")
        .y_desc("Density")
        .draw()?;

    if let Some(curve) = curve {
        let stroke = (pt(1.5).round() as u32).max(1);
        chart.draw_series(LineSeries::new(
            curve.points.iter().copied(),
            ACCENT.stroke_width(stroke),
        ))?;
    }

    Ok(())
}

pub fn render(path: &Path, curve: Option<&DensityCurve>) -> Result<()> {
    render_png(path, Figure::SQUARE, |root| draw(root, curve))
}

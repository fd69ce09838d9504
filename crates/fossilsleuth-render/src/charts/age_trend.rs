/// Scatter of length against age with the least-squares trend line.
use super::{font, pt, pt_px, render_png, Figure, AXIS_TITLE_PT, TICK_PT};
use crate::theme::{POINT, TREND};
use anyhow::Result;
use fossilsleuth_core::analysis::AgeTrend;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Opacity of each scatter point.
const POINT_ALPHA: f64 = 0.5;

/// Fractional padding added on each side of the data extent.
const PAD: f64 = 0.05;

/// `(min, max)` of the x values in the scatter.
fn age_extent(trend: &AgeTrend) -> Option<(f64, f64)> {
    trend.points.iter().map(|p| p.0).fold(None, |acc: Option<(f64, f64)>, x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((f64::min(lo, x), f64::max(hi, x))),
    })
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let span = if hi > lo { hi - lo } else { 1.0 };
    (lo - span * PAD)..(hi + span * PAD)
}

/// The fitted line evaluated at both ends of the age extent.
pub fn trend_segment(trend: &AgeTrend) -> Option<[(f64, f64); 2]> {
    let fit = trend.fit?;
    let (lo, hi) = age_extent(trend)?;
    Some([(lo, fit.predict(lo)), (hi, fit.predict(hi))])
}

/// Axis ranges covering every point and both ends of the trend line.
pub fn axis_ranges(trend: &AgeTrend) -> (Range<f64>, Range<f64>) {
    let Some((x_lo, x_hi)) = age_extent(trend) else {
        return (0.0..1.0, 0.0..1.0);
    };

    let mut y_lo = 0.0_f64;
    let mut y_hi = trend.points.iter().map(|p| p.1).fold(0.0, f64::max);
    if let Some(segment) = trend_segment(trend) {
        for (_, y) in segment {
            y_lo = y_lo.min(y);
            y_hi = y_hi.max(y);
        }
    }

    (padded(x_lo, x_hi), padded(y_lo, y_hi))
}

pub fn draw<DB>(root: &DrawingArea<DB, Shift>, trend: &AgeTrend) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = axis_ranges(trend);

    let mut chart = ChartBuilder::on(root)
        .margin(pt_px(8.0))
        .x_label_area_size(pt_px(32.0))
        .y_label_area_size(pt_px(44.0))
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .label_style(font(TICK_PT))
        .axis_desc_style(font(AXIS_TITLE_PT))
        .x_desc("Age (in million years)")
        .y_desc("Length (in meters)")
        .draw()?;

    let radius = pt(2.5).round() as i32;
    chart.draw_series(
        trend
            .points
            .iter()
            .map(|&p| Circle::new(p, radius, POINT.mix(POINT_ALPHA).filled())),
    )?;

    if let Some(segment) = trend_segment(trend) {
        let stroke = (pt(1.5).round() as u32).max(1);
        chart.draw_series(LineSeries::new(segment, TREND.stroke_width(stroke)))?;
    }

    Ok(())
}

pub fn render(path: &Path, trend: &AgeTrend) -> Result<()> {
    render_png(path, Figure::WIDE, |root| draw(root, trend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fossilsleuth_core::analysis::{AgeColumn, LinearFit};

    fn trend(points: Vec<(f64, f64)>) -> AgeTrend {
        let fit = LinearFit::fit(&points);
        AgeTrend {
            ages: AgeColumn {
                ages: points.iter().map(|p| p.0).collect(),
            },
            points,
            fit,
        }
    }

    #[test]
    fn segment_spans_age_extent() {
        let t = trend(vec![(10.0, 30.0), (20.0, 20.0), (30.0, 10.0)]);
        let [(x0, y0), (x1, y1)] = trend_segment(&t).unwrap();
        assert_eq!((x0, x1), (10.0, 30.0));
        assert!((y0 - 30.0).abs() < 1e-9);
        assert!((y1 - 10.0).abs() < 1e-9);
    }

    /// A line that dips below zero stays inside the y range.
    #[test]
    fn ranges_include_negative_trend_end() {
        let t = trend(vec![(0.0, 10.0), (10.0, 0.5), (20.0, 0.2)]);
        let segment = trend_segment(&t).unwrap();
        let (_, y) = axis_ranges(&t);
        for (_, v) in segment {
            assert!(y.start <= v && v <= y.end, "{v} outside {y:?}");
        }
    }

    #[test]
    fn no_points_gives_unit_axes() {
        let t = trend(Vec::new());
        assert!(trend_segment(&t).is_none());
        let (x, _) = axis_ranges(&t);
        assert_eq!((x.start, x.end), (0.0, 1.0));
    }
}

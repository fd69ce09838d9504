/// Box plot of recorded length per diet.
///
/// Boxes span Q1..Q3 with a median bar; whiskers reach the most extreme
/// observations within 1.5 IQR and everything beyond is drawn as a hollow
/// outlier marker.
use super::{
    category_label, category_range, category_ticks, font, headroom, pt, pt_px, render_png,
    Figure, AXIS_TITLE_PT, TICK_PT,
};
use crate::theme::{diet_color, OUTLINE};
use anyhow::Result;
use fossilsleuth_core::analysis::DietLength;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const BOX_HALF_WIDTH: f64 = 0.4;
const CAP_HALF_WIDTH: f64 = 0.2;

/// Largest value any box element reaches.
pub fn value_max(groups: &[DietLength]) -> f64 {
    groups
        .iter()
        .flat_map(|g| {
            std::iter::once(g.stats.whisker_high).chain(g.stats.outliers.iter().copied())
        })
        .fold(0.0, f64::max)
}

pub fn draw<DB>(root: &DrawingArea<DB, Shift>, groups: &[DietLength]) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let labels: Vec<String> = groups.iter().map(|g| g.diet.label().to_string()).collect();
    let y_min = groups
        .iter()
        .flat_map(|g| std::iter::once(g.stats.whisker_low).chain(g.stats.outliers.iter().copied()))
        .fold(0.0, f64::min);

    let mut chart = ChartBuilder::on(root)
        .margin(pt_px(8.0))
        .x_label_area_size(pt_px(32.0))
        .y_label_area_size(pt_px(44.0))
        .build_cartesian_2d(category_range(groups.len()), y_min..headroom(value_max(groups)))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(category_ticks(groups.len()))
        .x_label_formatter(&|x| category_label(&labels, *x))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .label_style(font(TICK_PT))
        .axis_desc_style(font(AXIS_TITLE_PT))
        .x_desc("Diet")
        .y_desc("Length (in m)")
        .draw()?;

    let stroke = (pt(1.0).round() as u32).max(1);
    let line = OUTLINE.stroke_width(stroke);
    let marker = pt(3.0).round() as i32;

    for (i, group) in groups.iter().enumerate() {
        let x = i as f64;
        let s = &group.stats;
        let (left, right) = (x - BOX_HALF_WIDTH, x + BOX_HALF_WIDTH);

        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, s.q1), (right, s.q3)],
            diet_color(group.diet).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, s.q1), (right, s.q3)],
            line,
        )))?;

        let segments = [
            // Median.
            [(left, s.median), (right, s.median)],
            // Whiskers.
            [(x, s.q1), (x, s.whisker_low)],
            [(x, s.q3), (x, s.whisker_high)],
            // Caps.
            [(x - CAP_HALF_WIDTH, s.whisker_low), (x + CAP_HALF_WIDTH, s.whisker_low)],
            [(x - CAP_HALF_WIDTH, s.whisker_high), (x + CAP_HALF_WIDTH, s.whisker_high)],
        ];
        chart.draw_series(
            segments
                .into_iter()
                .map(|seg| PathElement::new(seg.to_vec(), line)),
        )?;

        chart.draw_series(
            s.outliers
                .iter()
                .map(|&v| Circle::new((x, v), marker, line)),
        )?;
    }

    Ok(())
}

pub fn render(path: &Path, groups: &[DietLength]) -> Result<()> {
    render_png(path, Figure::WIDE, |root| draw(root, groups))
}

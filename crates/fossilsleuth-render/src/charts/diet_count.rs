/// Bar chart of record counts per diet, in the fixed diet palette.
use super::{
    category_label, category_range, category_ticks, font, headroom, integer_label, pt_px,
    render_png, Figure, AXIS_TITLE_PT, TICK_PT,
};
use crate::theme::diet_color;
use anyhow::Result;
use fossilsleuth_core::analysis::DietCounts;
use fossilsleuth_core::model::Diet;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Half the bar width in category units.
const BAR_HALF_WIDTH: f64 = 0.4;

/// Diets that occur at least once, in display order.
pub fn visible_bars(counts: &DietCounts) -> Vec<(Diet, u64)> {
    counts
        .counts
        .iter()
        .copied()
        .filter(|&(_, count)| count > 0)
        .collect()
}

pub fn draw<DB>(root: &DrawingArea<DB, Shift>, counts: &DietCounts) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let bars = visible_bars(counts);
    let labels: Vec<String> = bars.iter().map(|(d, _)| d.label().to_string()).collect();
    let y_max = headroom(bars.iter().map(|&(_, c)| c).max().unwrap_or(0) as f64);

    let mut chart = ChartBuilder::on(root)
        .margin(pt_px(8.0))
        .x_label_area_size(pt_px(32.0))
        .y_label_area_size(pt_px(44.0))
        .build_cartesian_2d(category_range(bars.len()), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(category_ticks(bars.len()))
        .x_label_formatter(&|x| category_label(&labels, *x))
        .y_label_formatter(&|y| integer_label(*y))
        .label_style(font(TICK_PT))
        .axis_desc_style(font(AXIS_TITLE_PT))
        .x_desc("Diet")
        .y_desc("Count")
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, &(diet, count))| {
        let x = i as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, count as f64)],
            diet_color(diet).filled(),
        )
    }))?;

    Ok(())
}

pub fn render(path: &Path, counts: &DietCounts) -> Result<()> {
    render_png(path, Figure::SQUARE, |root| draw(root, counts))
}

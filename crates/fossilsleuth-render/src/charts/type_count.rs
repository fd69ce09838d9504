/// Bar chart of record counts per type, most frequent first, with the
/// category labels rotated to fit long type names.
use super::{
    category_label, category_range, category_ticks, font, headroom, integer_label, pt, pt_px,
    render_png, Figure, AXIS_TITLE_PT, TICK_PT,
};
use crate::theme::ACCENT;
use anyhow::Result;
use fossilsleuth_core::analysis::TypeCount;
use fossilsleuth_core::model::format::capitalize;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontTransform, TextStyle};
use std::path::Path;

const BAR_HALF_WIDTH: f64 = 0.4;

/// Average glyph advance as a fraction of the font size, used to reserve
/// room for the rotated labels before any text is measured.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Space between the axis line and the start of a rotated label, in points.
const LABEL_GAP_PT: f64 = 4.0;

/// Capitalized tick labels in the order given (already descending by count).
pub fn tick_labels(counts: &[TypeCount]) -> Vec<String> {
    counts.iter().map(|c| capitalize(&c.kind)).collect()
}

/// Height in pixels reserved below the axis for the rotated labels.
pub fn label_area_height(labels: &[String]) -> u32 {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    (pt(LABEL_GAP_PT) + pt(TICK_PT) * GLYPH_WIDTH_RATIO * longest as f64 + pt(AXIS_TITLE_PT) * 2.5)
        .round() as u32
}

/// Tick label style: rotated a quarter turn clockwise and anchored at the
/// start of the text, so each label hangs down from its tick.
fn rotated_label_style() -> TextStyle<'static> {
    TextStyle::from(font(TICK_PT))
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Left, VPos::Center))
}

pub fn draw<DB>(root: &DrawingArea<DB, Shift>, counts: &[TypeCount]) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let labels = tick_labels(counts);
    let y_max = headroom(counts.iter().map(|c| c.count).max().unwrap_or(0) as f64);

    let mut chart = ChartBuilder::on(root)
        .margin(pt_px(8.0))
        .x_label_area_size(label_area_height(&labels))
        .y_label_area_size(pt_px(44.0))
        .build_cartesian_2d(category_range(counts.len()), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(category_ticks(counts.len()))
        // The mesh centres rotated labels on the tick, so they are drawn below.
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|y| integer_label(*y))
        .label_style(font(TICK_PT))
        .axis_desc_style(font(AXIS_TITLE_PT))
        .x_desc("Type")
        .y_desc("Count")
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, c)| {
        let x = i as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, c.count as f64)],
            ACCENT.filled(),
        )
    }))?;

    let style = rotated_label_style();
    let (base_x, base_y) = root.get_base_pixel();
    let gap = pt_px(LABEL_GAP_PT) as i32;
    for i in 0..counts.len() {
        let x = i as f64;
        let (px, py) = chart.backend_coord(&(x, 0.0));
        root.draw_text(
            &category_label(&labels, x),
            &style,
            (px - base_x, py - base_y + gap),
        )?;
    }

    Ok(())
}

pub fn render(path: &Path, counts: &[TypeCount]) -> Result<()> {
    render_png(path, Figure::SQUARE, |root| draw(root, counts))
}

/// Report pipeline: load, analyse, print, render.
///
/// Runs every analysis block in order against one loaded table. Each block
/// prints its answer to stdout and writes its artifact into the graphs
/// directory. The first failure aborts the run.
use crate::charts::{age_trend, diet_boxplot, diet_count, length_distribution, type_count};
use crate::map;
use crate::output::{Artifact, OutputLayout};
use anyhow::{Context, Result};
use fossilsleuth_core::analysis::{
    self, DensityCurve, DietCounts, DietLength, LargestSpecimens, MissingLengths,
};
use fossilsleuth_core::config::ConfigPaths;
use fossilsleuth_core::loader::load_table;
use fossilsleuth_core::model::format::{
    capitalize, format_count, format_counted, format_length, format_percent,
};
use fossilsleuth_core::model::{Diet, FossilTable};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// What a run produced, for callers that want more than the console output.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub rows: usize,
    pub distinct_names: usize,
    pub largest: LargestSpecimens,
    pub missing: MissingLengths,
    pub most_common_type: Option<String>,
    /// `None` when no trend line could be fitted.
    pub trend_decreasing: Option<bool>,
    pub artifacts: Vec<PathBuf>,
}

/// Run the whole report for the given paths.
pub fn run(paths: &ConfigPaths) -> Result<ReportSummary> {
    let start = Instant::now();

    let table = load_table(&paths.data_path)
        .with_context(|| format!("failed to load data from {}", paths.data_path.display()))?;
    info!("Loaded {} fossil records", format_count(table.len() as u64));

    let layout = OutputLayout::new(&paths.output_path);
    layout.prepare()?;

    let summary = analyse_and_render(&table, &layout)?;

    info!(
        "Report complete: {} artifacts in {} ({:.2}s)",
        summary.artifacts.len(),
        layout.graphs_dir().display(),
        start.elapsed().as_secs_f64()
    );
    Ok(summary)
}

/// Every block against an already-loaded table.
pub fn analyse_and_render(table: &FossilTable, layout: &OutputLayout) -> Result<ReportSummary> {
    let mut artifacts = Vec::with_capacity(Artifact::ALL.len());
    let mut written = |artifact: Artifact| {
        let path = layout.path(artifact);
        debug!("Wrote {}", path.display());
        artifacts.push(path);
    };

    // Distinct names.
    let distinct_names = analysis::distinct_name_count(table);
    println!("There are {distinct_names} distinct dinosaur names in the data");

    // Diet breakdown.
    let diets = analysis::diet_counts(table);
    print_lines(&diet_lines(&diets));
    diet_count::render(&layout.path(Artifact::DietCount), &diets)
        .context("failed to render diet count chart")?;
    written(Artifact::DietCount);

    // Largest specimen and missing lengths.
    let largest = analysis::largest_specimens(table);
    let missing = analysis::missing_lengths(table);
    print_lines(&largest_lines(&largest, &missing));

    let lengths: Vec<f64> = table.known_lengths().collect();
    let density = DensityCurve::estimate(&lengths, DensityCurve::DEFAULT_GRID);
    if density.is_none() {
        warn!(
            "Not enough distinct lengths for a density curve ({} measured)",
            lengths.len()
        );
    }
    length_distribution::render(&layout.path(Artifact::LengthDistribution), density.as_ref())
        .context("failed to render length distribution")?;
    written(Artifact::LengthDistribution);

    // Most common type.
    let types = analysis::type_counts(table);
    let top_type = analysis::most_common_type(&types);
    match top_type {
        Some(top) => println!(
            "{} is the most common dinosaur type in the data ({})",
            capitalize(&top.kind),
            format_counted(top.count, "record")
        ),
        None => println!("No dinosaur types are recorded in the data"),
    }
    type_count::render(&layout.path(Artifact::TypeCount), &types)
        .context("failed to render type count chart")?;
    written(Artifact::TypeCount);
    let most_common_type = top_type.map(|t| capitalize(&t.kind));

    // Age against length.
    let trend = analysis::age_trend(table);
    let trend_decreasing = trend.fit.map(|_| trend.is_decreasing());
    match trend.fit {
        Some(fit) => println!(
            "Across {}, length {} with age (slope {:+.3} m per million years)",
            format_counted(trend.points.len() as u64, "measured record"),
            if fit.slope < 0.0 { "decreases" } else { "increases" },
            fit.slope
        ),
        None => {
            warn!(
                "No trend line: {} measured records with usable ages",
                trend.points.len()
            );
            println!("Not enough measured records to fit an age trend");
        }
    }
    age_trend::render(&layout.path(Artifact::AgePlot), &trend)
        .context("failed to render age plot")?;
    written(Artifact::AgePlot);

    // Find sites.
    let projection = analysis::project_records(table);
    if projection.skipped > 0 {
        warn!(
            "Skipped {} records with coordinates outside the globe",
            projection.skipped
        );
    }
    println!(
        "Mapped {}",
        format_counted(projection.points.len() as u64, "find site")
    );
    map::render(&layout.path(Artifact::LengthMap), &projection)
        .context("failed to render interactive map")?;
    written(Artifact::LengthMap);

    // Diet against length.
    let groups = analysis::diet_length_summary(table);
    for group in &groups {
        println!("{}", diet_length_line(group));
    }
    diet_boxplot::render(&layout.path(Artifact::DietBoxplot), &groups)
        .context("failed to render diet box plot")?;
    written(Artifact::DietBoxplot);

    Ok(ReportSummary {
        rows: table.len(),
        distinct_names,
        largest,
        missing,
        most_common_type,
        trend_decreasing,
        artifacts,
    })
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Console lines for the diet breakdown.
pub fn diet_lines(diets: &DietCounts) -> Vec<String> {
    let mut lines: Vec<String> = Diet::ALL
        .iter()
        .map(|&diet| {
            format!(
                "{}: {}",
                diet.label(),
                format_counted(diets.get(diet), "record")
            )
        })
        .collect();
    if diets.missing > 0 {
        let verb = if diets.missing == 1 { "has" } else { "have" };
        lines.push(format!(
            "{} {verb} no diet",
            format_counted(diets.missing, "record")
        ));
    }
    lines
}

/// Console lines for the largest specimen and the missing lengths.
///
/// The headline percentage counts unmeasured rows against distinct names;
/// the names-only and rows-only shares follow it.
pub fn largest_lines(largest: &LargestSpecimens, missing: &MissingLengths) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    lines.push(match largest.max_length {
        Some(max) => format!(
            "The largest dinosaur in the data: {} ({})",
            largest.names.join(", "),
            format_length(max)
        ),
        None => "No lengths are recorded in the data".to_string(),
    });
    lines.push(format!(
        "{} without a length across {} ({} of names)",
        format_counted(missing.missing_rows as u64, "record"),
        format_counted(missing.distinct_names as u64, "distinct name"),
        format_percent(missing.percent_rows_of_names())
    ));
    lines.push(format!(
        "{} {} missing a length ({} of names, {} of records)",
        format_counted(missing.missing_names as u64, "dinosaur name"),
        if missing.missing_names == 1 { "is" } else { "are" },
        format_percent(missing.percent_of_names()),
        format_percent(missing.percent_of_rows())
    ));
    lines
}

/// Console line for one diet's length distribution.
pub fn diet_length_line(group: &DietLength) -> String {
    let stats = &group.stats;
    format!(
        "{}: median length {} (IQR {}) over {}, {}",
        group.diet.label(),
        format_length(stats.median),
        format_length(stats.iqr()),
        format_counted(stats.count as u64, "record"),
        format_counted(stats.outliers.len() as u64, "outlier")
    )
}

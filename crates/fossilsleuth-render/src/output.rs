/// Output layout: where each report artifact is written.
///
/// Every artifact lands in `<output>/graphs/` under a fixed file name so
/// repeated runs overwrite the previous report in place.
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// One file produced by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    DietCount,
    LengthDistribution,
    TypeCount,
    AgePlot,
    LengthMap,
    DietBoxplot,
}

impl Artifact {
    /// Every artifact, in report order.
    pub const ALL: [Artifact; 6] = [
        Artifact::DietCount,
        Artifact::LengthDistribution,
        Artifact::TypeCount,
        Artifact::AgePlot,
        Artifact::LengthMap,
        Artifact::DietBoxplot,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::DietCount => "diet_count.png",
            Self::LengthDistribution => "length_distribution.png",
            Self::TypeCount => "type_count.png",
            Self::AgePlot => "age_plot.png",
            Self::LengthMap => "interactive_fossil_length_map.html",
            Self::DietBoxplot => "diet_boxplot.png",
        }
    }
}

/// Resolved graphs directory.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    graphs_dir: PathBuf,
}

impl OutputLayout {
    /// Layout rooted at `output_path`; charts go to `output_path/graphs`.
    pub fn new(output_path: &Path) -> Self {
        Self {
            graphs_dir: output_path.join("graphs"),
        }
    }

    /// Create the graphs directory if it does not exist yet.
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.graphs_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.graphs_dir.display()
            )
        })
    }

    pub fn graphs_dir(&self) -> &Path {
        &self.graphs_dir
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.graphs_dir.join(artifact.file_name())
    }
}

/// Data and output directory resolution, layered with figment.
///
/// Resolution order, later layers overriding earlier ones:
/// 1. built-in defaults (`data`, `output`);
/// 2. `fossilsleuth.json` in the working directory, or the file named by
///    `FOSSILSLEUTH_CONFIG`;
/// 3. `FOSSILSLEUTH_DATA_PATH` / `FOSSILSLEUTH_OUTPUT_PATH`.
///
/// A file named explicitly through `FOSSILSLEUTH_CONFIG` must exist. Empty
/// environment values are treated as unset.
use crate::error::{FossilError, Result};
use figment::providers::{Env, Format, Json, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "fossilsleuth.json";
pub const CONFIG_ENV: &str = "FOSSILSLEUTH_CONFIG";
pub const ENV_PREFIX: &str = "FOSSILSLEUTH_";
pub const DATA_PATH_ENV: &str = "FOSSILSLEUTH_DATA_PATH";
pub const OUTPUT_PATH_ENV: &str = "FOSSILSLEUTH_OUTPUT_PATH";

/// Keys accepted from the environment, after the prefix is stripped.
const PATH_KEYS: [&str; 2] = ["data_path", "output_path"];

/// The two directories the report needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigPaths {
    /// Directory containing `dinosaurs.csv`.
    pub data_path: PathBuf,
    /// Root for generated artifacts; charts go to `<output_path>/graphs`.
    pub output_path: PathBuf,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            output_path: PathBuf::from("output"),
        }
    }
}

/// Value of `key` in the process environment, `None` when unset or empty.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl ConfigPaths {
    /// Resolve paths from the process environment and working directory.
    pub fn resolve() -> Result<Self> {
        let paths: Self = Self::figment()?.extract()?;
        info!(
            "Using data path {} and output path {}",
            paths.data_path.display(),
            paths.output_path.display()
        );
        Ok(paths)
    }

    /// The provider chain behind [`resolve`](Self::resolve).
    pub fn figment() -> Result<Figment> {
        let config_file = match non_empty_var(CONFIG_ENV) {
            Some(named) => {
                let path = PathBuf::from(named);
                if !path.is_file() {
                    return Err(FossilError::MissingConfig { path });
                }
                Some(path)
            }
            None => Some(PathBuf::from(CONFIG_FILE)).filter(|p| p.is_file()),
        };
        Ok(Self::layered(config_file.as_deref()))
    }

    /// Defaults, then `config_file` when given, then the environment.
    pub fn layered(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            debug!("Reading config file {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).filter(|key| {
            let key = key.as_str().to_ascii_lowercase();
            PATH_KEYS.contains(&key.as_str())
                && non_empty_var(&format!("{ENV_PREFIX}{}", key.to_ascii_uppercase())).is_some()
        }))
    }

    /// Directory that receives every chart and the interactive map.
    pub fn graphs_dir(&self) -> PathBuf {
        self.output_path.join("graphs")
    }
}

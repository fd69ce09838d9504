/// Failure taxonomy for loading and configuration.
///
/// Every variant aborts the run; nothing here is retried.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FossilError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unknown diet {value:?} (expected carnivorous, herbivorous or omnivorous)")]
    UnknownDiet { value: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),

    #[error("config file {path} does not exist")]
    MissingConfig { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, FossilError>;

/// Fatal errors — anything that aborts a run.
///
/// Per-file problems (unclassifiable paths, failed copies) are not errors
/// at this level; they are collected into reports and logged.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot walk {}: {source}", .path.display())]
    WalkEntry {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("cannot read skill CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

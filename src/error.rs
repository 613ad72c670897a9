// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Browser error: {0}")]
    Browser(#[from] thirtyfour::error::WebDriverError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("No listings in '{0}'")]
    EmptyDataset(PathBuf),

    #[error("Interrupted before the run finished")]
    Interrupted,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

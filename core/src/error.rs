use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A document source could not be opened or read.
    #[error("failed to read document {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: io::Error,
    },

    /// Lookup of a query title that is not part of the corpus.
    #[error("no document titled {title:?}")]
    TitleNotFound { title: String },

    /// The title list does not line up with the matrix rows.
    #[error("matrix has {rows} rows but {titles} titles were given")]
    ShapeMismatch { rows: usize, titles: usize },
}

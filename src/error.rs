use std::path::PathBuf;

/// Fatal conditions of a ranking run. Finding no matching process is not one of them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read process name from {}: {source}", .path.display())]
    InputMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("process name pattern is empty (source: {source_name})")]
    EmptyPattern { source_name: String },

    #[error("unable to enumerate processes: {0}")]
    Enumeration(String),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

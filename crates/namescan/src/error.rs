use std::path::PathBuf;

use namescan_core::{ConfigError, DocumentError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

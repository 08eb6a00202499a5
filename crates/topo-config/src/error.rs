use std::path::PathBuf;

use thiserror::Error;

pub type ConfResult<T> = Result<T, ConfError>;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("cannot read {kind} config {path:?}: {source}")]
    Read {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {kind} config: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("{kind} config validation failed: {reason}")]
    Validation { kind: &'static str, reason: String },
}

use thiserror::Error;

/// Underlying cause carried by a [`DataError`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type DataResult<T> = Result<T, DataError>;

/// Fatal, document-level failure. Always names the endpoint it came from.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Topology query to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: BoxedCause,
    },
    #[error("Topology query to {endpoint} returned no data")]
    Empty { endpoint: String },
    #[error("Topology query to {endpoint} couldn't be parsed")]
    Unparsable {
        endpoint: String,
        #[source]
        source: BoxedCause,
    },
}

impl DataError {
    pub fn transport(endpoint: &str, source: impl Into<BoxedCause>) -> Self {
        DataError::Transport {
            endpoint: endpoint.to_string(),
            source: source.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            DataError::Transport { endpoint, .. }
            | DataError::Empty { endpoint }
            | DataError::Unparsable { endpoint, .. } => endpoint,
        }
    }
}

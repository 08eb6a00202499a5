//! Byte fetching collaborator.

mod http;

use async_trait::async_trait;

pub use http::HttpFetcher;

/// Any transport-level failure; wrapped into a `DataError` by the caller.
pub type TransportError = topo_core::BoxedCause;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieves the full body at `url`. No retries.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

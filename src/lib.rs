//! topology-cacher: fetch registry XML, cross-reference it, persist JSON lookups.

pub mod facade;
pub mod fetch;
pub mod logging;
pub mod persist;
pub mod topology;
pub mod types;

pub use facade::run::{RunError, RunReport, run};
pub use fetch::{Fetcher, HttpFetcher, TransportError};
pub use persist::{ArtifactWriter, FsWriter};
pub use topology::TopologyData;

pub mod cacher;
pub mod error;
pub mod loader;

pub use cacher::{CacherConfig, LogConf, OutputConf, TopologyConf};
pub use error::{ConfError, ConfResult};
pub use loader::ConfigLoader;

use derive_getters::Getters;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfError, ConfResult};
use crate::loader::ConfigLoader;

pub const DEFAULT_TOPOLOGY: &str = "https://topology.opensciencegrid.org";
pub const DEFAULT_OUTDIR: &str = "/run/topology-cache";

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Getters)]
pub struct TopologyConf {
    #[serde(default = "default_base_url")]
    base_url: String,
    /// HTTP transport timeout; 0 disables it
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for TopologyConf {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Getters)]
pub struct OutputConf {
    #[serde(default = "default_outdir")]
    dir: PathBuf,
    /// 是否同时保存原始 XML（miscproject.xml / rgsummary.xml）
    #[serde(default = "default_true")]
    write_raw_xml: bool,
}

impl Default for OutputConf {
    fn default() -> Self {
        Self {
            dir: default_outdir(),
            write_raw_xml: true,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Getters)]
pub struct LogConf {
    #[serde(default = "default_log_level")]
    level: String,
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConf {
    pub fn level_filter(&self) -> Option<LevelFilter> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LevelFilter::Error),
            "warn" | "warning" => Some(LevelFilter::Warn),
            "info" => Some(LevelFilter::Info),
            "debug" => Some(LevelFilter::Debug),
            "trace" => Some(LevelFilter::Trace),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Default, Getters)]
pub struct CacherConfig {
    #[serde(default)]
    topology: TopologyConf,
    #[serde(default)]
    output: OutputConf,
    #[serde(default)]
    log_conf: LogConf,
}

impl CacherConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.topology.base_url = base_url.into();
        self
    }

    pub fn with_outdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.dir = dir.into();
        self
    }

    pub fn with_raw_xml(mut self, enabled: bool) -> Self {
        self.output.write_raw_xml = enabled;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.topology.timeout_secs = secs;
        self
    }
}

impl ConfigLoader for CacherConfig {
    fn config_type_name() -> &'static str {
        "Cacher"
    }

    fn validate(&self) -> ConfResult<()> {
        let fail = |reason: &str| {
            Err(ConfError::Validation {
                kind: Self::config_type_name(),
                reason: reason.to_string(),
            })
        };
        if self.topology.base_url.trim().is_empty() {
            return fail("topology.base_url must not be empty");
        }
        if self.output.dir.as_os_str().is_empty() {
            return fail("output.dir must not be empty");
        }
        if self.log_conf.level_filter().is_none() {
            return fail("log_conf.level must be one of error|warn|info|debug|trace");
        }
        Ok(())
    }
}

// Default values and helper functions
pub fn default_base_url() -> String {
    DEFAULT_TOPOLOGY.to_string()
}

pub fn default_timeout_secs() -> u64 {
    60
}

pub fn default_outdir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTDIR)
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use topo_conf::{CacherConfig, ConfResult, ConfigLoader};

use crate::logging::verbosity_level;

/// Download resource and project XML data from Topology; use the data to create
/// JSON lookup tables of project resource allocations and resource info.
#[derive(Parser, Debug, Default)]
#[command(name = "topology-cacher", version)]
pub struct CacherArgs {
    /// Say more; can specify twice/输出更多信息，可重复
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Say less; can specify twice/输出更少信息，可重复
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Directory to write topology files to [default: /run/topology-cache]/输出目录
    #[arg(long, value_name = "DIR")]
    pub outdir: Option<PathBuf>,
    /// Base URL of the Topology service [default: https://topology.opensciencegrid.org]/Topology 服务地址
    #[arg(long, value_name = "URL")]
    pub topology: Option<String>,
    /// TOML config file; flags override its values/TOML 配置文件，命令行参数优先
    #[arg(long = "conf", value_name = "FILE")]
    pub conf: Option<PathBuf>,
    /// Print a run summary table/运行结束后打印统计表
    #[arg(long)]
    pub summary: bool,
}

impl CacherArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> ConfResult<CacherConfig> {
        let mut conf = match &self.conf {
            Some(path) => CacherConfig::load_from_path(path)?,
            None => CacherConfig::default(),
        };
        if let Some(dir) = &self.outdir {
            conf = conf.with_outdir(dir);
        }
        if let Some(url) = &self.topology {
            conf = conf.with_base_url(url);
        }
        conf.validate()?;
        Ok(conf)
    }

    /// `-v`/`-q` win over the configured level when either is given.
    pub fn log_level(&self, conf: &CacherConfig) -> LevelFilter {
        if self.verbose == 0 && self.quiet == 0 {
            if let Some(level) = conf.log_conf().level_filter() {
                return level;
            }
        }
        verbosity_level(self.verbose, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn counts_repeated_flags() {
        let args = CacherArgs::try_parse_from(["topology-cacher", "-vv", "-q"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.quiet, 1);
        assert_eq!(args.log_level(&CacherConfig::default()), LevelFilter::Info);
    }

    #[test]
    fn defaults_without_flags() {
        let args = CacherArgs::try_parse_from(["topology-cacher"]).unwrap();
        let conf = args.resolve_config().unwrap();
        assert_eq!(conf, CacherConfig::default());
        assert_eq!(args.log_level(&conf), LevelFilter::Warn);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cacher.toml");
        fs::write(
            &path,
            "[topology]\nbase_url = \"https://from-file.example.org\"\n\n[log_conf]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let args = CacherArgs::try_parse_from([
            "topology-cacher",
            "--conf",
            path.to_str().unwrap(),
            "--outdir",
            "/tmp/topology-out",
        ])
        .unwrap();
        let conf = args.resolve_config().unwrap();
        assert_eq!(conf.topology().base_url(), "https://from-file.example.org");
        assert_eq!(conf.output().dir(), &PathBuf::from("/tmp/topology-out"));
        assert_eq!(args.log_level(&conf), LevelFilter::Debug);

        let quiet = CacherArgs::try_parse_from(["topology-cacher", "-q"]).unwrap();
        assert_eq!(quiet.log_level(&conf), LevelFilter::Error);
    }

    #[test]
    fn topology_flag_sets_base_url() {
        let args =
            CacherArgs::try_parse_from(["topology-cacher", "--topology", "topology-itb.example.org"])
                .unwrap();
        let conf = args.resolve_config().unwrap();
        assert_eq!(conf.topology().base_url(), "topology-itb.example.org");
    }
}

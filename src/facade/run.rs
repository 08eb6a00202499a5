use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use derive_getters::Getters;
use thiserror::Error;
use topo_conf::CacherConfig;
use topo_core::{DataError, Diagnostics, info_ctrl};

use crate::facade::args::CacherArgs;
use crate::facade::summary::print_summary;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::logging::init_logger;
use crate::persist::{
    ArtifactWriter, FsWriter, MISCPROJECT_XML, PROJECT_RESOURCE_ALLOCATIONS_JSON,
    RESOURCE_INFO_LOOKUPS_JSON, RGSUMMARY_XML, ensure_dir, to_sorted_json,
};
use crate::topology::TopologyData;
use crate::types::AnyResult;

/// Exit code used when the output files cannot be written.
pub const WRITE_FAILURE_EXIT: u8 = 2;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Couldn't write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a successful run produced.
#[derive(Debug, Clone, Default, Getters)]
pub struct RunReport {
    projects: usize,
    allocations: usize,
    resource_groups: usize,
    resources: usize,
    diagnostics: Diagnostics,
    written: Vec<PathBuf>,
}

fn write_artifact<W>(
    writer: &W,
    dir: &Path,
    name: &str,
    content: &str,
    written: &mut Vec<PathBuf>,
) -> Result<(), RunError>
where
    W: ArtifactWriter + ?Sized,
{
    let path = dir.join(name);
    writer
        .write(&path, content)
        .map_err(|source| RunError::Write {
            path: path.clone(),
            source,
        })?;
    info_ctrl!("Wrote {}", path.display());
    written.push(path);
    Ok(())
}

/// One fetch → index → join/export → persist pass.
///
/// Both documents are fetched and transformed before anything is written, so
/// a data failure leaves the previous output untouched.
pub async fn run<F, W>(conf: &CacherConfig, fetcher: &F, writer: &W) -> Result<RunReport, RunError>
where
    F: Fetcher + ?Sized,
    W: ArtifactWriter + ?Sized,
{
    let data = TopologyData::load(fetcher, conf.topology().base_url()).await?;
    let (allocations, join_diags) = data.project_resource_allocations()?;
    let lookups = data.resource_info_lookups();

    let json_error = |name: &str, e: serde_json::Error| RunError::Write {
        path: conf.output().dir().join(name),
        source: e.into(),
    };
    let allocations_json = to_sorted_json(&allocations)
        .map_err(|e| json_error(PROJECT_RESOURCE_ALLOCATIONS_JSON, e))?;
    let lookups_json =
        to_sorted_json(&lookups).map_err(|e| json_error(RESOURCE_INFO_LOOKUPS_JSON, e))?;

    let dir = conf.output().dir();
    ensure_dir(dir);
    let mut written = Vec::new();
    if *conf.output().write_raw_xml() {
        for (name, doc) in [
            (MISCPROJECT_XML, data.projects()),
            (RGSUMMARY_XML, data.resources()),
        ] {
            write_artifact(writer, dir, name, doc.root_xml(), &mut written)?;
        }
    }
    for (name, content) in [
        (PROJECT_RESOURCE_ALLOCATIONS_JSON, &allocations_json),
        (RESOURCE_INFO_LOOKUPS_JSON, &lookups_json),
    ] {
        write_artifact(writer, dir, name, content, &mut written)?;
    }

    let mut diagnostics = data.index_diagnostics().clone();
    diagnostics.merge(join_diags);
    Ok(RunReport {
        projects: allocations.len(),
        allocations: allocations.values().map(Vec::len).sum(),
        resource_groups: data.index().group_count(),
        resources: data.index().resource_count(),
        diagnostics,
        written,
    })
}

/// Binary entry: parses the command line and runs against the live registry.
pub async fn launch() -> AnyResult<ExitCode> {
    let args = CacherArgs::parse();
    let conf = args.resolve_config()?;
    init_logger(args.log_level(&conf));

    let fetcher = HttpFetcher::from_conf(conf.topology())?;
    launch_with(&args, &conf, &fetcher, &FsWriter).await
}

/// Data failures propagate as errors, write failures become a printed message
/// and [`WRITE_FAILURE_EXIT`].
pub async fn launch_with(
    args: &CacherArgs,
    conf: &CacherConfig,
    fetcher: &dyn Fetcher,
    writer: &dyn ArtifactWriter,
) -> AnyResult<ExitCode> {
    match run(conf, fetcher, writer).await {
        Ok(report) => {
            if args.summary {
                print_summary(&report);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ RunError::Write { .. }) => {
            eprintln!("{}", err);
            Ok(ExitCode::from(WRITE_FAILURE_EXIT))
        }
        Err(RunError::Data(err)) => Err(err.into()),
    }
}

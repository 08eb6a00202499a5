use std::process::ExitCode;

use topology_cacher::facade::run::launch;
use topology_cacher::types::AnyResult;

#[tokio::main(flavor = "current_thread")]
async fn main() -> AnyResult<ExitCode> {
    launch().await
}

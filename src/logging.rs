use std::io::Write;

use log::LevelFilter;

/// Thresholds reachable through `-v` / `-q`, quietest first.
const VERBOSITY_STEPS: [LevelFilter; 4] = [
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
];
const DEFAULT_STEP: i32 = 1;

/// WARN shifted one step per flag, clamped to `[ERROR, DEBUG]`.
pub fn verbosity_level(verbose: u8, quiet: u8) -> LevelFilter {
    let step = DEFAULT_STEP + i32::from(verbose) - i32::from(quiet);
    let step = step.clamp(0, VERBOSITY_STEPS.len() as i32 - 1);
    VERBOSITY_STEPS[step as usize]
}

/// Installs the process logger; message-only output on stderr.
///
/// Repeated calls are ignored so tests may call it freely.
pub fn init_logger(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}

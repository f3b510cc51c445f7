//! Console entry point: one catering session per invocation.
//!
//! Usage: `catering [STATE_PATH]`. The optional argument overrides
//! `CATERING_STATE_PATH`.

use std::io;
use std::process::ExitCode;

use catering_cli::workflow::{self, SessionOptions};
use catering_cli::ConsoleCollector;
use catering_infra::{AppConfig, JsonFileStateStore};

fn main() -> ExitCode {
    let mut config = AppConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_state_path(path);
    }
    catering_observability::init(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "catering session aborted");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let store = JsonFileStateStore::new(&config.state_path);
    let mut registry = workflow::load_registry(&store, config.reassign_policy);

    let stdin = io::stdin();
    let mut collector = ConsoleCollector::new(stdin.lock(), io::stdout());
    let mut out = io::stdout();

    workflow::run_session(
        &mut registry,
        &mut collector,
        &mut out,
        SessionOptions {
            reassign_prompt: config.reassign_prompt,
        },
    )?;

    workflow::save_registry(&store, &registry, &mut out)?;
    Ok(())
}

use std::{env, fs, io::{self, Write}};

use anyhow::Context;
use chainedin::{
    handlers::operations::{dispatch, parse_script},
    logging::init_tracing,
    settings::AppConfig,
    Registry,
};

fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config).context("failed to initialize logging")?;
    tracing::info!("Loaded configuration: {:?}", config);

    let script_path = env::args()
        .nth(1)
        .or_else(|| config.script_path.clone())
        .context("usage: chainedin <script.json> (or set APP_SCRIPT_PATH)")?;

    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("failed to read operation script {script_path}"))?;
    let requests = parse_script(&script)
        .with_context(|| format!("malformed operation script {script_path}"))?;

    tracing::info!(
        "Replaying {} operations on {} v{}",
        requests.len(),
        config.name,
        env!("CARGO_PKG_VERSION")
    );

    let registry = Registry::from_config(&config);
    tracing::debug!(policy = ?registry.policy(), "Skill verification policy");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for request in requests {
        let outcome = dispatch(&registry, request);
        if !outcome.is_ok() {
            failures += 1;
        }
        writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
    }

    tracing::info!(failures, "Replay finished");
    Ok(())
}

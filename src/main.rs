use anyhow::Context;
use log::{error, info};
use person_import::utils::logging::console::print_import_summary;
use person_import::{ImportConfig, PgPersonStore, run_import};

fn main() {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = ImportConfig::from_env().context("Invalid import configuration")?;

    let mut store =
        PgPersonStore::connect(&config.database).context("Could not reach the destination database")?;
    info!("Connected to database");

    let outcome = run_import(&config, &mut store)
        .with_context(|| format!("Import of {} aborted", config.source_path.display()))?;

    print_import_summary(&outcome);
    Ok(())
}

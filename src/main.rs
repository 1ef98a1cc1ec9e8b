//! Imperium Bootstrap - configuration bootstrap for the Imperium LMS shell
//!
//! Main entry point.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → `<log-dir>/imperium.<date>`
//! 2. Load overrides from `<root>/config/defaultConfigs.yaml` and
//!    `<root>/global/globalConfiguration.yaml`, then `IMPERIUM_*` environment variables
//! 3. Build the default and global configuration records
//! 4. Hand both records and the factory registry to the host
//!
//! The host used here writes the props as a JSON manifest on stdout. Rendering
//! belongs to the external application shell.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use imperium_bootstrap::{APP_NAME, App, ConfigManager, ManifestHost, VERSION};

#[derive(Debug, Parser)]
#[command(name = "imperium-bootstrap", version, about)]
struct Cli {
    /// Project root containing the `config/` and `global/` directories
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Directory for rotating log files
    #[arg(long, default_value = "logs")]
    log_dir: String,

    /// Log at debug level
    #[arg(long)]
    debug: bool,

    /// Mirror log output to stderr
    #[arg(long)]
    console: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = imperium_bootstrap::logging::setup_logging_with_console(
        &cli.log_dir,
        "imperium",
        cli.debug,
        cli.console,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config_manager = ConfigManager::new(&cli.root)?;
    let props = config_manager.build_props()?;

    let stdout = std::io::stdout();
    let mut app = App::new(ManifestHost::new(stdout.lock()));

    app.render(&props).map_err(|e| {
        tracing::error!("Host error: {}", e);
        anyhow::anyhow!("Host error: {}", e)
    })?;

    tracing::info!("Bootstrap complete");
    Ok(())
}

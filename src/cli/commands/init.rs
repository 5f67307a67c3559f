use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty punch sheet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config_path.as_deref());

    info("Initializing rWorkday…");
    let cfg = Config::init_all(&path, cli.test)?;

    if !cli.test {
        success(format!("Config file : {}", path.display()));
    }
    success(format!("Punch sheet : {}", cfg.punch_path().display()));
    info("Add one session per line to the punch sheet, then run `rworkday watch`.");
    Ok(())
}

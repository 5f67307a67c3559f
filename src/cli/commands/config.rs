use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, check};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config_path.as_deref());

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `rworkday init`.",
                    path.display()
                ));
            } else {
                let report = check::check_file(&path)?;
                if report.is_clean() {
                    success("Configuration file is complete");
                }
                for key in &report.missing {
                    warning(format!("Missing field (default used): {key}"));
                }
                for key in &report.unknown {
                    warning(format!("Unknown field (ignored): {key}"));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
                info(format!("Created {}", path.display()));
            }
            let used = ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration file edited successfully using '{used}'"));
        }
    }

    Ok(())
}

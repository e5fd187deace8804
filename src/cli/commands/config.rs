use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            let path = Config::config_file();
            if !path.exists() {
                warning(format!("No configuration file at {}; using defaults.", path.display()));
                return Ok(());
            }
            let content = fs::read_to_string(&path)?;
            let missing = Config::missing_keys(&content)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing key '{key}' (default applied)"));
                }
            }
        }

        if !*print_config && !*check {
            info(format!("Configuration file: {}", Config::config_file().display()));
        }
    }
    Ok(())
}

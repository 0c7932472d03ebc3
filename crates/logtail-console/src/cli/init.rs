/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When ConsoleConfig schema changes
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use logtail_adapter::LogLevel;
use logtail_adapter::http::normalize_base_url;
use logtail_console::ConsoleConfig;
use logtail_console::config::default_config_path;

const LEVELS: [LogLevel; 3] = [LogLevel::Debug, LogLevel::Warning, LogLevel::Critical];

pub fn run_init(output: Option<PathBuf>) -> Result<()> {
    println!("{}", style("Welcome to logtail console setup").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a console configuration.").dim()
    );

    let output = output
        .or_else(default_config_path)
        .ok_or_else(|| anyhow!("no config directory found; pass --output"))?;
    let theme = ColorfulTheme::default();
    let defaults = ConsoleConfig::default();

    println!("\n{}", style("--- Server ---").bold());
    let base_url: String = Input::with_theme(&theme)
        .with_prompt("Server URL")
        .default(defaults.base_url.clone())
        .validate_with(|input: &String| {
            normalize_base_url(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()?;

    println!("\n{}", style("--- Logs ---").bold());
    let level_names: Vec<&str> = LEVELS.iter().map(|level| level.as_str()).collect();
    let log_selection = Select::with_theme(&theme)
        .with_prompt("Level shown in the log table")
        .items(&level_names)
        .default(0)
        .interact()?;
    let clear_selection = Select::with_theme(&theme)
        .with_prompt("Level cleared by 'clear logs'")
        .items(&level_names)
        .default(0)
        .interact()?;

    let poll_interval_secs: u64 = Input::with_theme(&theme)
        .with_prompt("Poll interval (seconds)")
        .default(defaults.poll_interval_secs)
        .validate_with(|secs: &u64| {
            if *secs == 0 {
                Err("must be greater than zero")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let max_rows: usize = Input::with_theme(&theme)
        .with_prompt("Rows kept in the log table")
        .default(defaults.max_rows)
        .interact_text()?;

    let config = ConsoleConfig {
        base_url,
        log_level: LEVELS[log_selection],
        clear_level: LEVELS[clear_selection],
        poll_interval_secs,
        max_rows,
        ..defaults
    };
    config.validate()?;

    let yaml = config.to_yaml().context("failed to serialize config to YAML")?;
    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );

    Ok(())
}

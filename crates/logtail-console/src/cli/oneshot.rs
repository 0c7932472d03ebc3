/*
[INPUT]:  ConsoleClient and one subcommand (exec, history, clear)
[OUTPUT]: Command output printed to stdout; failures as errors
[POS]:    CLI one-shot commands
[UPDATE]: When adding a single-request subcommand
*/

use anyhow::{Result, anyhow};
use console::style;
use tracing::info;

use logtail_adapter::{ClearLogsQuery, ConsoleClient, ConsoleError, LogLevel};
use logtail_console::session::CommandHistory;

fn failure(err: ConsoleError) -> anyhow::Error {
    anyhow!(err.alert_text())
}

pub async fn run_exec(client: &ConsoleClient, cmd: &str) -> Result<()> {
    info!(cmd = %cmd, "executing command");
    let output = client.execute_command(cmd).await.map_err(failure)?;
    println!("{output}");
    Ok(())
}

pub async fn run_history(client: &ConsoleClient) -> Result<()> {
    let records = client.command_list().await.map_err(failure)?;
    let mut history = CommandHistory::default();
    history.replace(records);
    if history.is_empty() {
        println!("{}", style("(no commands)").dim());
        return Ok(());
    }
    for (index, cmd) in history.commands().iter().enumerate() {
        println!("{:>4}  {}", style(index).dim(), cmd);
    }
    Ok(())
}

pub async fn run_clear(client: &ConsoleClient, level: LogLevel) -> Result<()> {
    client
        .clear_logs(&ClearLogsQuery::all(level))
        .await
        .map_err(failure)?;
    println!("{} {} log cleared", style("OK").bold().green(), level);
    Ok(())
}

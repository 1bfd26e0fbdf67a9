//! Line-oriented dashboard shell.
//!
//! # Responsibility
//! - Read commands from stdin and print store results.
//! - Start file logging when `DASHBOARD_LOG_DIR` is set.
//!
//! Environment:
//! - `DASHBOARD_LOG_DIR`: absolute directory for rolling logs (unset = no logs).
//! - `DASHBOARD_LOG_LEVEL`: trace|debug|info|warn|error.

mod app;
mod command;

use app::Dashboard;
use command::parse_line;
use dashboard_core::{core_version, default_log_level, init_logging};
use log::info;
use std::io::{self, BufRead, Write};

const LOG_DIR_ENV: &str = "DASHBOARD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "DASHBOARD_LOG_LEVEL";

fn main() -> io::Result<()> {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    info!("event=cli_start module=cli status=ok");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "dashboard {} (type `help`)", core_version())?;

    let mut dashboard = Dashboard::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        let outcome = dashboard.execute(command);
        for output in &outcome.lines {
            writeln!(stdout, "{output}")?;
        }
        if outcome.quit {
            break;
        }
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

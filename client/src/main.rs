//! Interactive terminal client.
//!
//! Renders the user list and drives the three API operations from simple
//! line commands. Logging goes to stderr so it never interleaves with the
//! rendered list.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use client::api::{HttpUsersApi, DEFAULT_BASE_URL};
use client::App;

enum Command<'a> {
    List,
    Add(&'a str),
    Delete(i32),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed == "list" {
        return Command::List;
    }
    if trimmed == "quit" || trimmed == "exit" {
        return Command::Quit;
    }
    if let Some(name) = trimmed.strip_prefix("add ") {
        return Command::Add(name);
    }
    if trimmed == "add" {
        // Empty form submission; handled by the trim check downstream.
        return Command::Add("");
    }
    if let Some(raw_id) = trimmed.strip_prefix("del ") {
        if let Ok(id) = raw_id.trim().parse() {
            return Command::Delete(id);
        }
    }
    Command::Unknown
}

fn render(app: &App) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "== User Management ==");
    if app.users().is_empty() {
        let _ = writeln!(out, "(no users)");
    }
    for user in app.users() {
        let _ = writeln!(out, "{:>4}  {}", user.id, user.name);
    }
    let _ = writeln!(out, "commands: list | add <name> | del <id> | quit");
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let api = HttpUsersApi::new(DEFAULT_BASE_URL);
    let mut app = App::new();

    // Initial render mirrors a page mount: fetch, then show.
    app.refresh(&api).await;
    render(&app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::List => app.refresh(&api).await,
            Command::Add(name) => {
                app.set_name_input(name);
                app.submit(&api).await;
            }
            Command::Delete(id) => app.delete(&api, id).await,
            Command::Quit => break,
            Command::Unknown => {}
        }
        render(&app);
    }

    Ok(())
}

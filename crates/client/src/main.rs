//! Roster - terminal client for the employee record API.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use roster_client::api::EmployeeApi;
use roster_client::app::{App, Command};
use roster_client::ui;

const TICK: Duration = Duration::from_millis(100);

/// Terminal client for the employee record API.
#[derive(Parser)]
#[command(name = "roster", version)]
struct Cli {
    /// Base URL of the API, including the `/api` prefix
    #[arg(long, env = "ROSTER_API_URL", default_value = "http://localhost:3000/api")]
    api_url: String,

    /// Directory for the client log file
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs go to a file.
    let _log_guard = init_logging(&cli.log_dir);
    tracing::info!(api_url = %cli.api_url, "Roster client starting");

    let api = EmployeeApi::new(&cli.api_url)?;

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &api).await;
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "Client exited with error");
    }
    result
}

fn init_logging(dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::daily(dir, "roster.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("roster_client=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    guard
}

async fn run(terminal: &mut DefaultTerminal, api: &EmployeeApi) -> anyhow::Result<()> {
    let mut app = App::default();
    perform(terminal, &mut app, api, Command::Refresh).await?;

    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            Some(Command::Quit) => return Ok(()),
            Some(command) => perform(terminal, &mut app, api, command).await?,
            None => {}
        }
    }
}

/// Run one command with the loading indicator up. Keys pressed while the
/// request was in flight are discarded.
async fn perform(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    api: &EmployeeApi,
    command: Command,
) -> anyhow::Result<()> {
    app.loading = true;
    terminal.draw(|f| ui::draw(f, app))?;

    app.execute(api, command).await;
    app.loading = false;

    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}

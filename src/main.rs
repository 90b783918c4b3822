// ABOUTME: Main entry point for the Gemini Chat TUI application

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{
    io,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tracing::{info, warn};

use gemini_chat::app::{App, EventHandler};
use gemini_chat::components::LayoutComponent;
use gemini_chat::config::AppConfig;
use gemini_chat::models::ModelId;

#[derive(Debug, Parser)]
#[command(name = "gemini-chat", version, about = "Password-protected terminal chat for Google Gemini")]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model preselected in the settings panel
    #[arg(long)]
    model: Option<ModelId>,

    /// Override the Gemini API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    }
    .with_overrides(cli.model, cli.base_url);

    setup_logging(&config.log_dir())?;
    setup_panic_handler();

    info!(
        "Starting gemini-chat (model {}, endpoint {})",
        config.default_model, config.api_base_url
    );
    warn!("Login uses a fixed plain-text password with no lockout or hashing");

    let mut app = App::new(&config);
    let mut layout = LayoutComponent::new();

    run_tui(&mut app, &mut layout).await?;

    Ok(())
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    enable_raw_mode().context("Terminal not compatible")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        draw(&mut terminal, layout, app)?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == event::KeyEventKind::Press {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate || app.state.pending_async_action.is_some() {
            app.tick().await;
            last_tick = Instant::now();

            // Redraw right away so a "Thinking..." state is visible before the next request blocks
            if app.needs_ui_refresh() {
                draw(&mut terminal, layout, app)?;
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    layout: &mut LayoutComponent,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|frame| {
        layout.render(frame, &app.state);
    })?;
    app.state
        .set_transcript_max_scroll(layout.transcript_max_scroll());
    Ok(())
}

fn setup_logging(log_dir: &Path) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "gemini-chat-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_chat=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}

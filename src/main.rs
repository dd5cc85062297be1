use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use vitrine::app::config::{AppConfig, ConfigLoad};
use vitrine::app::{cli::Args, events::AppEvent, inputs, App};
use vitrine::{logging, ui};

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    // Leave the alternate screen before the panic report prints
    let report_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        report_hook(info);
    }));

    let args = Args::parse();

    if args.generate_config {
        println!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config_path = args.config.clone().unwrap_or_else(AppConfig::get_config_path);
    let ConfigLoad {
        config: mut config,
        created: config_created,
        error: config_err,
    } = AppConfig::load_or_default(&config_path);
    if let Some(view) = args.view {
        config.ui.start_view = view;
    }

    // 0. Logging 📝
    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(AppConfig::default_log_path);
    let _log_guard = logging::init_global(&log_path, &config.logging.level)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    if config_created {
        tracing::info!(path = %config_path.display(), "wrote default config");
    }
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "falling back to default config");
    }
    tracing::info!(
        config = %config_path.display(),
        view = ?config.ui.start_view,
        "starting vitrine"
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Animation Tick Task ⚡
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    let run = async {
        loop {
            terminal.draw(|f| ui::ui(f, &mut app))?;

            match rx.recv().await {
                Some(AppEvent::Input(event)) => inputs::handle_event(event, &mut app),
                Some(AppEvent::Tick) => app.on_tick(),
                None => break,
            }

            if !app.is_running {
                break;
            }
        }
        Ok::<_, io::Error>(())
    };
    let result = run.await;

    restore_terminal();
    terminal.show_cursor()?;
    result.context("terminal draw failed")?;

    tracing::info!("exiting");
    if args.dump_state {
        let state = serde_json::to_string_pretty(&app.snapshot())?;
        println!("{}", state);
    }

    Ok(())
}

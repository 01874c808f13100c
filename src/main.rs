use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use urdash::channel::DashboardChannel;
use urdash::cli::{Cli, init_config};
use urdash::config::Config;
use urdash::event_handler::EventHandler;
use urdash::transcript::Transcript;
use urdash::ui::{self, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle --init flag
    if cli.init {
        return init_config(&cli.config);
    }

    // Load config, then apply CLI overrides
    let mut config = Config::load(&cli.config)?;
    config.config_path = Some(PathBuf::from(&cli.config));
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    config.validate()?;

    let mut channel = DashboardChannel::new();
    let mut transcript = Transcript::new(config.transcript.max_entries);
    let mut app = App::new();
    app.host_input = config.host.clone();

    // Dial before the terminal takes over; failures land in the transcript
    // and status line like an interactive attempt
    if cli.connect {
        let mut handler = EventHandler::new(&mut app, &mut channel, &mut transcript, &config);
        handler.connect().await?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // TUI event loop
    let result = run_app(&mut terminal, &mut app, &mut channel, &mut transcript, &config).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    // Release the connection before exiting
    channel.close();

    // Return result
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    channel: &mut DashboardChannel,
    transcript: &mut Transcript,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| {
            ui::draw(f, app, transcript, channel, config);
        })?;

        if app.should_quit {
            break;
        }

        // Handle input with short timeout
        // Note: In raw mode, Ctrl+C is captured as a keyboard event, not a signal,
        // so we handle it in the event handler instead of using tokio::signal::ctrl_c()
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(50)) => {
                // Check for keyboard input
                if event::poll(Duration::from_millis(0))? {
                    if let Event::Key(key) = event::read()? {
                        let mut event_handler =
                            EventHandler::new(app, channel, transcript, config);
                        if event_handler.handle_key_event(key).await? {
                            app.quit();
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

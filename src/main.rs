//! Terminal portfolio: a single scrollable page with a contact form
//! that hands submissions to the system mail client.

mod app;
mod config;
mod content;
mod keymap;
mod mail;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Poll interval while an animation is in flight
const FAST_TICK: Duration = Duration::from_millis(16);
/// Poll interval when the screen is static
const IDLE_TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the TUI on stdout
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_tui=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let app = App::new((size.width, size.height));
    let result = match app {
        Ok(mut app) => run_app(&mut terminal, &mut app),
        Err(e) => Err(e),
    };

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.tick((size.width, size.height));

        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = if app.is_animating() {
            FAST_TICK
        } else {
            IDLE_TICK
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Ctrl+C always quits, whatever has focus
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                // Resize is picked up on the next tick
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

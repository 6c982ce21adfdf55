// mathdrill: timed arithmetic drills in the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use mathdrill::config::{self, Args};
use mathdrill::drill::{RandSource, SessionController, SystemClock};
use mathdrill::error::AppError;
use mathdrill::ui::{App, Screen};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if let Err(e) = config::init_logging(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let source = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded question sequence");
            RandSource::seeded(seed)
        }
        None => RandSource::new(),
    };

    let drill_config = match args.drill_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let session = SessionController::new(Screen::new(), SystemClock::new(), source, drill_config);
    let mut app = App::new(session);
    if let Some(mode) = args.mode {
        app.select_operation(mode);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "terminal loop failed");
        return Err(err.into());
    }

    Ok(())
}

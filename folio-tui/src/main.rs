//! Folio - a single-page personal portfolio for the terminal
//!
//! Seven stacked sections under a sticky nav bar, a starry background,
//! scroll-aware navigation and an in-session "add project" dialog.

mod app;
mod catalog;
mod config;
mod cursor;
mod page;
mod particles;
mod profile;
mod sections;
mod terminal;
mod theme;
mod ui;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use app::App;
use config::Args;
use profile::Profile;
use terminal::{TerminalSession, Tui};

/// Frame rate for animations (approximately 30 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_profile {
        let toml = Profile::builtin()
            .to_toml()
            .context("Failed to serialize built-in profile")?;
        print!("{toml}");
        return Ok(());
    }

    color_eyre::install().ok();
    terminal::install_panic_hook();

    if let Some(path) = &args.log_file {
        config::init_logging(path)?;
    }

    let profile = Profile::resolve(args.profile.as_deref()).context("Failed to load profile")?;
    tracing::info!(name = %profile.name, projects = profile.projects.len(), "profile loaded");

    let mut app = App::new(profile, args.app_options());

    let mut session = TerminalSession::enter()?;
    let result = run_event_loop(session.terminal_mut(), &mut app);
    drop(session);

    tracing::info!(projects = app.catalog.len(), "exiting");
    result
}

/// Run the main event loop
fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        // Advance smooth scroll and particles
        app.tick();

        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle input events with timeout for animation
        if event::poll(FRAME_DURATION)? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

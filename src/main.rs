//! mgv entry point and event loop.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;

use mgv::config::{load_config_with_precedence, ResolvedConfig};
use mgv::model::AppError;
use mgv::state::{handle_key_action, AppState, KeyAction};
use mgv::timer::DeadlineQueue;
use mgv::view::styles::{ColorConfig, Palette};

/// Idle poll interval when no timer is pending.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Browse a manga/manhwa/anime catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "mgv")]
#[command(version)]
#[command(about = "TUI browser for a static manga/manhwa/anime catalog")]
pub struct Args {
    /// Path to the catalog JSON file
    pub catalog: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cards per carousel page
    #[arg(long)]
    pub carousel_page_size: Option<usize>,

    /// Results per search page
    #[arg(long)]
    pub search_page_size: Option<usize>,

    /// Path to the tracing log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → config file → env → CLI args.
    let mut config = ResolvedConfig::default();
    if let Some(file) = load_config_with_precedence(args.config.clone())? {
        config = config.merge_file(file);
    }
    config = config.apply_env();
    if let Some(size) = args.carousel_page_size {
        config.carousel_page_size = size;
    }
    if let Some(size) = args.search_page_size {
        config.search_page_size = size;
    }
    if let Some(path) = args.log_file.clone() {
        config.log_file = path;
    }

    mgv::logging::init(&config.log_file)?;
    info!(catalog = %args.catalog.display(), "starting mgv");

    let catalog = mgv::data::load_catalog(&args.catalog)?;
    let mut app = AppState::new(
        catalog,
        &config.genres,
        config.browse_settings(),
        &mut rand::rng(),
    );
    let palette = Palette::new(ColorConfig::from_env_and_args(args.no_color));

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app, &palette);
    ratatui::restore();
    info!("mgv exited");
    result
}

/// Event loop: poll input bounded by the next timer deadline, drain
/// expired timers, redraw.
fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut AppState,
    palette: &Palette,
) -> Result<(), AppError> {
    let mut timers = DeadlineQueue::new();

    while !app.should_quit() {
        terminal.draw(|frame| mgv::view::render(frame, app, palette))?;

        let timeout = timers
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_TICK);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = KeyAction::from_key_event(key, app.search().is_active())
                    {
                        handle_key_action(app, action, &mut timers);
                    }
                }
                Event::Resize(..) => {}
                _ => {}
            }
        }

        for token in timers.pop_expired(Instant::now()) {
            app.timer_fired(token, &mut timers);
        }
    }

    // Cancel in-flight transitions so nothing fires against torn-down state.
    app.teardown(&mut timers);
    Ok(())
}

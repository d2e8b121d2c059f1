use std::env;
use std::io::Stdout;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use playdeck::audio::{RodioOutput, TagProbe};
use playdeck::library::PlaylistManager;
use playdeck::player::Deck;

use crate::app::App;
use crate::mpris::ControlCmd;

mod event_loop;
mod logging;
mod mpris_sync;
mod picker;
mod settings;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;
pub type LiveDeck = Deck<RodioOutput, TagProbe>;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();
    logging::init(&settings.logging);

    let mut app = App::new();
    if let Some(msg) = config_problem {
        warn!("{msg}");
        app.set_status(msg);
    }

    let dir = settings.startup_dir(env::args().nth(1));
    let output = RodioOutput::open_default()?;
    let playlist = PlaylistManager::from_settings(&settings.library);
    let mut deck = Deck::new(output, TagProbe, playlist, &settings);

    match deck.load(&dir) {
        Ok(n) => app.set_status(format!("{n} tracks in {}", dir.display())),
        Err(e) => {
            warn!("{e}");
            app.set_status(format!("{e} (press o to open a folder)"));
        }
    }

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);
    mpris_sync::update_mpris(&mpris, &deck);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut deck,
        &mpris,
        &control_rx,
    );

    deck.stop();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("bye");

    run_result
}

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::{info, warn};

use playdeck::config;
use playdeck::library::PickOutcome;
use playdeck::player::Command;

use crate::app::App;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::runtime::mpris_sync::{MprisSnapshot, update_mpris};
use crate::runtime::picker::TerminalPicker;
use crate::runtime::{LiveDeck, Tui};
use crate::ui;

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Deck(Command),
    CursorDown,
    CursorUp,
    /// Play the row under the cursor.
    PlayCursor,
    OpenFolder,
    ToggleFollow,
}

/// Keymap. Everything that touches playback goes through a [`Command`].
pub fn action_for(key: KeyEvent, settings: &config::Settings) -> Option<Action> {
    let scrub = settings.controls.scrub_seconds as f64;
    let step = settings.audio.volume_step;

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::Deck(Command::PlayPause),
        KeyCode::Char('s') => Action::Deck(Command::Stop),
        KeyCode::Char('l') => Action::Deck(Command::Next),
        KeyCode::Char('h') => Action::Deck(Command::Prev),
        KeyCode::Char('L') => Action::Deck(Command::SeekBy(scrub)),
        KeyCode::Char('H') => Action::Deck(Command::SeekBy(-scrub)),
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Deck(Command::NudgeVolume(step)),
        KeyCode::Char('-') => Action::Deck(Command::NudgeVolume(-step)),
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Enter => Action::PlayCursor,
        KeyCode::Char('o') => Action::OpenFolder,
        KeyCode::Char('f') => Action::ToggleFollow,
        _ => return None,
    };
    Some(action)
}

/// Main terminal event loop: handles input, drawing and MPRIS requests.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Tui,
    settings: &config::Settings,
    app: &mut App,
    deck: &mut LiveDeck,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);
    let mut last_mpris = MprisSnapshot::of(deck);

    loop {
        // The one write a tick performs; drawing below only reads.
        if let Err(e) = deck.advance_if_finished() {
            warn!("{e}");
            app.set_status(e.to_string());
        }

        app.clamp(deck.tracks().len());
        if deck.current_track().is_some() {
            app.follow(deck.current_index());
        }

        let snapshot = MprisSnapshot::of(deck);
        if snapshot != last_mpris {
            update_mpris(mpris, deck);
            last_mpris = snapshot;
        }

        terminal.draw(|f| ui::draw(f, app, deck, settings))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if cmd == ControlCmd::Quit {
                info!("quit requested over MPRIS");
                return Ok(());
            }
            if let Some(c) = cmd.to_command(deck.state()) {
                app.follow_playback_on();
                execute(app, deck, c);
            }
        }

        if !event::poll(tick)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match action_for(key, settings) {
            Some(Action::Quit) => return Ok(()),
            Some(Action::Deck(c)) => execute(app, deck, c),
            Some(Action::CursorDown) => {
                app.follow_playback_off();
                app.next(deck.tracks().len());
            }
            Some(Action::CursorUp) => {
                app.follow_playback_off();
                app.prev(deck.tracks().len());
            }
            Some(Action::PlayCursor) => {
                let index = app.selected;
                app.follow_playback_on();
                execute(app, deck, Command::PlaySelected(index));
            }
            Some(Action::OpenFolder) => {
                open_folder(terminal, app, deck);
                terminal.clear()?;
            }
            Some(Action::ToggleFollow) => {
                if app.follow_playback {
                    app.follow_playback_off();
                } else {
                    app.follow_playback_on();
                }
            }
            None => {}
        }
    }
}

fn execute(app: &mut App, deck: &mut LiveDeck, cmd: Command) {
    match deck.dispatch(cmd) {
        Ok(()) => app.clear_status(),
        Err(e) => {
            warn!("{e}");
            app.set_status(e.to_string());
        }
    }
}

fn open_folder(terminal: &mut Tui, app: &mut App, deck: &mut LiveDeck) {
    let mut picker = TerminalPicker::new(terminal);
    match deck.pick_via_dialog(&mut picker) {
        Ok(PickOutcome::Loaded(n)) => {
            app.selected = 0;
            app.follow_playback_on();
            let dir = deck
                .directory()
                .map(|d| d.display().to_string())
                .unwrap_or_default();
            app.set_status(format!("{n} tracks in {dir}"));
        }
        Ok(PickOutcome::Cancelled) => {}
        Err(e) => {
            warn!("{e}");
            app.set_status(e.to_string());
        }
    }
}

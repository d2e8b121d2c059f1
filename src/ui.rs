//! UI rendering helpers for the terminal user interface.
//!
//! Drawing only reads from the `Deck`; nothing here changes playback.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use playdeck::config::Settings;
use playdeck::player::{TransportState, format_time, format_time_precise};

use crate::app::{App, FolderPrompt};
use crate::runtime::LiveDeck;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("enter", "play selected song"),
    ("space/p", "play/pause"),
    ("s", "stop"),
    ("h/l", "prev/next song"),
    ("+/-", "volume"),
    ("o", "open folder"),
    ("f", "follow"),
    ("q", "quit"),
];

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let mut parts: Vec<String> = CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect();
    parts.insert(5, format!("[H/L] scrub -/+{scrub_seconds}s"));
    parts.join(" | ")
}

fn state_text(state: TransportState) -> &'static str {
    match state {
        TransportState::Idle => "Idle",
        TransportState::Loaded => "Loading",
        TransportState::Playing => "Playing",
        TransportState::Paused => "Paused",
        TransportState::Stopped => "Stopped",
    }
}

/// `elapsed / total`; an unknown total shows as `--:--`.
fn time_text(elapsed: Duration, total: Duration, tenths: bool) -> String {
    let elapsed = if tenths {
        format_time_precise(elapsed)
    } else {
        format_time(elapsed)
    };
    let total = if total.is_zero() {
        "--:--".to_string()
    } else {
        format_time(total)
    };
    format!("{elapsed} / {total}")
}

fn progress_ratio(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Start/end of the visible window that keeps `selected` centered when possible.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, deck: &LiveDeck, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(settings.ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" playdeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts = vec![
            format!(" {}", state_text(deck.state())),
            format!("Song: {}", deck.now_playing()),
            format!("VOL: {:.0}%", deck.volume_percent()),
        ];
        if app.follow_playback {
            parts.push("CURSOR: Follow".to_string());
        } else {
            parts.push("CURSOR: Free-roam".to_string());
        }
        if let Some(dir) = deck.directory() {
            parts.push(format!("Dir: {}", dir.display()));
        }

        let mut text = parts.join(" • ");
        if let Some(msg) = &app.status {
            text.push('\n');
            text.push_str(msg);
        }
        text
    };
    let status_par = Paragraph::new(status)
        .block(Block::bordered().padding(left_pad()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Progress
    let elapsed = deck.get_position();
    let total = deck.get_duration();
    let gauge = Gauge::default()
        .block(Block::bordered().title(" progress "))
        .ratio(progress_ratio(elapsed, total))
        .label(time_text(elapsed, total, settings.ui.show_tenths))
        .bold();
    frame.render_widget(gauge, chunks[2]);

    // Track list
    {
        let tracks = deck.tracks();
        let playing = deck.current_track().map(|_| deck.current_index());
        let (start, end) = visible_window(tracks.len(), chunks[3].height as usize, app.selected);

        let items: Vec<ListItem> = tracks[start..end]
            .iter()
            .enumerate()
            .map(|(offset, t)| {
                let i = start + offset;
                if playing == Some(i) {
                    ListItem::new(format!("♪ {}", t.display)).bold()
                } else {
                    ListItem::new(format!("  {}", t.display))
                }
            })
            .collect();

        let title = format!(" tracks ({}) ", tracks.len());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !tracks.is_empty() {
            state.select(Some(app.selected.saturating_sub(start)));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    let footer = Paragraph::new(controls_text(settings.controls.scrub_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

/// Render the "open folder" prompt as a centered popup.
pub fn draw_prompt(frame: &mut Frame, prompt: &FolderPrompt) {
    let area = centered_rect_sized(72, 5, frame.area());
    frame.render_widget(Clear, area);

    let body = format!("{}█\n[enter] open | [esc] cancel | [ctrl-u] clear", prompt.input);
    let popup = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" open folder ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(popup, area);
}

//! Folder prompt drawn over the terminal, standing in for a file dialog.

use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use playdeck::library::DirectoryPicker;

use crate::app::FolderPrompt;
use crate::ui;

use super::Tui;

#[derive(Debug, PartialEq)]
pub enum PromptStep {
    Editing,
    Accept(PathBuf),
    Cancel,
}

/// Apply one key press to the prompt.
pub fn apply_key(prompt: &mut FolderPrompt, key: KeyEvent) -> PromptStep {
    match key.code {
        KeyCode::Esc => PromptStep::Cancel,
        KeyCode::Enter => match prompt.path() {
            Some(p) => PromptStep::Accept(p),
            None => PromptStep::Editing,
        },
        KeyCode::Backspace => {
            prompt.pop();
            PromptStep::Editing
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            prompt.clear();
            PromptStep::Editing
        }
        KeyCode::Char(c) if !c.is_control() => {
            prompt.push(c);
            PromptStep::Editing
        }
        _ => PromptStep::Editing,
    }
}

pub struct TerminalPicker<'a> {
    terminal: &'a mut Tui,
}

impl<'a> TerminalPicker<'a> {
    pub fn new(terminal: &'a mut Tui) -> Self {
        Self { terminal }
    }
}

impl DirectoryPicker for TerminalPicker<'_> {
    fn choose(&mut self, initial_dir: &Path) -> Option<PathBuf> {
        let mut prompt = FolderPrompt::new(initial_dir.display().to_string());

        loop {
            if let Err(e) = self.terminal.draw(|f| ui::draw_prompt(f, &prompt)) {
                warn!("folder prompt draw failed: {e}");
                return None;
            }

            let ev = match event::read() {
                Ok(ev) => ev,
                Err(e) => {
                    warn!("folder prompt input failed: {e}");
                    return None;
                }
            };

            let Event::Key(key) = ev else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match apply_key(&mut prompt, key) {
                PromptStep::Editing => {}
                PromptStep::Accept(p) => return Some(p),
                PromptStep::Cancel => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_then_enter_accepts() {
        let mut prompt = FolderPrompt::new("/mu");
        assert_eq!(apply_key(&mut prompt, press(KeyCode::Char('s'))), PromptStep::Editing);
        assert_eq!(apply_key(&mut prompt, press(KeyCode::Backspace)), PromptStep::Editing);
        for c in "sic".chars() {
            apply_key(&mut prompt, press(KeyCode::Char(c)));
        }
        assert_eq!(
            apply_key(&mut prompt, press(KeyCode::Enter)),
            PromptStep::Accept(PathBuf::from("/music"))
        );
    }

    #[test]
    fn escape_cancels() {
        let mut prompt = FolderPrompt::new("/music");
        assert_eq!(apply_key(&mut prompt, press(KeyCode::Esc)), PromptStep::Cancel);
    }

    #[test]
    fn enter_on_blank_input_keeps_editing() {
        let mut prompt = FolderPrompt::new("/music");
        apply_key(
            &mut prompt,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(prompt.input, "");
        assert_eq!(apply_key(&mut prompt, press(KeyCode::Enter)), PromptStep::Editing);
    }
}

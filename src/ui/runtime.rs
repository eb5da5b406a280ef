//! Blocking event loop.

use log::{debug, info};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use super::{render, ImagePane};
use crate::app::{apply, perform, update, AppState, Msg};
use crate::config::FinderConfig;
use crate::{FinderError, RecipeSource};

/// Translate a key press into an application message.
pub fn key_to_msg(key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Char('f') => Some(Msg::Search),
            KeyCode::Char('r') => Some(Msg::Random),
            KeyCode::Char('s') => Some(Msg::Save),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Msg::Char(c)),
        KeyCode::Backspace => Some(Msg::Backspace),
        KeyCode::Enter => Some(Msg::Enter),
        KeyCode::Tab | KeyCode::BackTab => Some(Msg::Tab),
        KeyCode::Up => Some(Msg::Up),
        KeyCode::Down => Some(Msg::Down),
        KeyCode::Esc => Some(Msg::Escape),
        _ => None,
    }
}

/// Take over the terminal and run until the user quits.
pub fn run<S: RecipeSource + ?Sized>(source: &S, config: &FinderConfig) -> Result<(), FinderError> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, source, config);
    ratatui::restore();
    result
}

fn event_loop<S: RecipeSource + ?Sized>(
    terminal: &mut DefaultTerminal,
    source: &S,
    config: &FinderConfig,
) -> Result<(), FinderError> {
    let mut state = AppState::new(config.default_export_name(), config.export_extension.clone());
    let mut images = ImagePane::new();
    info!("Recipe Finder started against {}", config.base_url);

    while !state.should_quit {
        terminal.draw(|frame| render(frame, &state, &mut images))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(msg) = key_to_msg(key) else {
            continue;
        };

        let effect = update(&mut state, msg);
        if effect.is_remote() {
            debug!("Performing {:?}", effect);
            // Requests block this thread, show the busy status first
            terminal.draw(|frame| render(frame, &state, &mut images))?;
        }
        if let Some(outcome) = perform(source, effect, config.thumbnail_size) {
            apply(&mut state, outcome);
        }
    }

    info!("Recipe Finder exiting");
    Ok(())
}

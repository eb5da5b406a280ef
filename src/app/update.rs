use log::{info, warn};

use super::{AppState, Effect, Focus, Msg, Outcome, Phase};
use crate::exporter::resolve_export_path;
use crate::formatter::NO_DETAILS;

/// Apply a user message to the state and describe the work it requires.
pub fn update(state: &mut AppState, msg: Msg) -> Effect {
    if msg == Msg::Quit {
        state.should_quit = true;
        return Effect::Quit;
    }
    if state.save_prompt.is_some() {
        return update_save_prompt(state, msg);
    }

    match msg {
        Msg::Escape => {
            state.should_quit = true;
            Effect::Quit
        }
        Msg::Tab => {
            state.focus = match state.focus {
                Focus::Search => Focus::Results,
                Focus::Results => Focus::Search,
            };
            Effect::None
        }
        Msg::Search => submit_search(state),
        Msg::Random => {
            state.status = Some("Fetching a random recipe...".to_string());
            Effect::Random
        }
        Msg::Save => {
            state.save_prompt = Some(state.default_export_name.clone());
            Effect::None
        }
        other => match state.focus {
            Focus::Search => update_search_field(state, other),
            Focus::Results => update_results(state, other),
        },
    }
}

fn update_search_field(state: &mut AppState, msg: Msg) -> Effect {
    match msg {
        Msg::Char(c) => state.query.push(c),
        Msg::Backspace => {
            state.query.pop();
        }
        Msg::Enter => return submit_search(state),
        Msg::Down if !state.results.is_empty() => state.focus = Focus::Results,
        _ => {}
    }
    Effect::None
}

fn update_results(state: &mut AppState, msg: Msg) -> Effect {
    match msg {
        Msg::Up => state.select_previous(),
        Msg::Down => state.select_next(),
        Msg::Enter => return open_selected(state),
        // Typing while the list has focus goes back to the search field
        Msg::Char(c) => {
            state.focus = Focus::Search;
            state.query.push(c);
        }
        Msg::Backspace => {
            state.focus = Focus::Search;
            state.query.pop();
        }
        _ => {}
    }
    Effect::None
}

fn submit_search(state: &mut AppState) -> Effect {
    let query = state.query.trim();
    if query.is_empty() {
        return Effect::None;
    }
    let query = query.to_string();
    state.phase = Phase::Searching;
    state.status = Some(format!("Searching for \"{query}\"..."));
    Effect::Search(query)
}

fn open_selected(state: &mut AppState) -> Effect {
    let Some(summary) = state.selected_summary() else {
        return Effect::None;
    };
    if summary.is_placeholder() {
        state.show_details(NO_DETAILS.to_string(), None);
        return Effect::None;
    }
    let name = summary.name.clone();
    state.status = Some(format!("Loading \"{name}\"..."));
    Effect::Lookup(name)
}

fn update_save_prompt(state: &mut AppState, msg: Msg) -> Effect {
    match msg {
        Msg::Char(c) => {
            if let Some(input) = state.save_prompt.as_mut() {
                input.push(c);
            }
        }
        Msg::Backspace => {
            if let Some(input) = state.save_prompt.as_mut() {
                input.pop();
            }
        }
        Msg::Escape => {
            state.save_prompt = None;
            state.status = Some("Save cancelled.".to_string());
        }
        Msg::Enter => {
            let answer = state.save_prompt.take().unwrap_or_default();
            match resolve_export_path(&answer, &state.export_extension) {
                Some(path) => {
                    return Effect::Export {
                        path,
                        text: state.details.clone(),
                    }
                }
                None => state.status = Some("Save cancelled.".to_string()),
            }
        }
        _ => {}
    }
    Effect::None
}

/// Fold the result of a performed effect back into the state.
pub fn apply(state: &mut AppState, outcome: Outcome) {
    match outcome {
        Outcome::Searched(Ok(results)) => {
            info!("Search returned {} entries", results.len());
            state.selected = (!results.is_empty()).then_some(0);
            state.results = results;
            state.phase = Phase::ResultsShown;
            state.focus = Focus::Results;
            state.status = None;
        }
        Outcome::Searched(Err(e)) => {
            warn!("Search failed: {}", e);
            state.results.clear();
            state.selected = None;
            state.phase = Phase::Idle;
            state.status = Some(format!("Search failed ({}): {}", e.kind(), e));
        }
        Outcome::Looked(Ok(loaded)) | Outcome::Randomized(Ok(loaded)) => {
            match loaded {
                Some(recipe) => state.show_details(recipe.details, recipe.image),
                None => state.show_details(NO_DETAILS.to_string(), None),
            }
            state.status = None;
        }
        Outcome::Looked(Err(e)) | Outcome::Randomized(Err(e)) => {
            warn!("Loading recipe failed: {}", e);
            state.status = Some(format!("Could not load recipe ({}): {}", e.kind(), e));
        }
        Outcome::Exported(Ok(path)) => {
            state.status = Some(format!("Saved recipe to {}", path.display()));
        }
        Outcome::Exported(Err(e)) => {
            warn!("{}", e);
            state.status = Some(e.to_string());
        }
    }
}

//! Interactive state and the handlers that drive it.
//!
//! Key presses become [`Msg`]s, [`update`] turns a message into state changes
//! plus an [`Effect`] to run, [`perform`] runs that effect against a
//! [`RecipeSource`](crate::RecipeSource) and [`apply`] folds the resulting
//! [`Outcome`] back into the state.

mod effects;
mod state;
mod update;

use std::path::PathBuf;

use crate::model::RecipeSummary;
use crate::thumbnail::Thumbnail;
use crate::FinderError;

pub use effects::{load_recipe, perform};
pub use state::{AppState, Focus, Phase};
pub use update::{apply, update};

/// User input, already decoupled from the terminal backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    Char(char),
    Backspace,
    Enter,
    Tab,
    Up,
    Down,
    Escape,
    Search,
    Random,
    Save,
    Quit,
}

/// Work requested by a handler; nothing runs until it is performed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Search(String),
    Lookup(String),
    Random,
    Export { path: PathBuf, text: String },
    Quit,
}

impl Effect {
    /// Whether performing this effect talks to the network
    pub fn is_remote(&self) -> bool {
        matches!(self, Effect::Search(_) | Effect::Lookup(_) | Effect::Random)
    }
}

/// Detail text and optional thumbnail ready for display
#[derive(Debug, Clone)]
pub struct LoadedRecipe {
    pub details: String,
    pub image: Option<Thumbnail>,
}

/// Result of a performed effect
#[derive(Debug)]
pub enum Outcome {
    Searched(Result<Vec<RecipeSummary>, FinderError>),
    Looked(Result<Option<LoadedRecipe>, FinderError>),
    Randomized(Result<Option<LoadedRecipe>, FinderError>),
    Exported(Result<PathBuf, FinderError>),
}

use crate::model::RecipeSummary;
use crate::thumbnail::Thumbnail;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    ResultsShown,
    DetailShown,
}

/// Which widget receives typed keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    Results,
}

/// Everything visible in the window
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: Phase,
    pub focus: Focus,
    pub query: String,
    pub results: Vec<RecipeSummary>,
    pub selected: Option<usize>,
    pub details: String,
    pub image: Option<Thumbnail>,
    pub status: Option<String>,
    /// Path being edited in the save prompt; `None` while the prompt is closed
    pub save_prompt: Option<String>,
    pub default_export_name: String,
    pub export_extension: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(default_export_name: impl Into<String>, export_extension: impl Into<String>) -> Self {
        Self {
            default_export_name: default_export_name.into(),
            export_extension: export_extension.into(),
            ..Self::default()
        }
    }

    pub fn selected_summary(&self) -> Option<&RecipeSummary> {
        self.selected.and_then(|i| self.results.get(i))
    }

    pub(crate) fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) if i + 1 < self.results.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(next);
    }

    pub(crate) fn select_previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub(crate) fn show_details(&mut self, details: String, image: Option<Thumbnail>) {
        self.details = details;
        self.image = image;
        self.phase = Phase::DetailShown;
    }
}

//! Terminal front end: layout, drawing and the blocking event loop.

mod preview;
mod runtime;

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Focus, Phase};

pub use preview::ImagePane;
pub use runtime::{key_to_msg, run};

const TITLE: &str = " Recipe Finder ";
const HELP_TEXT: &str = "Select a recipe and press Enter to view its details.";

const ACCENT: Color = Color::Rgb(0x66, 0x47, 0x18);
const MUTED: Color = Color::Rgb(0x80, 0x63, 0x4e);
const PANEL: Color = Color::Rgb(0xf5, 0xeb, 0xdc);

/// Rows reserved for the thumbnail above the detail text
const IMAGE_ROWS: u16 = 12;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

fn button(key: &str, label: &str) -> Span<'static> {
    Span::styled(
        format!(" [{key}] {label} "),
        Style::default().fg(ACCENT).bg(PANEL),
    )
}

/// Column just past `text` inside a bordered box starting at `left`.
fn cursor_column(left: u16, text: &str) -> u16 {
    let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    left.saturating_add(1).saturating_add(width)
}

/// Draw the whole window for the current state.
pub fn render(frame: &mut Frame, state: &AppState, images: &mut ImagePane) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(TITLE, Style::default().fg(MUTED).add_modifier(Modifier::BOLD)));
    let area = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [search_area, body_area, help_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_search(frame, state, search_area);

    let [results_area, right_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body_area);
    render_results(frame, state, results_area);
    render_details(frame, state, images, right_area);

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD)),
        help_area,
    );

    let status = match (&state.status, state.phase) {
        (Some(message), _) => message.clone(),
        (None, Phase::Idle) => "Type a recipe name and press Enter.".to_string(),
        (None, _) => String::new(),
    };
    frame.render_widget(Paragraph::new(status).style(Style::default().fg(MUTED)), status_area);

    if let Some(input) = &state.save_prompt {
        render_save_prompt(frame, input, area);
    }
}

fn render_search(frame: &mut Frame, state: &AppState, area: Rect) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(26)]).areas(area);

    let focused = state.focus == Focus::Search && state.save_prompt.is_none();
    let input = Paragraph::new(state.query.as_str())
        .style(Style::default().fg(ACCENT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused))
                .title(" Search "),
        );
    frame.render_widget(input, input_area);
    if focused {
        let x = cursor_column(input_area.x, &state.query);
        frame.set_cursor_position(Position::new(
            x.min(input_area.right().saturating_sub(2)),
            input_area.y + 1,
        ));
    }

    let search_button = Paragraph::new(Line::from(button("Enter", "Search Recipes")))
        .block(Block::default().borders(Borders::ALL).border_style(border_style(false)));
    frame.render_widget(search_button, button_area);
}

fn render_results(frame: &mut Frame, state: &AppState, area: Rect) {
    let items: Vec<ListItem> = state
        .results
        .iter()
        .map(|summary| ListItem::new(summary.name.as_str()))
        .collect();

    let title = if state.phase == Phase::Searching {
        " Results (searching...) "
    } else {
        " Results "
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(state.focus == Focus::Results))
                .title(title),
        )
        .style(Style::default().fg(ACCENT))
        .highlight_style(Style::default().fg(PANEL).bg(ACCENT))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(state.selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_details(frame: &mut Frame, state: &AppState, images: &mut ImagePane, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .title(" Recipe Details ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [image_area, text_area, actions_area] = Layout::vertical([
        Constraint::Length(IMAGE_ROWS),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    images.render(frame, state.image.as_ref(), image_area);

    let details = Paragraph::new(state.details.as_str())
        .style(Style::default().fg(MUTED))
        .wrap(Wrap { trim: false });
    frame.render_widget(details, text_area);

    let actions = Line::from(vec![
        button("Ctrl+S", "Save Recipe"),
        Span::raw(" "),
        button("Ctrl+R", "Random Recipe"),
    ]);
    frame.render_widget(Paragraph::new(actions), actions_area);
}

fn render_save_prompt(frame: &mut Frame, input: &str, area: Rect) {
    let width = area.width.saturating_mul(3) / 5;
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(3) / 2,
        width,
        height: 3.min(area.height),
    };

    frame.render_widget(Clear, popup);
    let prompt = Paragraph::new(input).style(Style::default().fg(ACCENT)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(true))
            .title(" Save recipe as (Enter to save, Esc to cancel) "),
    );
    frame.render_widget(prompt, popup);

    let x = cursor_column(popup.x, input);
    frame.set_cursor_position(Position::new(x.min(popup.right().saturating_sub(2)), popup.y + 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeSummary;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use ratatui_image::picker::Picker;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut images = ImagePane::with_picker(Picker::from_fontsize((8, 16)));
        terminal
            .draw(|frame| render(frame, state, &mut images))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_window_shows_widgets_and_results() {
        let mut state = AppState::new("Recipe.txt", "txt");
        state.query = "Arrabiata".to_string();
        state.results = vec![RecipeSummary::new("Chicken Handi")];
        state.selected = Some(0);
        state.details = "Category: Chicken".to_string();

        let text = screen_text(&state);
        assert!(text.contains("Recipe Finder"));
        assert!(text.contains("Arrabiata"));
        assert!(text.contains("Chicken Handi"));
        assert!(text.contains("Category: Chicken"));
        assert!(text.contains("Search Recipes"));
        assert!(text.contains("Save Recipe"));
        assert!(text.contains("Random Recipe"));
    }

    #[test]
    fn test_cursor_column_saturates() {
        assert_eq!(cursor_column(2, "abc"), 6);
        assert_eq!(cursor_column(10, &"a".repeat(70_000)), u16::MAX);
    }

    #[test]
    fn test_very_long_query_renders() {
        let mut state = AppState::new("Recipe.txt", "txt");
        state.query = "a".repeat(70_000);
        let text = screen_text(&state);
        assert!(text.contains("Recipe Finder"));

        state.save_prompt = Some("b".repeat(70_000));
        let text = screen_text(&state);
        assert!(text.contains("Save recipe as"));
    }

    #[test]
    fn test_save_prompt_is_drawn() {
        let mut state = AppState::new("Recipe.txt", "txt");
        state.save_prompt = Some("Recipe.txt".to_string());
        let text = screen_text(&state);
        assert!(text.contains("Save recipe as"));
        assert!(text.contains("Recipe.txt"));
    }
}

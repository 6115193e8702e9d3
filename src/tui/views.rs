//! TUI views.
//!
//! Renders the single-page layout: header with the auth affordance, the
//! three-field entry form, the card grid, a keybinding footer, and the
//! toast stack anchored top-right. The card editor draws as a centered
//! overlay on top of the grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::colors;
use super::state::{AppState, CardEditor, FormState, GRID_COLUMNS, InteractionMode};
use crate::domain::{Field, ToolEntry};
use crate::notify::{Toast, ToastKind, ToastPosition, ToastTheme};

/// Render the whole page.
pub fn render(state: &AppState, frame: &mut Frame) {
    let page = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // form
            Constraint::Min(5),    // card grid
            Constraint::Length(1), // footer
        ])
        .split(page);

    render_header(state, frame, chunks[0]);
    render_form(state, frame, chunks[1]);
    render_grid(state, frame, chunks[2]);
    render_footer(state, frame, chunks[3]);

    if let InteractionMode::CardEdit(editor) = &state.mode {
        render_editor(editor, frame, chunks[2]);
    }

    render_toasts(state, frame, page);
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " trove ",
            Style::default()
                .fg(colors::HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(colors::DIM)),
        Span::raw(state.auth_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One bordered input per field, side by side like the page's form row.
fn render_form(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = matches!(state.mode, InteractionMode::FormInput);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (i, field) in [Field::Title, Field::Description, Field::Url]
        .into_iter()
        .enumerate()
    {
        let input = state.form.input(field);
        let border_style = if focused && state.form.focus == field {
            Style::default().fg(colors::FOCUSED)
        } else {
            Style::default().fg(colors::DIM)
        };

        let text: &str = if input.is_empty() && !(focused && state.form.focus == field) {
            field.name() // placeholder
        } else {
            input.content()
        };
        let text_style = if input.is_empty() {
            Style::default().fg(colors::DIM)
        } else {
            Style::default()
        };

        let widget = Paragraph::new(Span::styled(text, text_style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(widget, chunks[i]);
    }
}

fn render_grid(state: &AppState, frame: &mut Frame, area: Rect) {
    if state.entries.is_empty() {
        let empty = Paragraph::new("No tools yet - press [n] to add one")
            .style(Style::default().fg(colors::DIM))
            .block(Block::default().borders(Borders::ALL).title(" Tools "));
        frame.render_widget(empty, area);
        return;
    }

    let rows = state.entries.len().div_ceil(GRID_COLUMNS);
    let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(5)).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row_area);

        for col in 0..GRID_COLUMNS {
            let index = row * GRID_COLUMNS + col;
            if let Some(entry) = state.entries.get(index) {
                render_card(entry, state.selected == Some(index), frame, col_areas[col]);
            }
        }
    }
}

fn render_card(entry: &ToolEntry, selected: bool, frame: &mut Frame, area: Rect) {
    let title = entry.fields.get(Field::Title).unwrap_or("");
    let description = entry.fields.get(Field::Description).unwrap_or("");
    let url = entry.fields.get(Field::Url).unwrap_or("");

    let border_style = if selected {
        Style::default()
            .fg(colors::FOCUSED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::DIM)
    };

    let body = vec![
        Line::from(Span::raw(description)),
        Line::from(Span::styled(
            url,
            Style::default()
                .fg(colors::CARD_URL)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];

    let card = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(colors::CARD_TITLE)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(card, area);
}

/// Centered overlay editing one card's three fields.
fn render_editor(editor: &CardEditor, frame: &mut Frame, area: Rect) {
    let overlay = centered_rect(area, 60, 11);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::FOCUSED))
        .title(format!(" Edit {} ", editor.id));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner);

    render_editor_field(&editor.form, Field::Title, frame, chunks[0]);
    render_editor_field(&editor.form, Field::Description, frame, chunks[1]);
    render_editor_field(&editor.form, Field::Url, frame, chunks[2]);
}

fn render_editor_field(form: &FormState, field: Field, frame: &mut Frame, area: Rect) {
    let border_style = if form.focus == field {
        Style::default().fg(colors::FOCUSED)
    } else {
        Style::default().fg(colors::DIM)
    };
    let widget = Paragraph::new(form.input(field).content()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", field.name())),
    );
    frame.render_widget(widget, area);
}

fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let hints = match &state.mode {
        InteractionMode::Browse => {
            "[n] new  [e] edit  [arrows] select  [s] sign out  [q] quit"
        }
        InteractionMode::FormInput => "[tab] next field  [enter] save  [esc] back",
        InteractionMode::CardEdit(_) => "[tab] next field  [enter] update  [esc] discard",
    };
    let footer = Paragraph::new(Span::styled(hints, Style::default().fg(colors::DIM)));
    frame.render_widget(footer, area);
}

/// Stack active toasts at the notifier's configured corner.
fn render_toasts(state: &AppState, frame: &mut Frame, area: Rect) {
    let width = area.width.min(38);
    let x = area.right().saturating_sub(width);

    for (i, toast) in state.notifier.active().enumerate() {
        let i = i as u16;
        let y = match state.notifier.options().position {
            ToastPosition::TopRight => area.top() + 1 + i * 3,
            ToastPosition::BottomRight => area.bottom().saturating_sub(4 + i * 3),
        };
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, 3);
        frame.render_widget(Clear, rect);
        frame.render_widget(toast_widget(toast, state.notifier.options().theme), rect);
    }
}

fn toast_widget(toast: &Toast, theme: ToastTheme) -> Paragraph<'_> {
    let accent = match toast.kind {
        ToastKind::Success => colors::TOAST_SUCCESS,
        ToastKind::Error => colors::TOAST_ERROR,
    };
    let body = match theme {
        ToastTheme::Dark => Style::default().fg(Color::White).bg(Color::Black),
        ToastTheme::Light => Style::default().fg(Color::Black).bg(Color::White),
    };
    Paragraph::new(toast.message.as_str()).style(body).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    )
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToolFields;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn entry(title: &str, description: &str, url: &str) -> ToolEntry {
        let mut fields = ToolFields::new();
        fields.set(Field::Title, title);
        fields.set(Field::Description, description);
        fields.set(Field::Url, url);
        ToolEntry::fetched(title, fields)
    }

    fn draw(state: &AppState) -> Terminal<TestBackend> {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(state, f)).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_empty_state() {
        let state = AppState::new();
        let terminal = draw(&state);
        let text = buffer_text(&terminal);
        assert!(text.contains("No tools yet"));
        assert!(text.contains("signed out"));
    }

    #[test]
    fn test_render_cards() {
        let mut state = AppState::new();
        state.entries = vec![
            entry("ripgrep", "fast grep", "https://example.com/rg"),
            entry("fd", "fast find", "https://example.com/fd"),
        ];
        let terminal = draw(&state);
        let text = buffer_text(&terminal);
        assert!(text.contains("ripgrep"));
        assert!(text.contains("fast find"));
    }

    #[test]
    fn test_render_toast() {
        let mut state = AppState::new();
        state.notifier.success("Saved the tool successfully!");
        let terminal = draw(&state);
        let text = buffer_text(&terminal);
        assert!(text.contains("Saved the tool successfully!"));
    }

    #[test]
    fn test_render_editor_overlay() {
        let mut state = AppState::new();
        state.entries = vec![entry("ripgrep", "fast grep", "u")];
        let fields = state.entries[0].fields.clone();
        state.mode = InteractionMode::CardEdit(CardEditor::open(0, "abc123", &fields));
        let terminal = draw(&state);
        let text = buffer_text(&terminal);
        assert!(text.contains("Edit abc123"));
        assert!(text.contains("update"));
    }

    #[test]
    fn test_render_form_placeholders() {
        let state = AppState::new();
        let terminal = draw(&state);
        let text = buffer_text(&terminal);
        assert!(text.contains("title"));
        assert!(text.contains("description"));
        assert!(text.contains("url"));
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 11);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 11);
        assert!(rect.x >= area.x && rect.right() <= area.right());
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 60, 11);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}

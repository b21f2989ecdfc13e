//! Small widgets used by the list view (search box, status bar).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, Theme};
use crate::ui::view::{InputView, ViewTree};

/// Bordered text input; shows the placeholder when empty and parks the cursor after the value.
pub fn render_search_input(f: &mut Frame, area: Rect, input: &InputView, theme: &Theme) {
    let p = if input.value.is_empty() {
        Paragraph::new(input.placeholder).style(Style::default().fg(theme.muted))
    } else {
        Paragraph::new(input.value.as_str()).style(Style::default().fg(theme.text))
    };
    let p = p.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(p, area);

    if area.width > 2 && area.height > 2 {
        // Display cells, not chars: wide glyphs take two columns.
        let cells = Line::from(input.value.as_str()).width();
        let max = usize::from(area.width - 3);
        let offset = u16::try_from(cells.min(max)).unwrap_or(u16::MAX);
        f.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

/// Summary of config problems, empty when there are none.
pub fn config_warning_text(warnings: &[String]) -> String {
    if warnings.is_empty() {
        String::new()
    } else {
        format!("config: {}", warnings.join("; "))
    }
}

fn key_hints(app: &AppState) -> String {
    app.keymap
        .hints()
        .into_iter()
        .filter_map(|(action, keys)| {
            let label = match action {
                KeyAction::Quit => "quit",
                KeyAction::ClearQuery => "clear",
                KeyAction::DeleteChar => return None,
            };
            Some(format!("{}: {}", keys.join("/"), label))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the bottom status bar: match counts, config warnings, key hints.
pub fn render_status_bar(f: &mut Frame, area: Rect, tree: &ViewTree, total: usize, app: &AppState) {
    let theme = &app.theme;
    let mut spans = vec![Span::raw(format!("matches: {}/{}", tree.entries.len(), total))];
    let warning = config_warning_text(app.warnings());
    if !warning.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(warning, Style::default().fg(theme.warning)));
    }
    let hints = key_hints(app);
    if !hints.is_empty() {
        spans.push(Span::raw(format!("  {hints}")));
    }
    let p = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.status_fg).bg(theme.status_bg));
    f.render_widget(p, area);
}

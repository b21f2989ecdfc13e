pub mod components;
pub mod view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::app::{AppState, Theme};
use crate::users::{self, Role};
use view::ViewTree;

pub fn render(f: &mut Frame, app: &AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    let tree = view::build_view(users::directory(), app.query());
    render_panel(f, root[0], &tree, &app.theme);
    components::render_status_bar(f, root[1], &tree, users::directory().len(), app);
}

/// Draw the `panel` container: heading as title, search box, then the matches.
pub fn render_panel(f: &mut Frame, area: Rect, tree: &ViewTree, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            tree.heading,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(inner);

    components::render_search_input(f, parts[0], &tree.input, theme);

    let items: Vec<ListItem> = tree
        .entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(e.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(
                    e.role_tag(),
                    Style::default().fg(role_color(e.role, theme)).add_modifier(Modifier::ITALIC),
                ),
            ]))
        })
        .collect();
    let list = List::new(items).style(Style::default().fg(theme.text));
    f.render_widget(list, parts[1]);
}

fn role_color(role: Role, theme: &Theme) -> ratatui::style::Color {
    match role {
        Role::Admin => theme.admin,
        Role::Viewer => theme.viewer,
    }
}

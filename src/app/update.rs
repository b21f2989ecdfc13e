use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::time::Duration;

use crate::app::AppState;
use crate::app::keymap::KeyAction;
use crate::ui;

/// What the loop should do after an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if handle_event(app, event::read()?) == Flow::Quit {
                break;
            }
        }
    }

    Ok(())
}

pub fn handle_event(app: &mut AppState, ev: Event) -> Flow {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            let next = format!("{}{}", app.query(), text);
            app.set_query(next);
            Flow::Continue
        }
        _ => Flow::Continue,
    }
}

/// Translate a key press into a query change (or quit) through the keymap.
/// Unbound keys without Ctrl/Alt are typed into the query.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Flow {
    match app.keymap.resolve(&key) {
        Some(KeyAction::Quit) => return Flow::Quit,
        Some(KeyAction::ClearQuery) => app.set_query(""),
        Some(KeyAction::DeleteChar) => {
            let mut next = app.query().to_string();
            if next.pop().is_some() {
                app.set_query(next);
            }
        }
        None => {
            let typed = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            if let (KeyCode::Char(c), true) = (key.code, typed) {
                let mut next = app.query().to_string();
                next.push(c);
                app.set_query(next);
            }
        }
    }
    Flow::Continue
}

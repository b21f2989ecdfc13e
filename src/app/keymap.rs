//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! Only non-text keys are bound. Any key press that resolves to no action and
//! carries no Ctrl/Alt modifier is typed into the query.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use crate::error::{Context, Result};

/// Semantic keyboard actions that can be bound to key combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyAction {
    /// Leave the application.
    Quit,
    /// Replace the query with the empty string.
    ClearQuery,
    /// Drop the last character of the query.
    DeleteChar,
}

impl KeyAction {
    pub const ALL: [KeyAction; 3] = [KeyAction::Quit, KeyAction::ClearQuery, KeyAction::DeleteChar];
}

/// Mapping from `(KeyModifiers, KeyCode)` pairs to [`KeyAction`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Esc and Ctrl+c quit, Ctrl+u clears, Backspace deletes.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Esc), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('u')), KeyAction::ClearQuery);
        bindings.insert((M::NONE, Backspace), KeyAction::DeleteChar);
        Self { bindings }
    }

    /// Parse `<Action> = <KeySpec>` lines on top of the defaults.
    ///
    /// The first line naming an action drops that action's default keys, so
    /// `Quit = Ctrl+q` replaces both Esc and Ctrl+c. Later lines for the same
    /// action add further keys. Problems are returned as warnings and the
    /// offending line is skipped.
    pub fn parse(contents: &str) -> (Self, Vec<String>) {
        let mut map = Self::default();
        let mut warnings = Vec::new();
        let mut remapped: HashSet<KeyAction> = HashSet::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lineno = idx + 1;
            let Some((lhs, rhs)) = line.split_once('=') else {
                warnings.push(format!("keybinds line {lineno}: expected '<Action> = <Key>'"));
                continue;
            };
            let (lhs, rhs) = (lhs.trim(), rhs.trim());
            let Some(action) = parse_action(lhs) else {
                warnings.push(format!("keybinds line {lineno}: unknown action '{lhs}' ignored"));
                continue;
            };
            let Some(key) = parse_key(rhs) else {
                warnings.push(format!("keybinds line {lineno}: invalid key '{rhs}' for {lhs}"));
                continue;
            };
            if remapped.insert(action) {
                map.bindings.retain(|_, a| *a != action);
            }
            if let Some(prev) = map.bindings.insert(key, action) {
                if prev != action {
                    warnings.push(format!(
                        "keybinds line {lineno}: {} now {}, was {}",
                        Self::format_key(key.0, key.1),
                        format_action(action),
                        format_action(prev)
                    ));
                }
            }
        }

        for action in KeyAction::ALL {
            if !map.bindings.values().any(|a| *a == action) {
                warnings.push(format!("no key left for {}", format_action(action)));
            }
        }

        (map, warnings)
    }

    pub fn from_file(path: &Path) -> Result<(Self, Vec<String>)> {
        let contents = std::fs::read_to_string(path)
            .with_ctx(|| format!("read keybinds {}", path.display()))?;
        Ok(Self::parse(&contents))
    }

    /// Resolve a key event to its action. Shift is ignored for character keys,
    /// since terminals disagree on reporting it.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        if let Some(a) = self.bindings.get(&(key.modifiers, key.code)) {
            return Some(*a);
        }
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::SHIFT) => {
                let mods = key.modifiers.difference(KeyModifiers::SHIFT);
                self.bindings.get(&(mods, KeyCode::Char(c.to_ascii_lowercase()))).copied()
            }
            _ => None,
        }
    }

    /// Human-readable keys bound to `action`, sorted.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort();
        keys
    }

    /// Key hints grouped by action, for the status bar.
    pub fn hints(&self) -> BTreeMap<KeyAction, Vec<String>> {
        KeyAction::ALL
            .into_iter()
            .map(|a| (a, self.keys_for(a)))
            .filter(|(_, keys)| !keys.is_empty())
            .collect()
    }

    /// Format a key like "Ctrl+u", "Alt+x", "Esc".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Backspace => "Backspace".to_string(),
            Delete => "Delete".to_string(),
            Tab => "Tab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            F(n) => format!("F{n}"),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        let mut out = String::new();
        if mods.contains(KeyModifiers::CONTROL) {
            out.push_str("Ctrl+");
        }
        if mods.contains(KeyModifiers::ALT) {
            out.push_str("Alt+");
        }
        out.push_str(&base);
        out
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let mut rest = spec.trim();
    let mut mods = KeyModifiers::NONE;
    loop {
        if let Some(after) = rest.strip_prefix("Ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = after;
        } else if let Some(after) = rest.strip_prefix("Alt+") {
            mods |= KeyModifiers::ALT;
            rest = after;
        } else {
            break;
        }
    }
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Backspace" => Backspace,
        "Delete" => Delete,
        "Tab" => Tab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            if let Some(n) = rest.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                F(n)
            } else {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    // Bare printable keys are query text, never actions.
                    (Some(c), None) if !mods.is_empty() => Char(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    match s.trim() {
        "Quit" => Some(KeyAction::Quit),
        "ClearQuery" => Some(KeyAction::ClearQuery),
        "DeleteChar" => Some(KeyAction::DeleteChar),
        _ => None,
    }
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::ClearQuery => "ClearQuery",
        KeyAction::DeleteChar => "DeleteChar",
    }
}

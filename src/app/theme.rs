//! Colour palette and its `key = value` configuration file.

use ratatui::style::Color;
use std::path::{Path, PathBuf};

use crate::error::{Context, Result};

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub admin: Color,
    pub viewer: Color,
    pub warning: Color,
    pub status_bg: Color,
    pub status_fg: Color,
}

impl Theme {
    /// Dark theme using the terminal's named colours.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            admin: Color::Yellow,
            viewer: Color::Green,
            warning: Color::Red,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),      // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),     // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),     // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),    // surface2
            admin: Color::Rgb(0xf9, 0xe2, 0xaf),     // yellow
            viewer: Color::Rgb(0xa6, 0xe3, 0xa1),    // green
            warning: Color::Rgb(0xf3, 0x8b, 0xa8),   // red
            status_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4), // text
        }
    }

    /// Parse `key = value` lines. `base = dark|mocha` picks the starting
    /// palette wherever it appears; other keys override single colours.
    /// Lines that cannot be applied are skipped and reported as warnings.
    pub fn parse(contents: &str) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let mut entries = Vec::new();

        for (idx, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lineno = idx + 1;
            match line.split_once('=') {
                Some((k, v)) if !k.trim().is_empty() && !v.trim().is_empty() => {
                    entries.push((lineno, k.trim(), v.trim()));
                }
                _ => warnings.push(format!("theme line {lineno}: expected '<key> = <colour>'")),
            }
        }

        let mut theme = Self::mocha();
        for &(lineno, _, val) in entries.iter().filter(|(_, k, _)| *k == "base") {
            match val.to_ascii_lowercase().as_str() {
                "dark" => theme = Self::dark(),
                "mocha" => theme = Self::mocha(),
                _ => warnings.push(format!("theme line {lineno}: unknown base '{val}'")),
            }
        }

        for &(lineno, key, val) in entries.iter().filter(|(_, k, _)| *k != "base") {
            let slot = match key {
                "text" => &mut theme.text,
                "muted" => &mut theme.muted,
                "title" => &mut theme.title,
                "border" => &mut theme.border,
                "admin" => &mut theme.admin,
                "viewer" => &mut theme.viewer,
                "warning" => &mut theme.warning,
                "status_bg" => &mut theme.status_bg,
                "status_fg" => &mut theme.status_fg,
                _ => {
                    warnings.push(format!("theme line {lineno}: unknown key '{key}' ignored"));
                    continue;
                }
            };
            match parse_color(val) {
                Some(color) => *slot = color,
                None => warnings.push(format!("theme line {lineno}: invalid colour '{val}' for {key}")),
            }
        }

        (theme, warnings)
    }

    pub fn from_file(path: &Path) -> Result<(Self, Vec<String>)> {
        let contents = std::fs::read_to_string(path)
            .with_ctx(|| format!("read theme {}", path.display()))?;
        Ok(Self::parse(&contents))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

/// Parse a color from hex ("#RRGGBB" or "RRGGBB") or the special name "reset".
fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if lower == "reset" {
        return Some(Color::Reset);
    }
    let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
    if hex.len() == 6 && hex.is_ascii() {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return Some(Color::Rgb(r, g, b));
        }
    }
    None
}

/// First existing `user-list-tui/<name>` under `$XDG_CONFIG_HOME` or `$HOME/.config`.
pub fn config_file_read_path(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        candidates.push(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        candidates.push(PathBuf::from(home).join(".config"));
    }
    candidates
        .into_iter()
        .map(|dir| dir.join("user-list-tui").join(name))
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_overrides_known_keys_only() {
        let (theme, warnings) = Theme::parse(
            "# comment\n\nadmin = #FF0000\nviewer=00ff00\nborder = reset\nbogus = #123456\ntitle = nope\n",
        );
        assert_eq!(theme.admin, Color::Rgb(0xff, 0, 0));
        assert_eq!(theme.viewer, Color::Rgb(0, 0xff, 0));
        assert_eq!(theme.border, Color::Reset);
        assert_eq!(theme.title, Theme::mocha().title);
        assert_eq!(theme.text, Theme::mocha().text);
        assert_eq!(
            warnings,
            vec![
                "theme line 6: unknown key 'bogus' ignored".to_string(),
                "theme line 7: invalid colour 'nope' for title".to_string(),
            ]
        );
    }

    #[test]
    fn typo_and_bad_value_are_reported() {
        let (theme, warnings) = Theme::parse("admin = #zzzzzz\nadmn = #ff0000\n");
        assert_eq!(theme, Theme::mocha());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("invalid colour '#zzzzzz' for admin"));
        assert!(warnings[1].contains("unknown key 'admn'"));
    }

    #[test]
    fn base_selects_palette_before_overrides() {
        let (theme, warnings) = Theme::parse("viewer = #010101\nbase = dark\n");
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(theme.admin, Theme::dark().admin);
        assert_eq!(theme.viewer, Color::Rgb(1, 1, 1));

        let (theme, warnings) = Theme::parse("base = neon\nnot a pair\n");
        assert_eq!(theme, Theme::mocha());
        assert_eq!(warnings.len(), 2, "{warnings:?}");
    }

    #[test]
    fn parse_color_rejects_malformed_hex() {
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("gggggg"), None);
        assert_eq!(parse_color("#ééé"), None);
        assert_eq!(parse_color(" RESET "), Some(Color::Reset));
    }
}

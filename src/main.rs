//! user-list-tui binary entry point.
//!
//! Parses options, sets up logging and the theme, initializes the terminal
//! in raw mode, runs the TUI event loop, and restores the terminal on exit.
//!
use clap::Parser;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use user_list_tui::app::{self, AppState, Keymap, Theme};
use user_list_tui::error::{Context, Result};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Theme file with `key = #RRGGBB` lines.
    #[arg(long, env = "USER_LIST_THEME")]
    theme: Option<PathBuf>,

    /// Keybinding file with `<Action> = <Key>` lines.
    #[arg(long, env = "USER_LIST_KEYMAP")]
    keymap: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long, env = "USER_LIST_LOG")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_ctx(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Load one config file from `explicit` or the default location. A missing
/// default file means built-in values; an unreadable file becomes a warning.
fn load_config<T: Default>(
    explicit: Option<PathBuf>,
    name: &str,
    from_file: fn(&Path) -> Result<(T, Vec<String>)>,
    warnings: &mut Vec<String>,
) -> T {
    let Some(path) = explicit.or_else(|| app::theme::config_file_read_path(name)) else {
        return T::default();
    };
    match from_file(&path) {
        Ok((value, found)) => {
            tracing::info!(path = %path.display(), warnings = found.len(), "{name} loaded");
            warnings.extend(found);
            value
        }
        Err(err) => {
            tracing::warn!(%err, "falling back to built-in {name}");
            warnings.push(err.to_string());
            T::default()
        }
    }
}

/// Run `undo` when `res` failed, then hand `res` back.
fn undo_on_err<T, E>(res: std::result::Result<T, E>, undo: impl FnOnce()) -> std::result::Result<T, E> {
    if res.is_err() {
        undo();
    }
    res
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
/// Any step that fails undoes the ones before it.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    undo_on_err(execute!(stdout, EnterAlternateScreen, EnableBracketedPaste), || {
        disable_raw_mode().ok();
    })?;
    let terminal = undo_on_err(Terminal::new(CrosstermBackend::new(stdout)), || {
        execute!(std::io::stdout(), LeaveAlternateScreen, DisableBracketedPaste).ok();
        disable_raw_mode().ok();
    })?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut warnings = Vec::new();
    let theme = load_config(cli.theme, "theme.conf", Theme::from_file, &mut warnings);
    let keymap = load_config(cli.keymap, "keybinds.conf", Keymap::from_file, &mut warnings);
    for w in &warnings {
        tracing::warn!("{w}");
    }
    let mut app = AppState::with_config(theme, keymap, warnings);
    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;
    tracing::info!("started");

    let res = app::run(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .ok();
    terminal.show_cursor().ok();

    match res {
        Ok(()) => tracing::info!("exited"),
        Err(err) => {
            tracing::error!(%err, "application error");
            eprintln!("application error: {err}");
        }
    }
    Ok(())
}

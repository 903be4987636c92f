//! Design tokens for Ferry CLI output

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use crate::config::ColorChoice;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const STEP: &str = "●";
    pub const ARROW: &str = "↳";
    pub const DEPLOY: &str = "⛴";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const STEP: &str = "*";
    pub const ARROW: &str = ">";
    pub const DEPLOY: &str = "[DEPLOY]";
}

/// Resolve whether human output gets ANSI colors
///
/// NDJSON output is never colored. `FERRY_NO_COLOR`/`NO_COLOR` beat the
/// config; `auto` means "stdout is a terminal".
pub fn color_enabled(choice: ColorChoice, json: bool) -> bool {
    if json {
        return false;
    }
    if std::env::var_os("FERRY_NO_COLOR").is_some() || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    }
}

/// Unicode icons unless the terminal is likely to mangle them
pub fn unicode_enabled() -> bool {
    if cfg!(windows) {
        return false;
    }
    !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
}

/// Apply a color when enabled, pass through otherwise
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

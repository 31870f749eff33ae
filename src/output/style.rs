/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// Styling capability for status markers and summary lines.
pub trait Styler {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warn(&self, text: &str) -> String;
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[0;31m";
    pub const GREEN: &str = "\x1b[0;32m";
    pub const YELLOW: &str = "\x1b[1;33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in ANSI escape sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiStyler;

impl AnsiStyler {
    fn paint(text: &str, color: &str) -> String {
        format!("{color}{text}{}", ansi::RESET)
    }
}

impl Styler for AnsiStyler {
    fn success(&self, text: &str) -> String {
        Self::paint(text, ansi::GREEN)
    }

    fn error(&self, text: &str) -> String {
        Self::paint(text, ansi::RED)
    }

    fn warn(&self, text: &str) -> String {
        Self::paint(text, ansi::YELLOW)
    }
}

/// Returns text unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warn(&self, text: &str) -> String {
        text.to_string()
    }
}

#[must_use]
pub fn styler_for(mode: ColorMode) -> Box<dyn Styler> {
    if mode.use_colors() {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;

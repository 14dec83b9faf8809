//! ANSI styling for rendered pull specs.
//!
//! Each field is the escape sequence for one role in pull notation:
//! - `key`: attribute keys, including `:as` targets
//! - `value`: option values (limits, defaults, collection literals)
//! - `punct`: brackets, option names, the `*` wildcard

/// Escape sequences per notation role. Empty strings when styling is off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub key: &'static str,
    pub value: &'static str,
    pub punct: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl Colors {
    /// Blue keys, green values, dim punctuation.
    pub const ANSI: Self = Self {
        key: "\x1b[34m",
        value: "\x1b[32m",
        punct: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        key: "",
        value: "",
        punct: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }

    /// Wrap `text` in `style` followed by a reset. Unchanged when `style` is empty.
    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            return text.to_owned();
        }
        format!("{style}{text}{}", self.reset)
    }
}

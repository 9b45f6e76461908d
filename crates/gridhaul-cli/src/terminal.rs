//! Terminal styling and color utilities.
//!
//! ANSI escape codes, color detection honouring `NO_COLOR`/`TERM=dumb`, and
//! small number formatting helpers shared by the renderers.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Step tags (bold reverse video)
    /// Bold reverse green for STRT tags.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse cyan for PICK tags.
    pub const TAG_PICKUP: &str = "\x1b[1;7;36m";
    /// Bold reverse magenta for DROP tags.
    pub const TAG_DELIVERY: &str = "\x1b[1;7;35m";
    /// Bold reverse yellow for FUEL tags.
    pub const TAG_REFUEL: &str = "\x1b[1;7;33m";
    /// Bold reverse blue for BACK/HOME tags.
    pub const TAG_DEPOT: &str = "\x1b[1;7;34m";

    /// Bright bold white for coordinates.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for the logo and low-fuel readings.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_pickup: &'static str,
    pub tag_delivery: &'static str,
    pub tag_refuel: &'static str,
    pub tag_depot: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_pickup: colors::TAG_PICKUP,
            tag_delivery: colors::TAG_DELIVERY,
            tag_refuel: colors::TAG_REFUEL,
            tag_depot: colors::TAG_DEPOT,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_pickup: "",
            tag_delivery: "",
            tag_refuel: "",
            tag_depot: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            orange: "",
            red: "",
        }
    }

    /// Pick `colored()` or `plain()` from the terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check `LANG`/`LC_ALL` for a UTF-8 hint.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LC_ALL", "LANG"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    })
}

/// Format a number with thousand separators (commas).
///
/// ```
/// # use gridhaul_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

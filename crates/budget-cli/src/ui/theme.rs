//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};

/// Apply `style` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Named styles.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn income() -> Style {
        Style::new().green()
    }

    pub fn expense() -> Style {
        Style::new().red()
    }
}

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Info,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Warn => "[\u{26A0}]", // [⚠]
            Self::Info => "[\u{2139}]", // [ℹ]
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Info => Style::new().cyan(),
        }
    }
}

/// Chart slice colors, cycled by slice index.
pub const PALETTE: [(u8, u8, u8); 7] = [
    (0x4E, 0xCD, 0xC4),
    (0xFF, 0x6B, 0x6B),
    (0xFF, 0xB7, 0x40),
    (0x7A, 0x77, 0xFF),
    (0xA3, 0xA1, 0xFF),
    (0x52, 0xD1, 0xDC),
    (0xFF, 0x8E, 0x8E),
];

pub fn slice_style(index: usize) -> Style {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Style::new().truecolor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Warn.text(), "[WARN]");
        assert_eq!(Badge::Info.text(), "[INFO]");
    }

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("Budget", styles::bold(), false), "Budget");
        assert_ne!(styled("Budget", styles::bold(), true), "Budget");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(
            styled("x", slice_style(0), true),
            styled("x", slice_style(PALETTE.len()), true)
        );
    }
}

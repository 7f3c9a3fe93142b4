//! Terminal capabilities and user preferences that shape rendering.

use std::io::IsTerminal;

use super::mode::{OutputMode, Terminal};

/// Everything the renderers need to know about where output is going.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Columns available for tables
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Build the context for one command invocation.
    ///
    /// Colour needs a TTY and is switched off by `--no-color`, `NO_COLOR`
    /// or `TERM=dumb`. `--ascii` keeps badges and bars to ASCII.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let terminal = Terminal {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
        };
        let color_allowed = !no_color_flag && std::env::var_os("NO_COLOR").is_none();

        Self {
            color: terminal.stdout_tty && !terminal.dumb && color_allowed,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format_flag, terminal),
        }
    }

    /// Prompts need a person on both ends: stdin to answer, stderr to ask.
    pub fn is_interactive() -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }
}

/// `COLUMNS` if set, otherwise the size reported for stdout.
fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        let mut size = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        // SAFETY: TIOCGWINSZ writes a winsize into the pointer it is given.
        let rc = unsafe {
            libc::ioctl(
                libc::STDOUT_FILENO,
                libc::TIOCGWINSZ,
                &mut size as *mut libc::winsize,
            )
        };
        if rc == 0 && size.ws_col > 0 {
            return Some(usize::from(size.ws_col));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_selects_json() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_flags_turn_off_decoration() {
        let ctx = UiContext::from_env(false, Some("table"), true, true);
        assert!(!ctx.color);
        assert!(!ctx.unicode);
        assert_eq!(ctx.mode, OutputMode::Pretty);
    }

    #[test]
    fn test_width_is_positive() {
        assert!(UiContext::from_env(false, None, false, false).width > 0);
    }
}

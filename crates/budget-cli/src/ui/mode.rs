//! Choosing between JSON, plain and pretty output.

/// How a command writes its results to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document and nothing else
    Json,
    /// `key=value` and space-separated rows for scripts
    #[default]
    Plain,
    /// Tables, badges and colour for a person at a terminal
    Pretty,
}

/// What the terminal around us looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub dumb: bool,
}

impl OutputMode {
    /// `--json` wins. An explicit `--format` is honoured next, so
    /// `--format table` keeps tables when piped. Otherwise pretty output
    /// needs a capable TTY.
    pub fn resolve(json_flag: bool, format_flag: Option<&str>, terminal: Terminal) -> Self {
        if json_flag {
            return Self::Json;
        }
        match format_flag {
            Some("plain") => Self::Plain,
            Some("table") => Self::Pretty,
            _ if terminal.stdout_tty && !terminal.dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTY: Terminal = Terminal {
        stdout_tty: true,
        dumb: false,
    };
    const PIPE: Terminal = Terminal {
        stdout_tty: false,
        dumb: false,
    };

    #[test]
    fn test_json_flag_overrides_format() {
        assert_eq!(OutputMode::resolve(true, Some("table"), TTY), OutputMode::Json);
        assert_eq!(OutputMode::resolve(true, None, PIPE), OutputMode::Json);
    }

    #[test]
    fn test_explicit_format() {
        assert_eq!(OutputMode::resolve(false, Some("plain"), TTY), OutputMode::Plain);
        assert_eq!(OutputMode::resolve(false, Some("table"), PIPE), OutputMode::Pretty);
    }

    #[test]
    fn test_terminal_decides_by_default() {
        assert_eq!(OutputMode::resolve(false, None, TTY), OutputMode::Pretty);
        assert_eq!(OutputMode::resolve(false, None, PIPE), OutputMode::Plain);
        let dumb = Terminal {
            stdout_tty: true,
            dumb: true,
        };
        assert_eq!(OutputMode::resolve(false, None, dumb), OutputMode::Plain);
    }
}

//! Key presses and the fixed key map.
//!
//! Terminal key events are translated into [`KeyPress`] values by the terminal
//! layer, so nothing in the state machine depends on the terminal backend.

use std::fmt;

/// Keys the application distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// A key press with its control modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub ctrl: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    #[must_use]
    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            ctrl: true,
        }
    }

    /// Returns the character of an unmodified character key.
    #[must_use]
    pub const fn typed_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.ctrl => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyPress {
    /// Formats the key the way bindings name it, e.g. `ctrl+n` or `enter`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("ctrl+")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::BackTab => f.write_str("shift+tab"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Delete => f.write_str("delete"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            KeyCode::PageUp => f.write_str("pgup"),
            KeyCode::PageDown => f.write_str("pgdown"),
        }
    }
}

/// Named bindings of the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    New,
    Rename,
    Delete,
    TogglePreview,
    CycleSort,
    YapMode,
    TabMode,
    Quit,
}

impl Binding {
    /// Bindings shown in the footer.
    pub const SHORT_HELP: [Self; 5] = [
        Self::New,
        Self::YapMode,
        Self::Rename,
        Self::Delete,
        Self::Quit,
    ];

    /// Every binding, grouped the way the long help lists them.
    pub const FULL_HELP: [&'static [Self]; 2] = [
        &[Self::New, Self::Rename, Self::Delete],
        &[
            Self::YapMode,
            Self::TabMode,
            Self::TogglePreview,
            Self::CycleSort,
            Self::Quit,
        ],
    ];

    /// Key label and description shown in help.
    #[must_use]
    pub const fn help(self) -> (&'static str, &'static str) {
        match self {
            Self::New => ("ctrl+n", "new"),
            Self::Rename => ("ctrl+r", "rename"),
            Self::Delete => ("ctrl+d", "delete"),
            Self::TogglePreview => ("ctrl+p", "preview"),
            Self::CycleSort => ("ctrl+s", "sort"),
            Self::YapMode => ("0-4", "yap mode"),
            Self::TabMode => ("tab", "cycle mode (input)"),
            Self::Quit => ("ctrl+c", "quit"),
        }
    }

    #[must_use]
    pub fn matches(self, key: &KeyPress) -> bool {
        match self {
            Self::New => *key == KeyPress::ctrl('n'),
            Self::Rename => *key == KeyPress::ctrl('r'),
            Self::Delete => *key == KeyPress::ctrl('d'),
            Self::TogglePreview => *key == KeyPress::ctrl('p'),
            Self::CycleSort => *key == KeyPress::ctrl('s'),
            Self::YapMode => key.typed_char().is_some_and(|c| ('0'..='4').contains(&c)),
            Self::TabMode => key.code == KeyCode::Tab && !key.ctrl,
            Self::Quit => *key == KeyPress::ctrl('c'),
        }
    }
}

/// Multi-line key reference used by `--help`.
#[must_use]
pub fn long_help() -> String {
    let mut out = String::from("Keybindings:\n");
    for group in Binding::FULL_HELP {
        for binding in group {
            let (key, desc) = binding.help();
            out.push_str(&format!("  {key:<8} {desc}\n"));
        }
    }
    out.push_str("  /        filter the list\n");
    out.push_str("  enter    open the selected note in $EDITOR\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_chords() {
        assert_eq!(KeyPress::ctrl('n').to_string(), "ctrl+n");
        assert_eq!(KeyPress::char('y').to_string(), "y");
        assert_eq!(KeyPress::plain(KeyCode::Esc).to_string(), "esc");
    }

    #[test]
    fn bindings_match_their_keys() {
        assert!(Binding::Quit.matches(&KeyPress::ctrl('c')));
        assert!(!Binding::Quit.matches(&KeyPress::char('c')));
        assert!(Binding::YapMode.matches(&KeyPress::char('3')));
        assert!(!Binding::YapMode.matches(&KeyPress::char('5')));
        assert!(Binding::TabMode.matches(&KeyPress::plain(KeyCode::Tab)));
    }

    #[test]
    fn long_help_lists_every_binding() {
        let help = long_help();
        for group in Binding::FULL_HELP {
            for binding in group {
                assert!(help.contains(binding.help().1));
            }
        }
    }
}

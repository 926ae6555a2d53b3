//! Single-line text input used by the name prompt.

use super::keys::{KeyCode, KeyPress};

/// Maximum number of characters accepted.
pub const CHAR_LIMIT: usize = 128;

/// Columns of the value shown at once.
pub const DISPLAY_WIDTH: usize = 40;

/// Editable line of text with a cursor and a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: Vec<char>,
    /// Cursor position in characters, `0..=value.len()`.
    cursor: usize,
    placeholder: String,
    char_limit: usize,
    width: usize,
}

/// What the prompt shows: a window of the value or the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    /// Cursor column within `text`.
    pub cursor: usize,
    pub is_placeholder: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            placeholder: String::new(),
            char_limit: CHAR_LIMIT,
            width: DISPLAY_WIDTH,
        }
    }
}

impl TextInput {
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.value.len();
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Applies an editing key. Keys the input does not use are ignored.
    pub fn handle_key(&mut self, key: &KeyPress) {
        match (key.code, key.ctrl) {
            (KeyCode::Char('a'), true) | (KeyCode::Home, _) => self.cursor = 0,
            (KeyCode::Char('e'), true) | (KeyCode::End, _) => self.cursor = self.value.len(),
            (KeyCode::Char('b'), true) | (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            (KeyCode::Char('f'), true) | (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.value.len());
            }
            (KeyCode::Char('u'), true) => {
                self.value.drain(..self.cursor);
                self.cursor = 0;
            }
            (KeyCode::Char('k'), true) => self.value.truncate(self.cursor),
            (KeyCode::Char('w'), true) => self.delete_word_backward(),
            (KeyCode::Char('h'), true) | (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
            }
            (KeyCode::Delete, _) => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            (KeyCode::Char(c), false) => self.insert(c),
            _ => {}
        }
    }

    fn insert(&mut self, c: char) {
        if self.value.len() >= self.char_limit || c.is_control() {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
    }

    fn delete_word_backward(&mut self) {
        let mut start = self.cursor;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Window of the value around the cursor, or the placeholder when empty.
    #[must_use]
    pub fn view(&self) -> InputView {
        if self.value.is_empty() {
            return InputView {
                text: self.placeholder.clone(),
                cursor: 0,
                is_placeholder: true,
            };
        }

        let start = (self.cursor + 1).saturating_sub(self.width);
        let end = (start + self.width).min(self.value.len());

        InputView {
            text: self.value[start..end].iter().collect(),
            cursor: self.cursor - start,
            is_placeholder: false,
        }
    }
}

//! Single-line text field for `MM:SS` durations.
//!
//! Accepts only ASCII digits and `:`, so the trigger keys bound to letters
//! never end up in the value. The field does not validate what it holds;
//! [`parse_duration`](crate::duration::parse_duration) does that when the
//! countdown is started.

use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Default maximum number of characters.
pub const DEFAULT_CHAR_LIMIT: usize = 8;

/// The duration text field.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text rendered before the value.
    pub prompt: String,
    /// Text rendered while the value is empty.
    pub placeholder: String,
    /// Maximum number of characters; 0 means unlimited.
    pub char_limit: usize,

    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the value.
    pub text_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an empty, unfocused field.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        placeholder: "MM:SS".to_string(),
        char_limit: DEFAULT_CHAR_LIMIT,
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder_style: Style::new().faint(true),
        cursor_style: Style::new().underline(true),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

fn accepts(ch: char) -> bool {
    ch.is_ascii_digit() || ch == ':'
}

impl Model {
    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value, dropping characters the field does not accept.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().filter(|&c| accepts(c)).collect();
        if self.char_limit > 0 {
            self.value.truncate(self.char_limit);
        }
        self.pos = self.value.len();
    }

    /// Whether the value is blank.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the field receives key input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Takes keyboard focus away.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Handles editing keys while focused.
    ///
    /// The field never produces commands; the return type matches the other
    /// components so it can be routed the same way.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if !self.focus {
            return std::option::Option::None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }

        std::option::Option::None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        match key_msg.key {
            KeyCode::Backspace => {
                if self.pos > 0 {
                    self.value.remove(self.pos - 1);
                    self.pos -= 1;
                }
            }
            KeyCode::Delete => {
                if self.pos < self.value.len() {
                    self.value.remove(self.pos);
                }
            }
            KeyCode::Left => self.pos = self.pos.saturating_sub(1),
            KeyCode::Right => self.pos = (self.pos + 1).min(self.value.len()),
            KeyCode::Home => self.pos = 0,
            KeyCode::End => self.pos = self.value.len(),
            KeyCode::Char(ch) => {
                if key_msg.modifiers.contains(KeyModifiers::CONTROL)
                    || key_msg.modifiers.contains(KeyModifiers::ALT)
                {
                    return;
                }
                self.insert(ch);
            }
            _ => {}
        }
    }

    fn insert(&mut self, ch: char) {
        if !accepts(ch) {
            return;
        }
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
    }

    /// Renders the prompt, the value and, when focused, the cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() {
            let placeholder = if self.focus {
                let mut chars = self.placeholder.chars();
                let first = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
                let rest: String = chars.collect();
                format!(
                    "{}{}",
                    self.cursor_style.render(&first),
                    self.placeholder_style.render(&rest)
                )
            } else {
                self.placeholder_style.render(&self.placeholder)
            };
            return format!("{}{}", prompt, placeholder);
        }

        let head: String = self.value[..self.pos].iter().collect();
        let mut v = self.text_style.render(&head);

        if self.focus {
            let under = self.value.get(self.pos).copied().unwrap_or(' ');
            v.push_str(&self.cursor_style.render(&under.to_string()));
            if self.pos + 1 < self.value.len() {
                let tail: String = self.value[self.pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&tail));
            }
        } else if self.pos < self.value.len() {
            let tail: String = self.value[self.pos..].iter().collect();
            v.push_str(&self.text_style.render(&tail));
        }

        format!("{}{}", prompt, v)
    }
}

//! Modal notice with a single acknowledgement action.
//!
//! While a notice is open it owns the keyboard: the acknowledge keys close
//! it and everything else is swallowed, so the screen underneath cannot change
//! while the user is being told something.

use crate::error::Error;
use crate::key::Binding;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// What a notice is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The duration field was blank.
    InputRequired,
    /// The duration field could not be parsed.
    InvalidFormat,
    /// A countdown ran to completion.
    Finished,
}

impl Kind {
    /// The message shown for this kind.
    pub fn message(self) -> &'static str {
        match self {
            Kind::InputRequired => "Please enter a time.",
            Kind::InvalidFormat => "Please enter the time as MM:SS.",
            Kind::Finished => "The timer has finished.",
        }
    }
}

impl From<&Error> for Kind {
    fn from(err: &Error) -> Self {
        match err {
            Error::EmptyInput => Kind::InputRequired,
            Error::InvalidDurationFormat(_) => Kind::InvalidFormat,
        }
    }
}

/// An open notice.
#[derive(Debug, Clone)]
pub struct Model {
    kind: Kind,

    /// Title above the message.
    pub title: String,
    /// Label of the acknowledgement action.
    pub button: String,
    /// Keys that acknowledge the notice.
    pub acknowledge: Binding,

    /// Border color.
    pub border_style: Style,
    /// Title style.
    pub title_style: Style,
    /// Button style.
    pub button_style: Style,
}

/// Opens a notice of the given kind.
pub fn new(kind: Kind) -> Model {
    Model {
        kind,
        title: "Notice".to_string(),
        button: "OK".to_string(),
        acknowledge: Binding::new(vec![KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')])
            .with_help("enter", "ok"),
        border_style: Style::new().foreground(Color::from("#7571F9")),
        title_style: Style::new().bold(true),
        button_style: Style::new().bold(true).underline(true),
    }
}

impl Model {
    /// What this notice is about.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Handles a message while the notice is open.
    ///
    /// Returns `true` once the notice has been acknowledged and should be
    /// closed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        msg.downcast_ref::<KeyMsg>()
            .is_some_and(|key_msg| self.acknowledge.matches(key_msg))
    }

    /// Renders the notice as a bordered box.
    pub fn view(&self) -> String {
        let message = self.kind.message();
        let button = format!("[ {} ]", self.button);
        let inner = [self.title.width(), message.width(), button.width()]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 2;

        let border = |s: &str| self.border_style.render(s);
        let row = |content: String, width: usize| {
            let pad = inner.saturating_sub(width);
            let left = pad / 2;
            format!(
                "{}{}{}{}{}",
                border("│"),
                " ".repeat(left),
                content,
                " ".repeat(pad - left),
                border("│")
            )
        };

        let lines = [
            border(&format!("╭{}╮", "─".repeat(inner))),
            row(self.title_style.render(&self.title), self.title.width()),
            row(String::new(), 0),
            row(message.to_string(), message.width()),
            row(String::new(), 0),
            row(self.button_style.render(&button), button.width()),
            border(&format!("╰{}╯", "─".repeat(inner))),
        ];
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use lipgloss_extras::lipgloss;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_kind_from_error() {
        assert_eq!(Kind::from(&Error::EmptyInput), Kind::InputRequired);
        assert_eq!(
            Kind::from(&Error::InvalidDurationFormat("x".to_string())),
            Kind::InvalidFormat
        );
    }

    #[test]
    fn test_acknowledge_keys() {
        let mut notice = new(Kind::Finished);
        assert!(notice.update(&key(KeyCode::Enter)));
        assert!(notice.update(&key(KeyCode::Esc)));
        assert!(!notice.update(&key(KeyCode::Char('s'))));
        assert!(!notice.update(&(Box::new(42u8) as Msg)));
    }

    #[test]
    fn test_view_contains_message() {
        let notice = new(Kind::InputRequired);
        let view = lipgloss::strip_ansi(&notice.view());
        assert!(view.contains("Please enter a time."));
        assert!(view.contains("[ OK ]"));
        assert!(view.contains("Notice"));
    }

    #[test]
    fn test_view_rows_have_equal_width() {
        let notice = new(Kind::Finished);
        let view = lipgloss::strip_ansi(&notice.view());
        let widths: Vec<usize> = view.lines().map(UnicodeWidthStr::width).collect();
        assert_eq!(widths.len(), 7);
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}

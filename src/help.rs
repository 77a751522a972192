//! One-line key help.
//!
//! Renders the bindings of a [`KeyMap`](crate::key::KeyMap) as
//! `key desc • key desc • ...`, skipping disabled bindings and truncating
//! with an ellipsis when a width is set.

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles of the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Key labels.
    pub key: Style,
    /// Descriptions.
    pub desc: Style,
    /// Separator between items, and the ellipsis.
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        Self {
            key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
            separator: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

/// The help line.
#[derive(Debug, Clone)]
pub struct Model {
    /// Maximum visible width; 0 disables truncation.
    pub width: usize,
    /// Text between items.
    pub separator: String,
    /// Text shown when items were cut off.
    pub ellipsis: String,
    /// Styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            width: 0,
            separator: " • ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help line with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the short help of a key map.
    pub fn view<K: KeyMap>(&self, keys: &K) -> String {
        self.short_help_view(keys.short_help())
    }

    /// Renders the given bindings on one line.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let separator = self.styles.separator.render(&self.separator);
        let mut out = String::new();
        let mut total_width = 0;

        for kb in bindings.into_iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let item = format!(
                "{}{} {}",
                sep,
                self.styles.key.render(&help.key),
                self.styles.desc.render(&help.desc)
            );
            let item_width = lipgloss::width_visible(&item);

            if self.width > 0 && total_width + item_width > self.width {
                let tail = format!(" {}", self.styles.separator.render(&self.ellipsis));
                if total_width + lipgloss::width_visible(&tail) < self.width {
                    out.push_str(&tail);
                }
                break;
            }

            total_width += item_width;
            out.push_str(&item);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    struct Keys {
        start: Binding,
        stop: Binding,
        quit: Binding,
    }

    impl KeyMap for Keys {
        fn short_help(&self) -> Vec<&Binding> {
            vec![&self.start, &self.stop, &self.quit]
        }
    }

    fn keys() -> Keys {
        Keys {
            start: Binding::new(vec![KeyCode::Enter]).with_help("enter", "start"),
            stop: Binding::new(vec![KeyCode::Char('p')]).with_help("p", "stop"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
        }
    }

    #[test]
    fn test_short_help() {
        let help = Model::new();
        let view = lipgloss::strip_ansi(&help.view(&keys()));
        assert_eq!(view, "enter start • p stop • q quit");
    }

    #[test]
    fn test_skips_disabled() {
        let help = Model::new();
        let mut keys = keys();
        keys.stop.set_enabled(false);
        let view = lipgloss::strip_ansi(&help.view(&keys));
        assert_eq!(view, "enter start • q quit");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let help = Model {
            width: 16,
            ..Model::new()
        };
        let view = lipgloss::strip_ansi(&help.view(&keys()));
        assert_eq!(view, "enter start …");
    }
}

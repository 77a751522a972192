//! The timer screen.
//!
//! Composes the duration field, the countdown controller with its radial
//! view, the modal notice and the help line into one bubbletea-rs model.
//!
//! | key | action |
//! |-----|--------|
//! | `enter`, `s` | start or resume |
//! | `p`, `space` | stop |
//! | `c`, `esc` | cancel |
//! | `q`, `ctrl+c` | quit |
//!
//! While a notice is open, key presses only acknowledge it. Ticks, frames and
//! the deferred reset keep flowing underneath.

use crate::config::Config;
use crate::countdown::{self, FinishedMsg};
use crate::duration::parse_duration;
use crate::field;
use crate::help;
use crate::key::{Binding, KeyMap};
use crate::notice::{self, Kind};
use crate::radial::{self, with_color, with_radius};
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use tracing::{info, warn};

/// Key bindings of the screen.
#[derive(Debug, Clone)]
pub struct Keys {
    /// Start or resume the countdown.
    pub start: Binding,
    /// Stop the countdown, keeping its progress.
    pub stop: Binding,
    /// Cancel the countdown.
    pub cancel: Binding,
    /// Leave the program.
    pub quit: Binding,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            start: Binding::new(vec![KeyCode::Enter, KeyCode::Char('s')]).with_help("s", "start"),
            stop: Binding::new(vec![KeyCode::Char('p'), KeyCode::Char(' ')]).with_help("p", "stop"),
            cancel: Binding::new(vec![KeyCode::Char('c'), KeyCode::Esc]).with_help("c", "cancel"),
            quit: Binding::new(vec![KeyCode::Char('q')])
                .with_press(KeyCode::Char('c'), KeyModifiers::CONTROL)
                .with_help("q", "quit"),
        }
    }
}

impl KeyMap for Keys {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.start, &self.stop, &self.cancel, &self.quit]
    }
}

/// The timer screen model.
pub struct App {
    /// Duration input.
    pub field: field::Model,
    /// Countdown controller and its view.
    pub countdown: countdown::Model,
    /// Key bindings.
    pub keys: Keys,
    /// Help line.
    pub help: help::Model,
    notice: Option<notice::Model>,
    title_style: Style,
    status_style: Style,
}

impl App {
    /// Builds the screen from a configuration.
    ///
    /// The dial color is fixed here and cannot change afterwards.
    pub fn new(config: &Config) -> Self {
        let radial = radial::new(&[with_color(config.color.clone()), with_radius(config.radius)]);
        let countdown = countdown::Model::new(radial).with_reset_delay(config.reset_delay());

        let mut field = field::new();
        field.set_value(&config.duration);
        field.focus();

        Self {
            field,
            countdown,
            keys: Keys::default(),
            help: help::Model::new(),
            notice: None,
            title_style: Style::new().bold(true),
            status_style: Style::new().faint(true),
        }
    }

    /// The open notice, if any.
    pub fn notice(&self) -> Option<Kind> {
        self.notice.as_ref().map(notice::Model::kind)
    }

    fn show_notice(&mut self, kind: Kind) {
        self.notice = Some(notice::new(kind));
    }

    /// Handles the start trigger.
    pub fn start(&mut self) -> Option<Cmd> {
        let text = self.field.value();

        if text.trim().is_empty() {
            warn!("start requested without a duration");
            self.show_notice(Kind::InputRequired);
            return None;
        }
        if self.countdown.running() {
            return None;
        }

        match parse_duration(&text) {
            Ok(secs) => self.countdown.start(secs),
            Err(err) => {
                warn!(%err, "rejected duration");
                self.show_notice(Kind::from(&err));
                None
            }
        }
    }

    /// Handles the stop trigger.
    pub fn stop(&mut self) {
        self.countdown.stop();
    }

    /// Handles the cancel trigger.
    ///
    /// Cancelling while no countdown is running with an empty field also asks
    /// for a time.
    pub fn cancel(&mut self) -> Option<Cmd> {
        let was_running = self.countdown.running();
        let cmd = self.countdown.cancel();
        if !was_running && self.field.is_empty() {
            self.show_notice(Kind::InputRequired);
        }
        cmd
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Option<Cmd>> {
        if self.keys.quit.matches(key_msg) {
            info!("quitting");
            return Some(Some(quit()));
        }
        if self.keys.start.matches(key_msg) {
            return Some(self.start());
        }
        if self.keys.stop.matches(key_msg) {
            self.stop();
            return Some(None);
        }
        if self.keys.cancel.matches(key_msg) {
            return Some(self.cancel());
        }
        None
    }

    fn status(&self) -> String {
        match self.countdown.session() {
            Some(s) if s.running => format!(
                "running · {}% of {}",
                self.countdown.progress(),
                crate::duration::format_clock(s.duration_secs)
            ),
            Some(_) => format!("stopped at {}%", self.countdown.resume_offset()),
            None => "ready".to_string(),
        }
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(&Config::current()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(notice) = self.notice.as_mut() {
            if msg.is::<KeyMsg>() {
                if notice.update(&msg) {
                    self.notice = None;
                }
                return None;
            }
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if let Some(cmd) = self.handle_key(key_msg) {
                return cmd;
            }
            return self.field.update(msg);
        }

        if let Some(finished) = msg.downcast_ref::<FinishedMsg>() {
            if finished.id == self.countdown.id() {
                self.show_notice(Kind::Finished);
            }
            return None;
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let mut sections = vec![
            self.title_style.render("Radial Timer"),
            self.field.view(),
            String::new(),
            self.countdown.view(),
            String::new(),
            self.status_style.render(&self.status()),
        ];

        match &self.notice {
            Some(notice) => {
                sections.push(String::new());
                sections.push(notice.view());
            }
            None => sections.push(self.help.view(&self.keys)),
        }

        sections.join("\n")
    }
}

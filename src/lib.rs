#![warn(missing_docs)]

//! # radial-timer
//!
//! A countdown timer for the terminal, built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//! The user types a duration as `MM:SS`, starts, stops or cancels the
//! countdown, and watches a dial fill clockwise as time elapses.
//!
//! ## Overview
//!
//! Every component follows the Elm Architecture: it owns its state, handles
//! messages in `update()` and renders itself in `view()`. Periodic work is a
//! command that delivers a message carrying the sender's id and a tag, so
//! stale messages from a cancelled run are recognised and dropped.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`countdown::Model`] | Session lifecycle and elapsed-time to progress mapping |
//! | [`radial::Model`] | Animated pie-slice dial for a progress in `[0, 100]` |
//! | [`timer::Model`] | Repeating tick source with synchronous stop |
//! | [`field::Model`] | `MM:SS` input field |
//! | [`notice::Model`] | Modal notice with one acknowledgement action |
//! | [`help::Model`] | One-line key help |
//! | [`App`] | The timer screen composing all of the above |
//!
//! ## Driving a countdown
//!
//! ```rust
//! use radial_timer::prelude::*;
//!
//! let mut countdown = Countdown::new(radial_new(&[radial_with_color("#00FF00".to_string())]));
//! let secs = parse_duration("00:05").unwrap();
//! assert!(countdown.start(secs).is_some());
//!
//! for _ in 0..5 {
//!     let tick = countdown.tick_msg();
//!     countdown.update(Box::new(tick));
//! }
//! assert_eq!(countdown.progress(), 100);
//! assert!(!countdown.running());
//! ```

pub mod app;
pub mod config;
pub mod countdown;
pub mod duration;
pub mod error;
pub mod field;
pub mod help;
pub mod key;
pub mod logging;
pub mod notice;
pub mod radial;
pub mod timer;

pub use app::{App, Keys};
pub use config::Config;
pub use countdown::{
    FinishedMsg as CountdownFinishedMsg, Model as Countdown, ResetMsg as CountdownResetMsg,
    Session,
};
pub use duration::{format_clock, parse_duration};
pub use error::{Error, Result};
pub use field::Model as DurationField;
pub use help::Model as HelpModel;
pub use key::{Binding, KeyMap, KeyPress};
pub use notice::{Kind as NoticeKind, Model as Notice};
pub use radial::{
    new as radial_new, with_animation_duration as radial_with_animation_duration,
    with_color as radial_with_color, with_fill_characters as radial_with_fill_characters,
    with_radius as radial_with_radius, without_percentage as radial_without_percentage,
    FrameMsg as RadialFrameMsg, Model as Radial, RadialOption,
};
pub use timer::{Model as Timer, TickMsg as TimerTickMsg};

/// Prelude module for convenient imports.
///
/// ```rust
/// use radial_timer::prelude::*;
///
/// let countdown = Countdown::default();
/// assert!(!countdown.running());
/// ```
pub mod prelude {
    pub use crate::app::{App, Keys};
    pub use crate::config::Config;
    pub use crate::countdown::{
        FinishedMsg as CountdownFinishedMsg, Model as Countdown, ResetMsg as CountdownResetMsg,
        Session,
    };
    pub use crate::duration::{format_clock, parse_duration};
    pub use crate::error::{Error, Result};
    pub use crate::field::Model as DurationField;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::notice::{Kind as NoticeKind, Model as Notice};
    pub use crate::radial::{
        new as radial_new, with_animation_duration as radial_with_animation_duration,
        with_color as radial_with_color, with_fill_characters as radial_with_fill_characters,
        with_radius as radial_with_radius, without_percentage as radial_without_percentage,
        Model as Radial,
    };
    pub use crate::timer::Model as Timer;
}

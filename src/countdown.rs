//! Countdown controller.
//!
//! Owns the lifecycle of one countdown session and the [`radial`](crate::radial)
//! view it drives. Each one-second tick converts the elapsed time into a whole
//! percent and pushes it to the view:
//!
//! ```text
//! progress = start_progress + floor(elapsed_ms * 100 / (duration_s * 1000))
//! ```
//!
//! The result is clamped to 100 before it is displayed. Once it reaches 100,
//! or the elapsed time reaches the session duration, the session finalizes:
//! the view is forced to 100, a [`FinishedMsg`] is emitted and, after a short
//! grace delay, a deferred reset brings the view back to 0.
//!
//! Stopping remembers the current progress so the next start resumes from it.
//! Cancelling forgets it and drives the view back to 0.
//!
//! # Example
//!
//! ```rust
//! use radial_timer::countdown::Model;
//!
//! let mut countdown = Model::default();
//! assert!(countdown.start(60).is_some());
//!
//! for _ in 0..30 {
//!     let tick = countdown.tick_msg();
//!     countdown.update(Box::new(tick));
//! }
//! assert_eq!(countdown.progress(), 50);
//!
//! countdown.cancel();
//! assert_eq!(countdown.progress(), 0);
//! assert!(!countdown.running());
//! ```

use crate::radial::{self, FrameMsg};
use crate::timer::{self, TickMsg};
use bubbletea_rs::{batch, tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Grace delay between completion and the reset back to 0.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(800);

/// Emitted once when a session runs to completion.
#[derive(Debug, Clone)]
pub struct FinishedMsg {
    /// Identifier of the countdown that finished.
    pub id: i64,
}

/// Deferred reset scheduled after completion.
///
/// Carries the generation that was current when it was scheduled. Starting or
/// cancelling a session moves the generation on, which turns a pending reset
/// into a no-op.
#[derive(Debug, Clone)]
pub struct ResetMsg {
    id: i64,
    generation: u64,
}

/// State of one active or paused countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Total duration of the session in seconds.
    pub duration_secs: u64,
    /// Progress the session resumed from.
    pub start_progress: u8,
    /// Whether the session is ticking.
    pub running: bool,
}

/// The countdown controller.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    timer: timer::Model,
    radial: radial::Model,
    session: Option<Session>,
    progress: u8,
    resume_offset: u8,
    generation: u64,

    /// Delay between completion and the reset back to 0.
    pub reset_delay: Duration,
}

impl Model {
    /// Creates an idle controller driving the given view.
    pub fn new(radial: radial::Model) -> Self {
        Self {
            id: next_id(),
            timer: timer::new(),
            radial,
            session: None,
            progress: 0,
            resume_offset: 0,
            generation: 0,
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }

    /// Sets the grace delay before the post-completion reset.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Unique identifier of this controller.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether a session is currently ticking.
    pub fn running(&self) -> bool {
        self.session.is_some_and(|s| s.running)
    }

    /// The current session, running or paused.
    pub fn session(&self) -> Option<Session> {
        self.session
    }

    /// Progress last computed, in `[0, 100]`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Progress the next [`start`](Self::start) resumes from.
    pub fn resume_offset(&self) -> u8 {
        self.resume_offset
    }

    /// The view this controller drives.
    pub fn radial(&self) -> &radial::Model {
        &self.radial
    }

    /// Starts a session of `duration_secs`, resuming from the remembered offset.
    ///
    /// Returns `None` without touching any state when the duration is zero or
    /// a session is already running.
    pub fn start(&mut self, duration_secs: u64) -> Option<Cmd> {
        if duration_secs == 0 {
            debug!("ignoring start with zero duration");
            return None;
        }
        if self.running() {
            debug!("ignoring start while a session is running");
            return None;
        }

        let start_progress = self.resume_offset;
        self.session = Some(Session {
            duration_secs,
            start_progress,
            running: true,
        });
        self.progress = start_progress;
        self.generation += 1;

        info!(duration_secs, start_progress, "countdown started");

        Some(batch(vec![
            self.timer.start(),
            self.radial.set_progress_animated(start_progress),
        ]))
    }

    /// Halts ticking and remembers the current progress. No-op when idle.
    pub fn stop(&mut self) {
        let Some(session) = self.session.as_mut().filter(|s| s.running) else {
            return;
        };

        self.timer.stop();
        session.running = false;
        self.resume_offset = self.progress;

        info!(progress = self.progress, "countdown stopped");
    }

    /// Ends any session, forgets the remembered progress and drives the view
    /// back to 0.
    ///
    /// Returns the animation command when the view had something to undo.
    pub fn cancel(&mut self) -> Option<Cmd> {
        if self.session.take().is_some() {
            info!(progress = self.progress, "countdown cancelled");
        }

        self.timer.stop();
        self.progress = 0;
        self.resume_offset = 0;
        self.generation += 1;

        if self.radial.target() == 0 && self.radial.progress() == 0 {
            return None;
        }
        Some(self.radial.set_progress_animated(0))
    }

    /// Builds the tick message the running session expects next.
    pub fn tick_msg(&self) -> TickMsg {
        self.timer.tick_msg()
    }

    /// Builds the reset message that the last completion scheduled.
    pub fn reset_msg(&self) -> ResetMsg {
        ResetMsg {
            id: self.id,
            generation: self.generation,
        }
    }

    /// Routes tick, animation frame and reset messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.is::<TickMsg>() {
            let next_tick = self.timer.update(msg)?;
            return Some(self.on_tick(next_tick));
        }

        if msg.is::<FrameMsg>() {
            return self.radial.update(msg);
        }

        if let Some(reset) = msg.downcast_ref::<ResetMsg>() {
            return self.on_reset(reset);
        }

        None
    }

    fn on_tick(&mut self, next_tick: Cmd) -> Cmd {
        let Some(session) = self.session else {
            return next_tick;
        };

        let elapsed_ms = self.timer.elapsed().as_millis();
        let duration_ms = u128::from(session.duration_secs) * 1000;
        let computed = u128::from(session.start_progress) + elapsed_ms * 100 / duration_ms;

        // Clamped before it is ever displayed
        self.progress = computed.min(100) as u8;
        debug!(progress = self.progress, elapsed_ms, "tick");

        if computed >= 100 || elapsed_ms >= duration_ms {
            return self.finish();
        }

        batch(vec![next_tick, self.radial.set_progress_animated(self.progress)])
    }

    fn finish(&mut self) -> Cmd {
        self.timer.stop();
        self.session = None;
        self.progress = 100;
        self.resume_offset = 0;
        self.generation += 1;

        info!("countdown finished");

        let id = self.id;
        let generation = self.generation;
        batch(vec![
            self.radial.set_progress_animated(100),
            bubbletea_tick(Duration::from_nanos(1), move |_| {
                Box::new(FinishedMsg { id }) as Msg
            }),
            bubbletea_tick(self.reset_delay, move |_| {
                Box::new(ResetMsg { id, generation }) as Msg
            }),
        ])
    }

    fn on_reset(&mut self, reset: &ResetMsg) -> Option<Cmd> {
        if reset.id != self.id || reset.generation != self.generation || self.session.is_some() {
            debug!("dropping stale reset");
            return None;
        }

        self.progress = 0;
        self.resume_offset = 0;
        Some(self.radial.set_progress_animated(0))
    }

    /// Renders the view.
    pub fn view(&self) -> String {
        self.radial.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(radial::new(&[]))
    }
}

//! Repeating tick source for bubbletea-rs applications.
//!
//! A [`Model`] emits a [`TickMsg`] once per interval while it is running and
//! counts the ticks it has accepted. Elapsed time is derived from that count,
//! not from a wall clock, which keeps the countdown deterministic: whoever
//! delivers the tick messages decides how fast time passes.
//!
//! Cancellation is synchronous. [`Model::stop`] flips the running flag and
//! bumps an internal tag, so a tick that is already scheduled is rejected when
//! it arrives instead of advancing a stopped timer.
//!
//! # Basic Usage
//!
//! ```rust
//! use radial_timer::timer::new;
//!
//! let mut ticker = new();
//! let _cmd = ticker.start();
//! assert!(ticker.running());
//!
//! let tick = ticker.tick_msg();
//! assert!(ticker.update(Box::new(tick)).is_some());
//! assert_eq!(ticker.ticks(), 1);
//!
//! ticker.stop();
//! assert!(!ticker.running());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default interval between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Message sent once per interval while a timer runs.
///
/// The `id` routes the message to the timer that scheduled it. The private tag
/// identifies the run that scheduled it; ticks from an earlier run are dropped.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Identifier of the timer this tick belongs to.
    pub id: i64,
    tag: i64,
}

/// A start/stop repeating timer.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between ticks.
    pub interval: Duration,

    id: i64,
    tag: i64,
    running: bool,
    ticks: u64,
}

/// Creates a stopped timer that ticks once per second.
pub fn new() -> Model {
    new_with_interval(DEFAULT_INTERVAL)
}

/// Creates a stopped timer with a custom tick interval.
pub fn new_with_interval(interval: Duration) -> Model {
    Model {
        interval,
        id: next_id(),
        tag: 0,
        running: false,
        ticks: 0,
    }
}

impl Model {
    /// Unique identifier of this timer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether ticks are currently being accepted.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Number of ticks accepted since the last [`start`](Self::start).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Time elapsed since the last start, measured in accepted ticks.
    pub fn elapsed(&self) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(self.ticks).unwrap_or(u32::MAX))
    }

    /// Starts a fresh run and returns the command scheduling its first tick.
    ///
    /// The tick count goes back to zero. Any tick still in flight from an
    /// earlier run is invalidated.
    pub fn start(&mut self) -> Cmd {
        self.tag += 1;
        self.ticks = 0;
        self.running = true;
        self.tick()
    }

    /// Stops the timer. Ticks already scheduled are ignored when they arrive.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.tag += 1;
        }
    }

    /// Builds the tick message the current run expects next.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Accepts a tick belonging to the current run and schedules the next one.
    ///
    /// Returns `None` for every other message, for ticks addressed to another
    /// timer, for stale ticks, and while stopped.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;

        if !self.running || tick_msg.id != self.id || tick_msg.tag != self.tag {
            return std::option::Option::None;
        }

        self.ticks += 1;
        std::option::Option::Some(self.tick())
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

//! Radial progress component for bubbletea-rs applications.
//!
//! Renders a filled disc in the terminal whose pie slice grows clockwise from
//! 12 o'clock as progress goes from 0 to 100. Changing the progress animates
//! the displayed value toward the new target over a fixed duration.
//!
//! # Basic Usage
//!
//! ```rust
//! use radial_timer::radial::{new, with_color, with_radius};
//!
//! let radial = new(&[with_radius(4), with_color("#00FF00".to_string())]);
//! assert_eq!(radial.progress(), 0);
//! ```
//!
//! # Animation
//!
//! ```rust
//! use radial_timer::radial::new;
//!
//! let mut radial = new(&[]);
//!
//! // Returns the command that drives the first animation frame
//! let _cmd = radial.set_progress_animated(75);
//! assert_eq!(radial.target(), 75);
//! assert!(radial.is_animating());
//! ```
//!
//! Setting a new target while an animation is in flight abandons it and
//! starts a new one from whatever value is currently displayed.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::f64::consts::PI;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

// Internal ID management for radial instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const FPS: u32 = 60;
const DEFAULT_RADIUS: u16 = 8;
const DEFAULT_COLOR: &str = "#FF0000";
const DEFAULT_EMPTY_COLOR: &str = "#606060";
const DEFAULT_ANIMATION: Duration = Duration::from_millis(300);

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Configuration options for a radial progress view.
///
/// Options are applied in order by [`new`], so a later option wins over an
/// earlier one that sets the same field.
pub enum RadialOption {
    /// Fill color of the swept slice, as a hex code or color name.
    WithColor(String),
    /// Radius of the disc in terminal rows.
    WithRadius(u16),
    /// Characters for the filled slice and the unfilled remainder.
    WithFillCharacters(char, char),
    /// Hides the percentage caption under the disc.
    WithoutPercentage,
    /// Length of one animated transition.
    WithAnimationDuration(Duration),
}

impl RadialOption {
    fn apply(&self, m: &mut Model) {
        match self {
            RadialOption::WithColor(color) => {
                m.full_color = color.clone();
            }
            RadialOption::WithRadius(radius) => {
                m.radius = *radius;
            }
            RadialOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            RadialOption::WithoutPercentage => {
                m.show_percentage = false;
            }
            RadialOption::WithAnimationDuration(duration) => {
                m.animation = *duration;
            }
        }
    }
}

/// Sets the fill color of the swept slice.
pub fn with_color(color: String) -> RadialOption {
    RadialOption::WithColor(color)
}

/// Sets the disc radius in rows.
pub fn with_radius(radius: u16) -> RadialOption {
    RadialOption::WithRadius(radius)
}

/// Sets the characters used for filled and empty cells.
pub fn with_fill_characters(full: char, empty: char) -> RadialOption {
    RadialOption::WithFillCharacters(full, empty)
}

/// Hides the percentage caption.
pub fn without_percentage() -> RadialOption {
    RadialOption::WithoutPercentage
}

/// Sets how long a transition between two values takes.
pub fn with_animation_duration(duration: Duration) -> RadialOption {
    RadialOption::WithAnimationDuration(duration)
}

/// Message indicating that the next animation frame is due.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    id: i64,
    tag: i64,
}

/// Ease-in-out curve mapping linear time in `[0, 1]` to animation progress.
fn ease_in_out(t: f64) -> f64 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// The radial progress view.
///
/// Progress values are whole percent in `[0, 100]`. The displayed value is
/// also a whole number, interpolated from where the last animation left off.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,

    // Bumped on every new target so frames of an abandoned animation are dropped.
    tag: i64,

    /// Radius of the disc in rows.
    pub radius: u16,

    /// Character for cells inside the swept slice.
    pub full: char,
    /// Color of the swept slice.
    pub full_color: String,

    /// Character for cells of the disc outside the slice.
    pub empty: char,
    /// Color of the unswept part of the disc.
    pub empty_color: String,

    /// Whether to render the percentage caption.
    pub show_percentage: bool,
    /// Style for the percentage caption.
    pub percentage_style: Style,

    /// Length of one animated transition.
    pub animation: Duration,

    shown: u8,
    from: u8,
    target: u8,
    frame: u32,
    animating: bool,
}

/// Creates a radial progress view with the given options.
pub fn new(opts: &[RadialOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 0,
        radius: DEFAULT_RADIUS,
        full: '█',
        full_color: DEFAULT_COLOR.to_string(),
        empty: '·',
        empty_color: DEFAULT_EMPTY_COLOR.to_string(),
        show_percentage: true,
        percentage_style: Style::new().bold(true),
        animation: DEFAULT_ANIMATION,
        shown: 0,
        from: 0,
        target: 0,
        frame: 0,
        animating: false,
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// The value currently displayed.
    pub fn progress(&self) -> u8 {
        self.shown
    }

    /// The value the view is animating toward, or resting at.
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    fn total_frames(&self) -> u32 {
        let nanos = self.animation.as_nanos() * u128::from(FPS) / 1_000_000_000;
        u32::try_from(nanos).unwrap_or(u32::MAX)
    }

    /// Cancels any in-flight animation and animates toward `target`.
    ///
    /// Targets above 100 are clamped. The returned command delivers the first
    /// [`FrameMsg`]; route frame messages back through [`update`](Self::update).
    pub fn set_progress_animated(&mut self, target: u8) -> Cmd {
        self.target = target.min(100);
        self.from = self.shown;
        self.frame = 0;
        self.tag += 1;
        self.animating = true;

        if self.total_frames() == 0 {
            self.shown = self.target;
            self.animating = false;
        }

        self.next_frame()
    }

    /// Builds the frame message the running animation expects next.
    pub fn frame_msg(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / u64::from(FPS));

        bubbletea_tick(duration, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }

    /// Advances the animation by one frame.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        let frame_msg = msg.downcast_ref::<FrameMsg>()?;

        if frame_msg.id != self.id || frame_msg.tag != self.tag || !self.animating {
            return std::option::Option::None;
        }

        self.frame += 1;
        let total = self.total_frames();
        if self.frame >= total {
            self.shown = self.target;
            self.animating = false;
            return std::option::Option::None;
        }

        let t = ease_in_out(f64::from(self.frame) / f64::from(total));
        let from = f64::from(self.from);
        let to = f64::from(self.target);
        self.shown = (from + (to - from) * t).round().clamp(0.0, 100.0) as u8;

        std::option::Option::Some(self.next_frame())
    }

    /// Renders the currently displayed value.
    pub fn view(&self) -> String {
        self.view_as(self.shown)
    }

    /// Renders the disc for an arbitrary progress value.
    pub fn view_as(&self, progress: u8) -> String {
        let progress = progress.min(100);
        let mut lines = self.disc_lines(progress);

        if self.show_percentage {
            let caption = format!("{:3}%", progress);
            let disc_width = usize::from(self.radius) * 4 + 1;
            let pad = disc_width.saturating_sub(caption.width()) / 2;
            lines.push(format!(
                "{}{}",
                " ".repeat(pad),
                self.percentage_style.render(&caption)
            ));
        }

        lines.join("\n")
    }

    fn disc_lines(&self, progress: u8) -> Vec<String> {
        let radius = i32::from(self.radius);
        let sweep = 360.0 * f64::from(progress) / 100.0;
        let limit = f64::from(radius) + 0.25;

        let full_style = Style::new().foreground(Color::from(self.full_color.as_str()));
        let empty_style = Style::new().foreground(Color::from(self.empty_color.as_str()));

        let mut lines = Vec::with_capacity(self.radius as usize * 2 + 1);
        for row in -radius..=radius {
            let mut cells: Vec<Option<bool>> = Vec::new();
            for col in -radius * 2..=radius * 2 {
                let x = f64::from(col) / CELL_ASPECT;
                let y = f64::from(row);
                let dist = (x * x + y * y).sqrt();

                if dist > limit {
                    cells.push(None);
                } else if dist < 0.5 {
                    cells.push(Some(progress > 0));
                } else {
                    cells.push(Some(clockwise_angle(x, y) < sweep));
                }
            }
            lines.push(self.render_row(&cells, &full_style, &empty_style));
        }
        lines
    }

    // Styles runs of identical cells together instead of cell by cell.
    fn render_row(&self, cells: &[Option<bool>], full_style: &Style, empty_style: &Style) -> String {
        let mut out = String::new();
        let mut i = 0;
        while i < cells.len() {
            let kind = cells[i];
            let run = cells[i..].iter().take_while(|c| **c == kind).count();
            match kind {
                None => out.push_str(&" ".repeat(run)),
                Some(true) => out.push_str(&full_style.render(&self.full.to_string().repeat(run))),
                Some(false) => {
                    out.push_str(&empty_style.render(&self.empty.to_string().repeat(run)))
                }
            }
            i += run;
        }
        out.trim_end().to_string()
    }
}

/// Angle in degrees of the point `(x, y)`, measured clockwise from 12 o'clock.
///
/// `y` grows downward, as rows do on screen.
fn clockwise_angle(x: f64, y: f64) -> f64 {
    let degrees = x.atan2(-y).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        (new(&[]), std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    fn count(view: &str, ch: char) -> usize {
        lipgloss::strip_ansi(view).chars().filter(|&c| c == ch).count()
    }

    fn run_to_rest(radial: &mut Model) -> Vec<u8> {
        let mut seen = Vec::new();
        while radial.is_animating() {
            let frame = radial.frame_msg();
            std::mem::drop(radial.update(Box::new(frame)));
            seen.push(radial.progress());
        }
        seen
    }

    #[test]
    fn test_new_defaults() {
        let radial = new(&[]);
        assert_eq!(radial.radius, DEFAULT_RADIUS);
        assert_eq!(radial.full_color, "#FF0000");
        assert_eq!(radial.full, '█');
        assert_eq!(radial.empty, '·');
        assert!(radial.show_percentage);
        assert_eq!(radial.progress(), 0);
        assert!(!radial.is_animating());
    }

    #[test]
    fn test_options_apply() {
        let radial = new(&[
            with_color("#00FF00".to_string()),
            with_radius(3),
            with_fill_characters('#', '.'),
            without_percentage(),
            with_animation_duration(Duration::from_millis(100)),
        ]);
        assert_eq!(radial.full_color, "#00FF00");
        assert_eq!(radial.radius, 3);
        assert_eq!(radial.full, '#');
        assert_eq!(radial.empty, '.');
        assert!(!radial.show_percentage);
        assert_eq!(radial.animation, Duration::from_millis(100));
    }

    #[test]
    fn test_animation_reaches_target_monotonically() {
        let mut radial = new(&[]);
        std::mem::drop(radial.set_progress_animated(80));
        assert_eq!(radial.progress(), 0);

        let seen = run_to_rest(&mut radial);
        assert_eq!(radial.progress(), 80);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        // 300ms at 60fps
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn test_new_target_cancels_running_animation() {
        let mut radial = new(&[]);
        std::mem::drop(radial.set_progress_animated(100));
        for _ in 0..9 {
            let frame = radial.frame_msg();
            std::mem::drop(radial.update(Box::new(frame)));
        }
        let midway = radial.progress();
        assert!(midway > 0 && midway < 100);

        let stale = radial.frame_msg();
        std::mem::drop(radial.set_progress_animated(0));
        assert!(radial.update(Box::new(stale)).is_none());
        assert_eq!(radial.progress(), midway);

        run_to_rest(&mut radial);
        assert_eq!(radial.progress(), 0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut radial = new(&[with_animation_duration(Duration::ZERO)]);
        std::mem::drop(radial.set_progress_animated(42));
        assert_eq!(radial.progress(), 42);
        assert!(!radial.is_animating());
    }

    #[test]
    fn test_target_clamped() {
        let mut radial = new(&[]);
        std::mem::drop(radial.set_progress_animated(150));
        assert_eq!(radial.target(), 100);
    }

    #[test]
    fn test_frame_with_wrong_id_rejected() {
        let mut radial = new(&[]);
        let other = new(&[]);
        std::mem::drop(radial.set_progress_animated(50));
        assert!(radial.update(Box::new(other.frame_msg())).is_none());
        assert_eq!(radial.progress(), 0);
    }

    #[test]
    fn test_view_empty_and_full() {
        let radial = new(&[with_radius(4), without_percentage()]);
        let empty = radial.view_as(0);
        let full = radial.view_as(100);

        assert_eq!(count(&empty, '█'), 0);
        assert_eq!(count(&full, '·'), 0);
        assert_eq!(count(&empty, '·'), count(&full, '█'));
        assert_eq!(lipgloss::strip_ansi(&full).lines().count(), 9);
    }

    #[test]
    fn test_view_fill_grows_with_progress() {
        let radial = new(&[with_radius(6), without_percentage()]);
        let quarter = count(&radial.view_as(25), '█');
        let half = count(&radial.view_as(50), '█');
        let most = count(&radial.view_as(90), '█');
        let total = count(&radial.view_as(100), '█');

        assert!(quarter < half && half < most && most < total);
        // Half the disc, give or take the cells on the dividing line
        assert!(half.abs_diff(total / 2) <= usize::from(radial.radius) * 2 + 1);
    }

    #[test]
    fn test_view_quarter_fills_upper_right() {
        let radial = new(&[with_radius(4), without_percentage()]);
        let view = lipgloss::strip_ansi(&radial.view_as(25));
        let lines: Vec<&str> = view.lines().collect();

        // Top row, right of center is filled; left of center is not
        let top: Vec<char> = lines[1].chars().collect();
        let center = 8;
        assert_eq!(top[center + 2], '█');
        assert_eq!(top[center - 2], '·');
    }

    #[test]
    fn test_view_percentage_caption() {
        let radial = new(&[with_radius(2)]);
        let view = lipgloss::strip_ansi(&radial.view_as(75));
        assert!(view.lines().last().is_some_and(|l| l.trim() == "75%"));
    }

    #[test]
    fn test_clockwise_angle() {
        assert!((clockwise_angle(0.0, -1.0) - 0.0).abs() < 1e-9);
        assert!((clockwise_angle(1.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((clockwise_angle(0.0, 1.0) - 180.0).abs() < 1e-9);
        assert!((clockwise_angle(-1.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert!(ease_in_out(0.0).abs() < 1e-9);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-9);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bubbletea_init() {
        let (radial, cmd) = <Model as BubbleTeaModel>::init();
        assert!(cmd.is_none());
        assert_eq!(radial.progress(), 0);
    }
}

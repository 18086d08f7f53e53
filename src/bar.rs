//! Animated, tinted bar component for Bubble Tea applications.
//!
//! The bar fills a fraction of its container, plays a scale-in entry
//! animation whenever its look changes, and overlays a percentage label that
//! counts up in step with the bar's growth. Each corner of the surrounding
//! frame can be rounded independently.
//!
//! # Basic Usage
//!
//! ```rust
//! use tintbar::bar::{new, with_fraction, with_tint, with_width};
//!
//! // Create a bar with default settings
//! let bar = new(&[]);
//!
//! // Create a customized bar using the option pattern
//! let bar = new(&[
//!     with_width(50),
//!     with_fraction(0.75),
//!     with_tint("#7F007F".to_string()),
//! ]);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use tintbar::bar;
//!
//! struct MyApp {
//!     bar: bar::Model,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let bar = bar::new(&[bar::with_fraction(0.4)]);
//!         let cmd = bar.init();
//!         (Self { bar }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Forward tick messages so the counter and animation advance
//!         self.bar.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.bar.view()
//!     }
//! }
//! ```
//!
//! # Restart vs. re-round
//!
//! Setters fall into two classes. Changing the fraction, tint or label
//! styling restarts the entry animation and the counter from zero and
//! returns the `Cmd` that drives the new cycle. Changing a corner flag or
//! the corner radius only changes how the frame is drawn on the next
//! `view()`; the running counter is left alone.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss::blending::blend_1d;
use lipgloss::Color;
use lipgloss::Style;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

// Internal ID management for bar instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Counter cadence: the label advances 20 times per second, whatever the
/// animation duration is.
const TICKS_PER_SECOND: u32 = 20;

const DEFAULT_WIDTH: i32 = 40;
const DEFAULT_FRACTION: f64 = 0.5;
const DEFAULT_TINT: &str = "#0000FF";
const DEFAULT_LABEL_COLOR: &str = "#FFFFFF";
const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// Default typography for the counter label.
static DEFAULT_LABEL_STYLE: Lazy<Style> = Lazy::new(|| Style::new().bold(true));

/// One corner of the bar's frame.
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Corner {
    /// The top-left corner.
    TopLeft,
    /// The top-right corner.
    TopRight,
    /// The bottom-right corner.
    BottomRight,
    /// The bottom-left corner.
    BottomLeft,
}

impl Corner {
    /// All four corners, in CSS order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];
}

/// The set of corners currently marked for rounding.
///
/// Corners are toggled independently; the set only takes visible effect
/// while the bar's corner radius is above zero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CornerSet {
    top_left: bool,
    top_right: bool,
    bottom_right: bool,
    bottom_left: bool,
}

impl CornerSet {
    /// The empty set: every corner square.
    pub const fn none() -> Self {
        Self {
            top_left: false,
            top_right: false,
            bottom_right: false,
            bottom_left: false,
        }
    }

    /// All four corners rounded.
    pub const fn all() -> Self {
        Self {
            top_left: true,
            top_right: true,
            bottom_right: true,
            bottom_left: true,
        }
    }

    /// Adds a corner to the set.
    pub fn insert(&mut self, corner: Corner) {
        self.set(corner, true);
    }

    /// Removes a corner from the set.
    pub fn remove(&mut self, corner: Corner) {
        self.set(corner, false);
    }

    /// Adds or removes a corner. Setting a corner to its current state is a
    /// no-op.
    pub fn set(&mut self, corner: Corner, rounded: bool) {
        match corner {
            Corner::TopLeft => self.top_left = rounded,
            Corner::TopRight => self.top_right = rounded,
            Corner::BottomRight => self.bottom_right = rounded,
            Corner::BottomLeft => self.bottom_left = rounded,
        }
    }

    /// Reports whether a corner is in the set.
    pub fn contains(&self, corner: Corner) -> bool {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    /// Reports whether no corner is marked for rounding.
    pub fn is_empty(&self) -> bool {
        !(self.top_left || self.top_right || self.bottom_right || self.bottom_left)
    }
}

/// Message sent on every counter tick while a bar cycle is running.
///
/// Ticks carry the identity of the bar that scheduled them plus a cycle tag,
/// so a bar never advances on a tick meant for another instance or left over
/// from a cycle that has since been restarted or stopped.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Time is the time at which the tick occurred.
    pub time: std::time::SystemTime,
    /// ID is the identifier of the bar that this message belongs to.
    pub id: i64,
    /// tag is used internally to drop ticks from superseded cycles.
    tag: i64,
}

/// Configuration options for customizing a bar at construction time.
///
/// This enum backs the option pattern used by [`new`]; the matching
/// `with_*` functions are the usual way to build values of it. The same
/// properties can be changed after construction through the setter methods
/// on [`Model`].
pub enum BarOption {
    /// Sets the target fill fraction, nominally in `[0.0, 1.0]`.
    WithFraction(f64),
    /// Sets the tint color (hex string). The track and frame are drawn in
    /// the same color dimmed to 20%.
    WithTint(String),
    /// Sets the total width of the bar in columns, frame included.
    WithWidth(i32),
    /// Sets which corners of the frame are rounded.
    WithCorners(CornerSet),
    /// Sets the corner radius. Zero keeps every corner square.
    WithCornerRadius(f64),
    /// Sets the entry-animation duration, which is also the counter window.
    WithDuration(Duration),
    /// Sets the lipgloss style applied to the counter label.
    WithLabelStyle(Box<Style>),
    /// Sets the counter label color (hex string).
    WithLabelColor(String),
}

impl BarOption {
    fn apply(&self, m: &mut Model) {
        match self {
            BarOption::WithFraction(f) => m.fraction = *f,
            BarOption::WithTint(color) => m.tint = color.clone(),
            BarOption::WithWidth(w) => m.width = *w,
            BarOption::WithCorners(corners) => m.corners = *corners,
            BarOption::WithCornerRadius(r) => m.corner_radius = *r,
            BarOption::WithDuration(d) => m.duration = *d,
            BarOption::WithLabelStyle(style) => m.label_style = style.as_ref().clone(),
            BarOption::WithLabelColor(color) => m.label_color = color.clone(),
        }
    }
}

/// Sets the target fill fraction, nominally in `[0.0, 1.0]`.
pub fn with_fraction(f: f64) -> BarOption {
    BarOption::WithFraction(f)
}

/// Sets the tint color. The bar is drawn in this color at full strength and
/// the track behind it in the same color at 20%.
pub fn with_tint(color: String) -> BarOption {
    BarOption::WithTint(color)
}

/// Sets the total width of the bar in columns, frame included.
pub fn with_width(w: i32) -> BarOption {
    BarOption::WithWidth(w)
}

/// Sets which corners of the frame are rounded.
pub fn with_corners(corners: CornerSet) -> BarOption {
    BarOption::WithCorners(corners)
}

/// Sets the corner radius applied to the rounded corners.
pub fn with_corner_radius(r: f64) -> BarOption {
    BarOption::WithCornerRadius(r)
}

/// Sets the entry-animation duration; the counter reaches its target over
/// the same window.
pub fn with_duration(d: Duration) -> BarOption {
    BarOption::WithDuration(d)
}

/// Sets the lipgloss style applied to the counter label.
pub fn with_label_style(style: Style) -> BarOption {
    BarOption::WithLabelStyle(Box::new(style))
}

/// Sets the counter label color.
pub fn with_label_color(color: String) -> BarOption {
    BarOption::WithLabelColor(color)
}

/// The bar model containing configuration and animation state.
///
/// The model follows the Elm Architecture pattern used by bubbletea-rs:
/// [`Model::update`] consumes [`TickMsg`] values to advance the counter and
/// the entry animation, and [`Model::view`] renders the frame, fill and
/// label from the current state. Everything visual is recomputed from the
/// current configuration and width on every render, so resizing the bar
/// between frames re-derives the corner mask and fill geometry from the new
/// bounds.
#[derive(Debug, Clone)]
pub struct Model {
    /// An identifier to keep us from receiving messages intended for other
    /// bars.
    id: i64,

    /// An identifier to keep us from acting on ticks of superseded cycles.
    tag: i64,

    /// Total width of the bar in columns, including the frame. Public so
    /// applications can track terminal resizes by assignment, as with the
    /// other widgets in this family.
    pub width: i32,

    fraction: f64,
    tint: String,
    corners: CornerSet,
    corner_radius: f64,
    duration: Duration,
    label_style: Style,
    label_color: String,

    /// Counter value currently displaying; grows toward `fraction`.
    shown: f64,
    /// Ticks elapsed since the last restart; drives the entry animation.
    ticks: u32,
    /// Whether the tick cycle is live.
    counting: bool,
}

/// Creates a new bar with the specified configuration options.
///
/// The bar starts armed: the entry animation and counter begin from zero as
/// soon as the program schedules the `Cmd` returned by [`Model::init`].
///
/// # Default Configuration
///
/// - **Fraction**: 0.5
/// - **Tint**: blue (`#0000FF`)
/// - **Width**: 40 columns
/// - **Corners**: none rounded, radius 0
/// - **Duration**: 2 seconds
/// - **Label**: bold white, centered
///
/// # Examples
///
/// ```rust
/// use tintbar::bar::{new, with_corner_radius, with_corners, CornerSet};
///
/// let bar = new(&[]);
/// assert_eq!(bar.fraction(), 0.5);
///
/// let pill = new(&[
///     with_corners(CornerSet::all()),
///     with_corner_radius(10.0),
/// ]);
/// assert!(pill.corners().contains(tintbar::bar::Corner::TopLeft));
/// ```
pub fn new(opts: &[BarOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 1,
        width: DEFAULT_WIDTH,
        fraction: DEFAULT_FRACTION,
        tint: DEFAULT_TINT.to_string(),
        corners: CornerSet::none(),
        corner_radius: 0.0,
        duration: DEFAULT_DURATION,
        label_style: DEFAULT_LABEL_STYLE.clone(),
        label_color: DEFAULT_LABEL_COLOR.to_string(),
        shown: 0.0,
        ticks: 0,
        counting: true,
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Returns the bar's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the target fill fraction.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Returns the current tint color string.
    pub fn tint(&self) -> &str {
        &self.tint
    }

    /// Returns the set of corners marked for rounding.
    pub fn corners(&self) -> CornerSet {
        self.corners
    }

    /// Returns the corner radius.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Returns the entry-animation duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the counter's current value.
    ///
    /// The value starts at zero on every restart and never exceeds the
    /// target fraction; once the cycle completes it equals the fraction
    /// exactly.
    pub fn value(&self) -> f64 {
        self.shown
    }

    /// Reports whether a tick cycle is currently live.
    pub fn is_counting(&self) -> bool {
        self.counting
    }

    /// Sets the target fill fraction and restarts the cycle.
    ///
    /// Values outside `[0.0, 1.0]` are accepted; the fill is clamped to the
    /// container at render time while the label counts to the raw target.
    pub fn set_fraction(&mut self, f: f64) -> Cmd {
        self.fraction = f;
        self.restart()
    }

    /// Sets the tint color and restarts the cycle.
    ///
    /// The track and frame colors are re-derived from the new tint on the
    /// next render.
    pub fn set_tint<S: Into<String>>(&mut self, tint: S) -> Cmd {
        self.tint = tint.into();
        self.restart()
    }

    /// Sets the label typography and restarts the cycle.
    pub fn set_label_style(&mut self, style: Style) -> Cmd {
        self.label_style = style;
        self.restart()
    }

    /// Sets the label color and restarts the cycle.
    pub fn set_label_color<S: Into<String>>(&mut self, color: S) -> Cmd {
        self.label_color = color.into();
        self.restart()
    }

    /// Marks a single corner as rounded or square.
    ///
    /// This only changes how the frame is drawn; the running animation and
    /// counter are not restarted. Setting a corner to its current state has
    /// no effect.
    pub fn set_corner(&mut self, corner: Corner, rounded: bool) {
        self.corners.set(corner, rounded);
    }

    /// Sets the corner radius.
    ///
    /// Like [`Model::set_corner`] this re-rounds without restarting. A
    /// radius of zero (or below) keeps every corner square regardless of
    /// the corner set.
    pub fn set_corner_radius(&mut self, r: f64) {
        self.corner_radius = r;
    }

    /// Sets the animation duration used by the next restart.
    ///
    /// The running cycle, if any, keeps its current window.
    pub fn set_duration(&mut self, d: Duration) {
        self.duration = d;
    }

    /// Restarts the entry animation and counter from zero with the current
    /// configuration.
    ///
    /// Bumping the cycle tag here is what makes ticks from the superseded
    /// cycle inert, so several restart setters may be called back to back
    /// and only the last returned `Cmd` needs to be scheduled.
    pub fn restart(&mut self) -> Cmd {
        self.shown = 0.0;
        self.ticks = 0;
        self.counting = true;
        self.tag += 1;
        self.tick()
    }

    /// Halts the counter and invalidates any in-flight tick.
    ///
    /// Call this when tearing the bar down so a tick already scheduled on
    /// the program loop cannot land on a widget that is no longer live. A
    /// later restart setter arms a fresh cycle.
    pub fn stop(&mut self) {
        self.counting = false;
        self.tag += 1;
    }

    /// Returns the command that schedules the first tick of the armed
    /// cycle.
    pub fn init(&self) -> Cmd {
        self.tick()
    }

    /// Internal method to schedule the next counter tick.
    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

        bubbletea_tick(interval, move |_| {
            Box::new(TickMsg {
                time: std::time::SystemTime::now(),
                id,
                tag,
            }) as Msg
        })
    }

    /// Per-tick counter increment: the counter covers `fraction` over the
    /// same window the entry animation takes.
    fn step(&self) -> f64 {
        let window = TICKS_PER_SECOND as f64 * self.duration.as_secs_f64();
        if window <= 0.0 {
            // Degenerate duration: complete on the first tick.
            return self.fraction;
        }
        self.fraction / window
    }

    /// Number of ticks in a full animation window. Never zero.
    fn total_ticks(&self) -> u32 {
        let window = TICKS_PER_SECOND as f64 * self.duration.as_secs_f64();
        (window.ceil() as u32).max(1)
    }

    /// Entry-animation growth factor in `[0.0, 1.0]`.
    fn growth(&self) -> f64 {
        if !self.counting {
            return 1.0;
        }
        (self.ticks as f64 / self.total_ticks() as f64).min(1.0)
    }

    /// Processes tick messages, advancing the counter and the entry
    /// animation.
    ///
    /// Ticks for other bars, ticks from superseded cycles and ticks
    /// arriving after the counter has completed are all ignored. When the
    /// counter reaches its target (or the window's last tick fires) the
    /// value is clamped to exactly the target fraction and no
    /// follow-up command is returned, leaving the cycle dormant until the
    /// next restart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tintbar::bar;
    ///
    /// let mut bar = bar::new(&[bar::with_fraction(0.0)]);
    /// // A zero target completes on the very first tick.
    /// let cmd = bar.update(Box::new(bar.tick_msg()));
    /// assert!(cmd.is_none());
    /// assert!(!bar.is_counting());
    /// ```
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id != 0 && tick_msg.id != self.id {
                return std::option::Option::None;
            }

            // If the tag is not the one we expect, the tick belongs to a
            // cycle that a restart or stop has since superseded.
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return std::option::Option::None;
            }

            if !self.counting {
                return std::option::Option::None;
            }

            self.ticks += 1;
            self.shown += self.step();

            if self.shown >= self.fraction || self.ticks >= self.total_ticks() {
                self.shown = self.fraction;
                self.counting = false;
                return std::option::Option::None;
            }

            return std::option::Option::Some(self.tick());
        }

        std::option::Option::None
    }

    /// Creates a tick message addressed to this bar's current cycle.
    ///
    /// Mostly useful for driving the bar by hand, e.g. in tests.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            time: std::time::SystemTime::now(),
            id: self.id,
            tag: self.tag,
        }
    }

    /// Renders the bar in its current animated state.
    ///
    /// The output is three lines: the top of the frame, the fill row with
    /// the centered counter label, and the bottom of the frame. Corner
    /// glyphs, colors and fill geometry are all recomputed from the current
    /// configuration and width, so the frame follows resizes with no
    /// explicit invalidation step.
    pub fn view(&self) -> String {
        self.render(self.shown, self.growth())
    }

    /// Renders the bar settled at an arbitrary counter value, bypassing the
    /// animation state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tintbar::bar::new;
    ///
    /// let bar = new(&[]);
    /// let half = bar.view_as(0.5);
    /// assert!(lipgloss::strip_ansi(&half).contains("50.00 %"));
    /// ```
    pub fn view_as(&self, value: f64) -> String {
        self.render(value, 1.0)
    }

    fn render(&self, value: f64, growth: f64) -> String {
        let inner = (self.width - 2).max(0) as usize;

        let frame_style = Style::new().foreground(self.track_color());
        let top = frame_style.render(&format!(
            "{}{}{}",
            self.corner_glyph(Corner::TopLeft),
            "─".repeat(inner),
            self.corner_glyph(Corner::TopRight)
        ));
        let bottom = frame_style.render(&format!(
            "{}{}{}",
            self.corner_glyph(Corner::BottomLeft),
            "─".repeat(inner),
            self.corner_glyph(Corner::BottomRight)
        ));
        let side = frame_style.render("│");

        format!(
            "{}\n{}{}{}\n{}",
            top,
            side,
            self.bar_row(inner, value, growth),
            side,
            bottom
        )
    }

    /// Filled cells for a given inner width and growth factor. The target
    /// fraction is clamped to the container here, not in the setters.
    fn filled_cells(&self, inner: usize, growth: f64) -> usize {
        let fill = inner as f64 * self.fraction.clamp(0.0, 1.0) * growth.clamp(0.0, 1.0);
        (fill.round() as usize).min(inner)
    }

    /// Internal method to render the fill row with the label overlaid.
    fn bar_row(&self, inner: usize, value: f64, growth: f64) -> String {
        let filled = self.filled_cells(inner, growth);
        let bar_color = Color::from(self.tint.as_str());
        let track_color = self.track_color();

        let label = format!("{:.2} %", value * 100.0);
        let label_cells: Vec<char> = label.chars().collect();
        // Center the label; hide it when the row is too narrow to hold it.
        let label_start = if label.width() <= inner {
            Some((inner - label.width()) / 2)
        } else {
            None
        };

        let mut row = String::new();
        for col in 0..inner {
            let bg = if col < filled {
                bar_color.clone()
            } else {
                track_color.clone()
            };

            let label_col = label_start
                .filter(|start| col >= *start && col < *start + label_cells.len())
                .map(|start| col - start);

            match label_col {
                Some(i) => {
                    let styled = self
                        .label_style
                        .clone()
                        .foreground(Color::from(self.label_color.as_str()))
                        .background(bg)
                        .render(&label_cells[i].to_string());
                    row.push_str(&styled);
                }
                None => {
                    row.push_str(&Style::new().background(bg).render(" "));
                }
            }
        }

        row
    }

    /// The track color: the tint dimmed to 20%, approximated by blending a
    /// fifth of the way up from the terminal's black.
    fn track_color(&self) -> Color {
        let ramp = blend_1d(6, vec![Color::from("#000000"), Color::from(self.tint.as_str())]);
        ramp.get(1)
            .cloned()
            .unwrap_or_else(|| Color::from(self.tint.as_str()))
    }

    /// Frame glyph for one corner. A corner renders rounded only while it
    /// is in the corner set and the radius is above zero.
    fn corner_glyph(&self, corner: Corner) -> &'static str {
        let rounded = self.corners.contains(corner) && self.corner_radius > 0.0;
        match (corner, rounded) {
            (Corner::TopLeft, true) => "╭",
            (Corner::TopRight, true) => "╮",
            (Corner::BottomRight, true) => "╯",
            (Corner::BottomLeft, true) => "╰",
            (Corner::TopLeft, false) => "┌",
            (Corner::TopRight, false) => "┐",
            (Corner::BottomRight, false) => "┘",
            (Corner::BottomLeft, false) => "└",
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let model = new(&[]);
        let cmd = model.init();
        (model, std::option::Option::Some(cmd))
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
    use lipgloss::{strip_ansi, width_visible};

    /// Drives `n` ticks through the model, returning the last update result.
    fn drive(m: &mut Model, n: u32) -> Option<Cmd> {
        let mut last = None;
        for _ in 0..n {
            let msg = m.tick_msg();
            last = m.update(Box::new(msg));
        }
        last
    }

    fn stripped_lines(view: &str) -> Vec<String> {
        strip_ansi(view).lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_new_with_no_options() {
        let bar = new(&[]);

        assert_eq!(bar.width, DEFAULT_WIDTH);
        assert_eq!(bar.fraction(), 0.5);
        assert_eq!(bar.tint(), "#0000FF");
        assert!(bar.corners().is_empty());
        assert_eq!(bar.corner_radius(), 0.0);
        assert_eq!(bar.duration(), Duration::from_secs(2));
        assert_eq!(bar.value(), 0.0);
        assert!(bar.is_counting());
    }

    #[test]
    fn test_new_with_options() {
        let bar = new(&[
            with_width(60),
            with_fraction(0.25),
            with_tint("#FF0000".to_string()),
            with_corners(CornerSet::all()),
            with_corner_radius(10.0),
            with_duration(Duration::from_secs(1)),
            with_label_color("#000000".to_string()),
        ]);

        assert_eq!(bar.width, 60);
        assert_eq!(bar.fraction(), 0.25);
        assert_eq!(bar.tint(), "#FF0000");
        assert!(bar.corners().contains(Corner::BottomRight));
        assert_eq!(bar.corner_radius(), 10.0);
        assert_eq!(bar.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_unique_ids() {
        let bar1 = new(&[]);
        let bar2 = new(&[]);
        assert_ne!(bar1.id(), bar2.id());
    }

    #[test]
    fn test_counter_completes_exactly_at_window() {
        // One-second window at 20 Hz: 20 ticks to completion.
        let mut bar = new(&[
            with_fraction(0.6),
            with_duration(Duration::from_secs(1)),
        ]);

        let last = drive(&mut bar, 20);
        assert!(last.is_none());
        assert_eq!(bar.value(), 0.6);
        assert!(!bar.is_counting());

        // Further ticks are ignored entirely.
        let after = bar.update(Box::new(bar.tick_msg()));
        assert!(after.is_none());
        assert_eq!(bar.value(), 0.6);
    }

    #[test]
    fn test_counter_monotonic_until_target() {
        let mut bar = new(&[
            with_fraction(1.0),
            with_duration(Duration::from_secs(2)),
        ]);

        let mut previous = bar.value();
        for _ in 0..40 {
            let cmd = bar.update(Box::new(bar.tick_msg()));
            assert!(bar.value() >= previous);
            assert!(bar.value() <= bar.fraction());
            previous = bar.value();
            if cmd.is_none() {
                break;
            }
        }
        assert_eq!(bar.value(), 1.0);
    }

    #[test]
    fn test_zero_fraction_stops_within_one_tick() {
        // Regression: a zero target must not leave the tick cycle running
        // forever doing no-op updates.
        let mut bar = new(&[with_fraction(0.0)]);

        let cmd = bar.update(Box::new(bar.tick_msg()));
        assert!(cmd.is_none());
        assert!(!bar.is_counting());
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_full_bar_reads_hundred_after_forty_ticks() {
        let mut bar = new(&[
            with_fraction(1.0),
            with_duration(Duration::from_secs(2)),
        ]);

        drive(&mut bar, 40);
        assert_eq!(bar.value(), 1.0);
        assert!(strip_ansi(&bar.view()).contains("100.00 %"));
    }

    #[test]
    fn test_label_resets_on_restart() {
        let mut bar = new(&[with_fraction(0.8)]);
        drive(&mut bar, 10);
        assert!(bar.value() > 0.0);

        let _ = bar.set_fraction(0.3);
        assert_eq!(bar.value(), 0.0);
        assert!(bar.is_counting());
        assert!(strip_ansi(&bar.view()).contains("0.00 %"));
    }

    #[test]
    fn test_corner_set_idempotent() {
        let mut once = new(&[]);
        once.set_corner(Corner::TopLeft, true);
        let mut twice = new(&[]);
        twice.set_corner(Corner::TopLeft, true);
        twice.set_corner(Corner::TopLeft, true);

        assert_eq!(once.corners(), twice.corners());
    }

    #[test]
    fn test_corner_toggle_does_not_restart() {
        let mut bar = new(&[with_fraction(0.9)]);
        drive(&mut bar, 5);
        let value = bar.value();
        let tag = bar.tag;

        bar.set_corner(Corner::BottomLeft, true);
        bar.set_corner_radius(10.0);

        assert_eq!(bar.value(), value);
        assert_eq!(bar.tag, tag);
        assert!(bar.is_counting());
    }

    #[test]
    fn test_restart_setters_reset_counter() {
        let mut bar = new(&[with_fraction(0.9)]);
        drive(&mut bar, 5);
        assert!(bar.value() > 0.0);

        let _ = bar.set_tint("#FF0000");
        assert_eq!(bar.value(), 0.0);
        drive(&mut bar, 5);

        let _ = bar.set_label_color("#000000");
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_set_duration_applies_on_next_restart() {
        let mut bar = new(&[
            with_fraction(0.5),
            with_duration(Duration::from_secs(2)),
        ]);
        drive(&mut bar, 5);
        let value = bar.value();

        // No restart, no counter reset.
        bar.set_duration(Duration::from_millis(500));
        assert_eq!(bar.value(), value);

        // After a restart the new half-second window applies: 10 ticks.
        let _ = bar.restart();
        drive(&mut bar, 10);
        assert_eq!(bar.value(), 0.5);
        assert!(!bar.is_counting());
    }

    #[test]
    fn test_stale_ticks_rejected() {
        let mut bar = new(&[with_fraction(0.7)]);
        let stale = bar.tick_msg();

        // A restart supersedes the cycle the message was scheduled for.
        let _ = bar.restart();
        let cmd = bar.update(Box::new(stale));
        assert!(cmd.is_none());
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_foreign_ticks_rejected() {
        let mut bar = new(&[]);
        let other = new(&[]);

        let cmd = bar.update(Box::new(other.tick_msg()));
        assert!(cmd.is_none());
        assert_eq!(bar.value(), 0.0);
        assert_eq!(bar.ticks, 0);
    }

    #[test]
    fn test_stop_discards_pending_tick() {
        let mut bar = new(&[with_fraction(0.7)]);
        drive(&mut bar, 3);
        let pending = bar.tick_msg();
        let value = bar.value();

        bar.stop();
        let cmd = bar.update(Box::new(pending));
        assert!(cmd.is_none());
        assert!(!bar.is_counting());
        assert_eq!(bar.value(), value);
    }

    #[test]
    fn test_rounding_follows_resize() {
        let mut bar = new(&[
            with_width(30),
            with_corners(CornerSet::all()),
            with_corner_radius(10.0),
        ]);

        let lines = stripped_lines(&bar.view());
        assert_eq!(lines.len(), 3);
        assert_eq!(width_visible(&lines[0]), 30);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[2].ends_with('╯'));

        // The mask must be rebuilt from the new bounds, not the bounds at
        // the time the flags were set.
        bar.width = 50;
        let lines = stripped_lines(&bar.view());
        assert_eq!(width_visible(&lines[0]), 50);
        assert!(lines[0].starts_with('╭'));
    }

    #[test]
    fn test_zero_radius_keeps_corners_square() {
        let mut bar = new(&[with_corners(CornerSet::all())]);
        let lines = stripped_lines(&bar.view());
        assert!(lines[0].starts_with('┌'));
        assert!(lines[2].starts_with('└'));

        bar.set_corner_radius(10.0);
        let lines = stripped_lines(&bar.view());
        assert!(lines[0].starts_with('╭'));
        assert!(lines[2].starts_with('╰'));
    }

    #[test]
    fn test_mixed_corners() {
        let mut bar = new(&[with_corner_radius(10.0)]);
        bar.set_corner(Corner::TopLeft, true);
        bar.set_corner(Corner::BottomRight, true);

        let lines = stripped_lines(&bar.view());
        assert!(lines[0].starts_with('╭'));
        assert!(lines[0].ends_with('┐'));
        assert!(lines[2].starts_with('└'));
        assert!(lines[2].ends_with('╯'));
    }

    #[test]
    fn test_fill_tracks_growth() {
        let mut bar = new(&[
            with_fraction(0.75),
            with_duration(Duration::from_secs(1)),
        ]);

        // Before the first tick the bar has zero width.
        assert_eq!(bar.filled_cells(40, bar.growth()), 0);

        // Halfway through the window the bar is halfway grown.
        drive(&mut bar, 10);
        assert_eq!(bar.filled_cells(40, bar.growth()), 15);

        // Settled: 75% of the inner width.
        drive(&mut bar, 10);
        assert_eq!(bar.filled_cells(40, bar.growth()), 30);
    }

    #[test]
    fn test_label_hidden_when_too_narrow() {
        let bar = new(&[with_width(5)]);
        let lines = stripped_lines(&bar.view());
        assert_eq!(lines.len(), 3);
        // Inner width 3 cannot hold "0.00 %": the row is bare fill.
        assert!(!lines[1].contains('%'));
        assert_eq!(width_visible(&lines[1]), 5);
    }

    #[test]
    fn test_view_as_is_static() {
        let bar = new(&[]);
        assert!(strip_ansi(&bar.view_as(0.5)).contains("50.00 %"));
        assert!(strip_ansi(&bar.view_as(1.0)).contains("100.00 %"));
        // The animated state is untouched.
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_out_of_domain_fraction_degrades() {
        let mut bar = new(&[with_fraction(1.5)]);
        drive(&mut bar, 60);
        assert!(!bar.is_counting());
        assert_eq!(bar.value(), 1.5);
        // The fill clamps to the container even though the label overshoots.
        assert_eq!(bar.filled_cells(38, 1.0), 38);
        assert!(strip_ansi(&bar.view()).contains("150.00 %"));

        let mut bar = new(&[with_fraction(-0.25)]);
        let cmd = bar.update(Box::new(bar.tick_msg()));
        assert!(cmd.is_none());
        assert_eq!(bar.filled_cells(38, 1.0), 0);
    }

    #[test]
    fn test_zero_duration_completes_first_tick() {
        let mut bar = new(&[
            with_fraction(0.4),
            with_duration(Duration::ZERO),
        ]);

        let cmd = bar.update(Box::new(bar.tick_msg()));
        assert!(cmd.is_none());
        assert_eq!(bar.value(), 0.4);
        assert!(!bar.is_counting());
    }

    #[test]
    fn test_degenerate_width_does_not_panic() {
        let bar = new(&[with_width(0)]);
        let lines = stripped_lines(&bar.view());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_end_to_end_purple_three_quarters() {
        let mut bar = new(&[]);

        let _ = bar.set_fraction(0.75);
        let _ = bar.set_tint("#7F007F");

        // Defaults keep the two-second window: 40 ticks to completion.
        drive(&mut bar, 40);
        assert_eq!(bar.value(), 0.75);
        assert!(!bar.is_counting());
        assert!(strip_ansi(&bar.view()).contains("75.00 %"));

        let inner = (bar.width - 2) as usize;
        assert_eq!(bar.filled_cells(inner, 1.0), 29); // round(38 * 0.75)
    }
}

#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/tintbar/")]

//! # tintbar
//!
//! An animated, tinted progress bar widget for terminal applications built
//! with [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! The bar fills a configurable fraction of its container and plays a
//! scale-in entry animation each time its look changes, while a centered
//! percentage label counts up over the same window so the two finish
//! together. The surrounding frame supports per-corner rounding, toggled
//! independently for each of the four corners.
//!
//! The widget follows the Elm Architecture pattern: `init()` schedules the
//! first counter tick, `update()` advances the animation on tick messages,
//! and `view()` renders the current state with
//! [lipgloss](https://github.com/whit3rabbit/lipgloss-rs) styling.
//!
//! ## Quick Start
//!
//! ```rust
//! use tintbar::prelude::*;
//!
//! let mut bar = bar_new(&[
//!     bar_with_width(50),
//!     bar_with_fraction(0.75),
//! ]);
//!
//! // Restart setters return the command driving the new animation cycle.
//! let _cmd = bar.set_tint("#FF7F00");
//!
//! // Corner changes re-round without restarting.
//! bar.set_corner(Corner::TopLeft, true);
//! bar.set_corner_radius(10.0);
//!
//! println!("{}", bar.view());
//! ```
//!
//! See `demos/random-bar` for a complete program that randomizes the bar's
//! appearance on every key press.

pub mod bar;

/// Convenience re-exports of the widget API.
pub mod prelude {
    pub use crate::bar::{
        new as bar_new, with_corner_radius as bar_with_corner_radius,
        with_corners as bar_with_corners, with_duration as bar_with_duration,
        with_fraction as bar_with_fraction, with_label_color as bar_with_label_color,
        with_label_style as bar_with_label_style, with_tint as bar_with_tint,
        with_width as bar_with_width, BarOption, Corner, CornerSet, Model as Bar, TickMsg,
    };
}

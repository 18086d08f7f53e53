//! Random bar demo.
//!
//! Press any key to restyle the bar with a random fill fraction, a random
//! tint from a fixed six-color palette, and a coin flip for each of the
//! four corner flags. Press `q`, `Esc` or `ctrl+c` to quit.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use rand::Rng;
use tintbar::bar;
use tintbar::bar::Corner;

/// The tap palette: orange, blue, purple, black, brown, red.
const PALETTE: [&str; 6] = [
    "#FF7F00", "#0000FF", "#7F007F", "#000000", "#996633", "#FF0000",
];

struct App {
    bar: bar::Model,
}

impl App {
    /// Assigns fresh random values to the whole configuration surface.
    ///
    /// Each restart setter supersedes the cycle started by the one before
    /// it, so only the last returned command needs scheduling.
    fn shuffle(&mut self) -> Cmd {
        let mut rng = rand::thread_rng();

        let _ = self.bar.set_fraction(rng.gen_range(0.0..=1.0));
        let cmd = self.bar.set_tint(PALETTE[rng.gen_range(0..PALETTE.len())]);

        self.bar.set_corner_radius(10.0);
        for corner in Corner::ALL {
            self.bar.set_corner(corner, rng.gen_bool(0.5));
        }

        cmd
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let bar = bar::new(&[bar::with_width(48)]);
        let cmd = bar.init();
        (Self { bar }, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let ctrl_c = key.key == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || key.key == KeyCode::Char('q') || key.key == KeyCode::Esc {
                return Some(quit());
            }
            return Some(self.shuffle());
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.bar.width = (size.width as i32 - 4).max(12);
            return None;
        }

        self.bar.update(msg)
    }

    fn view(&self) -> String {
        let hint = Style::new()
            .foreground(Color::from("240"))
            .render("press any key to restyle · q to quit");

        format!("\n{}\n\n{}\n", self.bar.view(), hint)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().signal_handler(true).build()?;
    program.run().await?;
    Ok(())
}

use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::error;

use crate::camera::Camera;
use crate::cell::Cell;
use crate::config::Config;
use crate::surface::Surface;

/// What the terminal frontend should do in response to input
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    /// Exit the application
    Exit,
}

/// Converts a crossterm event into a frontend event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Esc, ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            },
        ) => Some(Event::Exit),
        _ => None,
    }
}

/// Draws each generation as braille text onto a terminal.
///
/// Live dots use the live colour, the background uses the dead colour. The frame is
/// written on [`Surface::present`], so a terminal only ever shows whole generations.
pub struct TermSurface<W: Write> {
    cam: Camera,
    out: W,
    live: style::Color,
    dead: style::Color,
}

impl<W: Write> TermSurface<W> {
    pub fn new(config: &Config, out: W) -> Self {
        Self {
            cam: Camera::for_grid(config.grid_size),
            out,
            live: config.live_color.into(),
            dead: config.dead_color.into(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.cam
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let frame = self.cam.render();

        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            style::SetForegroundColor(self.live),
            style::SetBackgroundColor(self.dead),
        )?;

        for line in frame.lines() {
            queue!(
                self.out,
                style::Print(line),
                terminal::Clear(terminal::ClearType::UntilNewLine),
                cursor::MoveToNextLine(1)
            )?;
        }

        queue!(self.out, style::ResetColor)?;

        self.out.flush()
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn draw(&mut self, cell: Cell) {
        self.cam.draw(cell);
    }

    fn present(&mut self) {
        if let Err(e) = self.write_frame() {
            error!("Failed to write frame: {e}");
        }
    }
}

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseEvent};

/// Tick interval for the simulation, in milliseconds (~60 FPS).
pub const TICK_RATE_MS: u64 = 16;

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

/// Polls crossterm on a background thread and multiplexes key events,
/// mouse clicks, and ticks onto one channel. Key releases are forwarded
/// too, so hold-to-move works on terminals that report them.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(crossterm::event::Event::Key(key)) => tx.send(Event::Key(key)),
                    Ok(crossterm::event::Event::Mouse(mouse)) => tx.send(Event::Mouse(mouse)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    return;
                }
            } else if tx.send(Event::Tick).is_err() {
                return;
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

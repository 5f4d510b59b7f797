use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::game::{AlienInvasion, Controls};

/// How long a key counts as held after its last press/repeat, in ticks.
/// Only used on terminals that never report key releases, where terminal
/// autorepeat refreshes the countdown while the key is physically down.
const HOLD_DECAY_TICKS: u8 = 10;

/// Held-state for one control key across both input models.
#[derive(Default)]
struct KeyHold {
    latched: bool,
    decay: u8,
}

impl KeyHold {
    fn press(&mut self, release_events: bool) {
        if release_events {
            self.latched = true;
        } else {
            self.decay = HOLD_DECAY_TICKS;
        }
    }

    fn release(&mut self) {
        self.latched = false;
        self.decay = 0;
    }

    fn tick(&mut self) {
        self.decay = self.decay.saturating_sub(1);
    }

    fn is_held(&self) -> bool {
        self.latched || self.decay > 0
    }
}

/// Top-level application state: the game itself plus the input layer that
/// turns raw terminal events into per-tick control flags.
pub struct App {
    pub should_quit: bool,
    pub game: AlienInvasion,
    /// Cell rectangle of the Play button as last drawn, for mouse hit tests.
    pub play_button: Option<Rect>,
    release_events: bool,
    left: KeyHold,
    right: KeyHold,
    fire: KeyHold,
}

impl App {
    pub fn new(release_events: bool) -> Self {
        Self::with_game(AlienInvasion::new(), release_events)
    }

    fn with_game(game: AlienInvasion, release_events: bool) -> Self {
        App {
            should_quit: false,
            game,
            play_button: None,
            release_events,
            left: KeyHold::default(),
            right: KeyHold::default(),
            fire: KeyHold::default(),
        }
    }

    pub fn on_tick(&mut self) {
        let controls = Controls {
            left: self.left.is_held(),
            right: self.right.is_held(),
            fire: self.fire.is_held(),
        };
        self.left.tick();
        self.right.tick();
        self.fire.tick();
        self.game.update(controls);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Quit works in every phase, and never touches the high-score file.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            && key.kind != KeyEventKind::Release
        {
            self.should_quit = true;
            return;
        }

        let hold = match key.code {
            KeyCode::Left => &mut self.left,
            KeyCode::Right => &mut self.right,
            KeyCode::Char(' ') => &mut self.fire,
            _ => return,
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => hold.press(self.release_events),
            KeyEventKind::Release => hold.release(),
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.game.is_active() {
            return;
        }
        let clicked_play = self
            .play_button
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        if clicked_play {
            self.game.start_round();
        }
    }
}

use crate::game::rect::RectF;
use crate::game::ship::Ship;
use crate::settings::Settings;

/// A single shot travelling straight up. The speed is captured when the
/// bullet is fired so a mid-flight level clear does not retroactively
/// accelerate shots already in the air.
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    speed: f32,
}

impl Bullet {
    /// Spawn at the ship's top-center.
    pub fn fire(ship: &Ship, settings: &Settings) -> Self {
        Bullet {
            x: ship.x + (ship.width - settings.bullet_width) / 2.0,
            y: ship.y - settings.bullet_height,
            width: settings.bullet_width,
            height: settings.bullet_height,
            speed: settings.bullet_speed,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    /// True while any part of the bullet is still below the field top.
    pub fn on_field(&self) -> bool {
        self.rect().bottom() > 0.0
    }

    pub fn rect(&self) -> RectF {
        RectF::new(self.x, self.y, self.width, self.height)
    }
}

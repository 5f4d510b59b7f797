use crate::game::rect::RectF;
use crate::settings::Settings;

/// The player's cannon. Lives on the bottom edge of the field and only
/// moves horizontally. Position is float so slow speeds still accumulate
/// smoothly between frames.
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: settings.field_height - settings.ship_height,
            width: settings.ship_width,
            height: settings.ship_height,
        };
        ship.center(settings);
        ship
    }

    pub fn center(&mut self, settings: &Settings) {
        self.x = (settings.field_width - self.width) / 2.0;
    }

    /// Advance one tick. A step that would push an edge off the field is
    /// dropped entirely; the ship is never clamped to the boundary.
    pub fn update(&mut self, left: bool, right: bool, settings: &Settings) {
        if right && self.x + self.width + settings.ship_speed <= settings.field_width {
            self.x += settings.ship_speed;
        }
        if left && self.x - settings.ship_speed >= 0.0 {
            self.x -= settings.ship_speed;
        }
    }

    pub fn rect(&self) -> RectF {
        RectF::new(self.x, self.y, self.width, self.height)
    }
}

use crate::game::rect::RectF;

/// One invader. Aliens have no individual behavior; the fleet moves them
/// in lockstep and the controller reads their rects for collisions.
#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Alien {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> RectF {
        RectF::new(self.x, self.y, self.width, self.height)
    }
}

// Logical field size. The renderer scales this to whatever terminal
// area is available; game logic never sees cell coordinates.
pub const FIELD_WIDTH: f32 = 160.0;
pub const FIELD_HEIGHT: f32 = 100.0;

const SHIP_WIDTH: f32 = 9.0;
const SHIP_HEIGHT: f32 = 6.0;
const SHIP_LIMIT: u32 = 3;

const BULLET_WIDTH: f32 = 1.0;
const BULLET_HEIGHT: f32 = 4.0;
const MAX_BULLETS: usize = 3;

const ALIEN_WIDTH: f32 = 8.0;
const ALIEN_HEIGHT: f32 = 6.0;
const FLEET_DROP: f32 = 4.0;

const BASE_SHIP_SPEED: f32 = 1.2;
const BASE_BULLET_SPEED: f32 = 2.0;
const BASE_ALIEN_SPEED: f32 = 0.35;
const BASE_ALIEN_POINTS: u32 = 50;

const SPEEDUP_SCALE: f32 = 1.1;

/// All tunables in one place: static field/entity dimensions plus the
/// dynamic speeds that scale up as levels clear.
#[derive(Clone)]
pub struct Settings {
    pub field_width: f32,
    pub field_height: f32,

    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_limit: u32,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub max_bullets: usize,

    pub alien_width: f32,
    pub alien_height: f32,
    pub fleet_drop: f32,

    pub speedup_scale: f32,

    // Dynamic: reset each round, multiplied on level clear.
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
}

impl Settings {
    pub fn new() -> Self {
        let mut s = Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_limit: SHIP_LIMIT,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            max_bullets: MAX_BULLETS,
            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            fleet_drop: FLEET_DROP,
            speedup_scale: SPEEDUP_SCALE,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            alien_points: 0,
        };
        s.reset_dynamic();
        s
    }

    /// Restore base speeds and scoring. Called at the start of every round.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Scale speeds and point value by one step. Points round to the
    /// nearest integer so scoring stays whole.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.speedup_scale).round() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_speed_scales_everything() {
        let mut s = Settings::new();
        let (ship, bullet, alien) = (s.ship_speed, s.bullet_speed, s.alien_speed);
        s.increase_speed();
        assert!(s.ship_speed > ship);
        assert!(s.bullet_speed > bullet);
        assert!(s.alien_speed > alien);
        assert_eq!(s.alien_points, 55); // 50 * 1.1
    }

    #[test]
    fn points_round_to_nearest() {
        let mut s = Settings::new();
        s.increase_speed();
        s.increase_speed();
        // 50 -> 55 -> 60.5 rounds up
        assert_eq!(s.alien_points, 61);
    }

    #[test]
    fn reset_dynamic_restores_base_values() {
        let mut s = Settings::new();
        s.increase_speed();
        s.increase_speed();
        s.reset_dynamic();
        assert_eq!(s.ship_speed, BASE_SHIP_SPEED);
        assert_eq!(s.bullet_speed, BASE_BULLET_SPEED);
        assert_eq!(s.alien_speed, BASE_ALIEN_SPEED);
        assert_eq!(s.alien_points, BASE_ALIEN_POINTS);
    }
}

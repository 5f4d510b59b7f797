pub mod alien;
pub mod bullet;
pub mod fleet;
pub mod rect;
pub mod ship;

use crate::settings::Settings;
use crate::stats::GameStats;

use bullet::Bullet;
use fleet::Fleet;
use ship::Ship;

/// Hit stun after losing a ship, in ticks (~0.7 s at the 16 ms tick rate).
/// The field keeps rendering but the simulation and controls are frozen.
const STUN_TICKS: u16 = 44;

/// Input snapshot for one tick, produced by the app's key tracking.
#[derive(Clone, Copy, Default)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Where the round currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// No round running. The Play button is shown; only a Play click or
    /// quit does anything.
    Inactive,
    /// Normal play, one simulation step per tick.
    Active,
    /// Ship just lost. Counts down to `Active`.
    Stunned { ticks: u16 },
}

/// The whole game: settings, stats, entities, and the round state machine.
/// One instance owns everything and is mutated in place by `update`.
pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    pub phase: Phase,
    pub tick: u64,
}

impl AlienInvasion {
    pub fn new() -> Self {
        let settings = Settings::new();
        let stats = GameStats::load(&settings);
        Self::with_stats(settings, stats)
    }

    pub fn with_stats(settings: Settings, stats: GameStats) -> Self {
        let ship = Ship::new(&settings);
        let fleet = Fleet::build(&settings);
        AlienInvasion {
            settings,
            stats,
            ship,
            bullets: Vec::new(),
            fleet,
            phase: Phase::Inactive,
            tick: 0,
        }
    }

    /// Start a fresh round from the Play button.
    pub fn start_round(&mut self) {
        if self.phase != Phase::Inactive {
            return;
        }
        self.settings.reset_dynamic();
        self.stats.reset(&self.settings);
        self.bullets.clear();
        self.fleet = Fleet::build(&self.settings);
        self.ship.center(&self.settings);
        self.phase = Phase::Active;
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Inactive)
    }

    /// One frame. Order matters: ship, then bullets and their kills, then
    /// the fleet (which can end the round), then firing.
    pub fn update(&mut self, controls: Controls) {
        self.tick = self.tick.wrapping_add(1);
        match self.phase {
            Phase::Inactive => {}
            Phase::Stunned { ticks } => {
                self.phase = if ticks > 1 {
                    Phase::Stunned { ticks: ticks - 1 }
                } else {
                    Phase::Active
                };
            }
            Phase::Active => {
                self.ship
                    .update(controls.left, controls.right, &self.settings);
                self.update_bullets();
                self.update_fleet();
                if controls.fire {
                    self.fire_bullet();
                }
            }
        }
    }

    /// Spawn a bullet unless the live-bullet cap is reached.
    fn fire_bullet(&mut self) {
        if self.bullets.len() < self.settings.max_bullets {
            self.bullets.push(Bullet::fire(&self.ship, &self.settings));
        }
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update();
        }
        self.bullets.retain(Bullet::on_field);
        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        // A bullet that overlaps aliens takes all of them with it.
        let mut destroyed = 0;
        let fleet = &mut self.fleet;
        self.bullets.retain(|bullet| {
            let killed = fleet.kill_intersecting(&bullet.rect());
            destroyed += killed;
            killed == 0
        });

        if destroyed > 0 {
            self.stats.score += self.settings.alien_points * destroyed as u32;
            self.stats.check_high_score();
        }

        if self.fleet.is_empty() {
            self.start_new_level();
        }
    }

    /// Fleet cleared: respawn it faster and bump the level.
    fn start_new_level(&mut self) {
        self.bullets.clear();
        self.fleet = Fleet::build(&self.settings);
        self.settings.increase_speed();
        self.stats.level += 1;
    }

    fn update_fleet(&mut self) {
        self.fleet.update(&self.settings);

        // An alien reaching the ship or the ground costs a life either way.
        if self.fleet.any_intersects(&self.ship.rect()) || self.fleet.any_at_bottom(&self.settings)
        {
            self.ship_hit();
        }
    }

    /// A ship was lost. With no ships left the round ends; otherwise the
    /// board resets and a short stun gives the player a breather.
    fn ship_hit(&mut self) {
        if self.stats.ships_left == 0 {
            self.phase = Phase::Inactive;
            return;
        }
        self.stats.ships_left -= 1;
        self.bullets.clear();
        self.fleet = Fleet::build(&self.settings);
        self.ship.center(&self.settings);
        self.phase = Phase::Stunned { ticks: STUN_TICKS };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_game() -> AlienInvasion {
        let settings = Settings::new();
        // Point the high-score file somewhere harmless.
        let path = std::env::temp_dir().join(format!(
            "alien-invasion-game-test-{}.json",
            std::process::id()
        ));
        let stats = GameStats::with_path(&settings, path);
        let mut game = AlienInvasion::with_stats(settings, stats);
        game.start_round();
        game
    }

    fn cleanup(path: &PathBuf) {
        let _ = std::fs::remove_file(path);
    }

    fn score_path() -> PathBuf {
        std::env::temp_dir().join(format!(
            "alien-invasion-game-test-{}.json",
            std::process::id()
        ))
    }

    const FIRE: Controls = Controls {
        left: false,
        right: false,
        fire: true,
    };

    #[test]
    fn play_click_starts_a_round() {
        let mut game = test_game();
        assert_eq!(game.phase, Phase::Active);
        assert_eq!(game.stats.level, 1);
        assert!(!game.fleet.is_empty());
        cleanup(&score_path());
    }

    #[test]
    fn inactive_game_ignores_ticks() {
        let settings = Settings::new();
        let stats = GameStats::with_path(&settings, score_path());
        let mut game = AlienInvasion::with_stats(settings, stats);
        let ship_x = game.ship.x;
        for _ in 0..50 {
            game.update(FIRE);
        }
        assert_eq!(game.phase, Phase::Inactive);
        assert!(game.bullets.is_empty());
        assert_eq!(game.ship.x, ship_x);
        cleanup(&score_path());
    }

    #[test]
    fn bullet_count_never_exceeds_the_cap() {
        let mut game = test_game();
        // Park the fleet far away so nothing dies while we spray.
        for alien in &mut game.fleet.aliens {
            alien.y = -1000.0;
        }
        for _ in 0..200 {
            game.update(FIRE);
            assert!(game.bullets.len() <= game.settings.max_bullets);
        }
        assert_eq!(game.bullets.len(), game.settings.max_bullets);
        cleanup(&score_path());
    }

    #[test]
    fn offscreen_bullets_are_culled() {
        let mut game = test_game();
        for alien in &mut game.fleet.aliens {
            alien.y = -1000.0;
        }
        game.update(FIRE);
        assert_eq!(game.bullets.len(), 1);
        // Run long enough for the shot to clear the top.
        for _ in 0..2_000 {
            game.update(Controls::default());
            for b in &game.bullets {
                assert!(b.rect().bottom() > 0.0);
            }
        }
        assert!(game.bullets.is_empty());
        cleanup(&score_path());
    }

    #[test]
    fn kills_score_points_and_update_high_score() {
        let mut game = test_game();
        let points = game.settings.alien_points;

        // Drop a bullet directly on top of the first alien.
        let target = game.fleet.aliens[0].clone();
        game.update(FIRE);
        let bullet = game.bullets.last_mut().unwrap();
        bullet.x = target.x;
        bullet.y = target.y;

        let before = game.fleet.aliens.len();
        game.update(Controls::default());
        let destroyed = before - game.fleet.aliens.len();
        assert!(destroyed >= 1);
        assert_eq!(game.stats.score, points * destroyed as u32);
        assert_eq!(game.stats.high_score, game.stats.score);
        cleanup(&score_path());
    }

    #[test]
    fn clearing_the_fleet_advances_the_level() {
        let mut game = test_game();
        let speed_before = game.settings.alien_speed;

        game.update(FIRE);
        assert!(!game.bullets.is_empty());
        game.fleet.aliens.clear();
        // Next bullet pass notices the empty fleet.
        game.update(Controls::default());

        assert_eq!(game.stats.level, 2);
        assert!(game.bullets.is_empty());
        assert!(!game.fleet.is_empty());
        assert!(game.settings.alien_speed > speed_before);
        cleanup(&score_path());
    }

    #[test]
    fn ship_hit_costs_a_life_and_stuns() {
        let mut game = test_game();
        let lives = game.stats.ships_left;

        // Teleport an alien onto the ship.
        let ship_rect = game.ship.rect();
        game.fleet.aliens[0].x = ship_rect.x;
        game.fleet.aliens[0].y = ship_rect.y;
        game.update(Controls::default());

        assert_eq!(game.stats.ships_left, lives - 1);
        assert!(matches!(game.phase, Phase::Stunned { .. }));
        assert!(game.bullets.is_empty());
        // Fresh fleet, recentered ship.
        let mid = game.ship.x + game.ship.width / 2.0;
        assert!((mid - game.settings.field_width / 2.0).abs() < 0.01);
        cleanup(&score_path());
    }

    #[test]
    fn stun_freezes_the_simulation_then_expires() {
        let mut game = test_game();
        game.phase = Phase::Stunned { ticks: 3 };
        let ship_x = game.ship.x;
        let fleet_x: Vec<f32> = game.fleet.aliens.iter().map(|a| a.x).collect();

        for _ in 0..2 {
            game.update(FIRE);
            assert!(matches!(game.phase, Phase::Stunned { .. }));
        }
        // Nothing moved and nothing fired while stunned.
        assert_eq!(game.ship.x, ship_x);
        assert!(game.bullets.is_empty());
        let fleet_after: Vec<f32> = game.fleet.aliens.iter().map(|a| a.x).collect();
        assert_eq!(fleet_x, fleet_after);

        game.update(Controls::default());
        assert_eq!(game.phase, Phase::Active);
        cleanup(&score_path());
    }

    #[test]
    fn alien_reaching_bottom_counts_as_a_hit() {
        let mut game = test_game();
        let lives = game.stats.ships_left;
        game.fleet.aliens[0].y = game.settings.field_height;
        game.update(Controls::default());
        assert_eq!(game.stats.ships_left, lives - 1);
        cleanup(&score_path());
    }

    #[test]
    fn final_hit_deactivates_without_resetting_the_board() {
        let mut game = test_game();
        game.stats.ships_left = 0;

        let ship_rect = game.ship.rect();
        game.fleet.aliens[0].x = ship_rect.x;
        game.fleet.aliens[0].y = ship_rect.y;
        let fleet_size = game.fleet.aliens.len();
        game.update(Controls::default());

        assert_eq!(game.phase, Phase::Inactive);
        assert_eq!(game.stats.ships_left, 0);
        // No fleet rebuild on game over: the board is left as it died.
        assert_eq!(game.fleet.aliens.len(), fleet_size);

        // And it stays down until Play is clicked again.
        for _ in 0..100 {
            game.update(FIRE);
        }
        assert_eq!(game.phase, Phase::Inactive);
        game.start_round();
        assert_eq!(game.phase, Phase::Active);
        assert_eq!(game.stats.ships_left, game.settings.ship_limit);
        cleanup(&score_path());
    }

    #[test]
    fn restarting_resets_difficulty_and_score() {
        let mut game = test_game();
        game.settings.increase_speed();
        game.settings.increase_speed();
        game.stats.score = 700;
        game.stats.high_score = 700;
        game.phase = Phase::Inactive;

        game.start_round();
        assert_eq!(game.settings.alien_points, 50);
        assert_eq!(game.stats.score, 0);
        assert_eq!(game.stats.high_score, 700);
        cleanup(&score_path());
    }
}

use crate::game::alien::Alien;
use crate::game::rect::RectF;
use crate::settings::Settings;

/// The full set of live aliens plus their shared movement direction.
/// Every alien marches the same way; touching either side of the field
/// drops the whole formation one step and reverses it.
pub struct Fleet {
    pub aliens: Vec<Alien>,
    pub direction: f32, // 1.0 = right, -1.0 = left
}

impl Fleet {
    /// Lay out the grid. Sizing is pure arithmetic on the settings, so the
    /// same settings always produce the same formation: two alien-widths of
    /// horizontal margin, one alien of spacing between columns, and enough
    /// head room at the bottom for the ship plus a safety band.
    pub fn build(settings: &Settings) -> Self {
        let alien_w = settings.alien_width;
        let alien_h = settings.alien_height;

        let available_x = settings.field_width - 2.0 * alien_w;
        let columns = (available_x / (2.0 * alien_w)) as usize;

        let available_y = settings.field_height - 4.0 * alien_h - settings.ship_height;
        let rows = (available_y / (2.0 * alien_h)) as usize;

        let mut aliens = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                let x = alien_w + 2.0 * alien_w * col as f32;
                let y = alien_h + 2.0 * alien_h * row as f32;
                aliens.push(Alien::new(x, y, alien_w, alien_h));
            }
        }

        Fleet {
            aliens,
            direction: 1.0,
        }
    }

    /// Advance one tick. If any alien touches a horizontal edge first, the
    /// whole fleet drops and the direction flips, exactly once, before the
    /// horizontal step is applied.
    pub fn update(&mut self, settings: &Settings) {
        if self.any_at_edge(settings) {
            self.drop_and_turn(settings);
        }
        let dx = self.direction * settings.alien_speed;
        for alien in &mut self.aliens {
            alien.x += dx;
        }
    }

    fn any_at_edge(&self, settings: &Settings) -> bool {
        self.aliens.iter().any(|a| {
            let r = a.rect();
            r.left() <= 0.0 || r.right() >= settings.field_width
        })
    }

    fn drop_and_turn(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.y += settings.fleet_drop;
        }
        self.direction = -self.direction;
    }

    /// True if any alien has reached the bottom of the field.
    pub fn any_at_bottom(&self, settings: &Settings) -> bool {
        self.aliens
            .iter()
            .any(|a| a.rect().bottom() >= settings.field_height)
    }

    pub fn any_intersects(&self, rect: &RectF) -> bool {
        self.aliens.iter().any(|a| a.rect().intersects(rect))
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    /// Remove every alien overlapping `rect`, returning how many died.
    pub fn kill_intersecting(&mut self, rect: &RectF) -> usize {
        let before = self.aliens.len();
        self.aliens.retain(|a| !a.rect().intersects(rect));
        before - self.aliens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(fleet: &Fleet) -> Vec<(f32, f32)> {
        fleet.aliens.iter().map(|a| (a.x, a.y)).collect()
    }

    #[test]
    fn layout_is_deterministic() {
        let settings = Settings::new();
        let a = Fleet::build(&settings);
        let b = Fleet::build(&settings);
        assert!(!a.is_empty());
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn layout_follows_the_grid_formula() {
        let settings = Settings::new();
        let fleet = Fleet::build(&settings);
        let w = settings.alien_width;
        let h = settings.alien_height;

        let columns = ((settings.field_width - 2.0 * w) / (2.0 * w)) as usize;
        let rows = ((settings.field_height - 4.0 * h - settings.ship_height) / (2.0 * h)) as usize;
        assert_eq!(fleet.aliens.len(), rows * columns);

        for (i, alien) in fleet.aliens.iter().enumerate() {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            assert_eq!(alien.x, w + 2.0 * w * col);
            assert_eq!(alien.y, h + 2.0 * h * row);
        }
    }

    #[test]
    fn fleet_fits_inside_the_field() {
        let settings = Settings::new();
        let fleet = Fleet::build(&settings);
        for alien in &fleet.aliens {
            assert!(alien.rect().left() > 0.0);
            assert!(alien.rect().right() < settings.field_width);
        }
    }

    #[test]
    fn edge_contact_drops_and_flips_exactly_once() {
        let settings = Settings::new();
        let mut fleet = Fleet::build(&settings);
        // Two aliens on the edge at once must still produce a single drop.
        fleet.aliens[0].x = settings.field_width - fleet.aliens[0].width;
        fleet.aliens[1].x = settings.field_width - fleet.aliens[1].width;
        let y_before: Vec<f32> = fleet.aliens.iter().map(|a| a.y).collect();

        fleet.update(&settings);

        assert_eq!(fleet.direction, -1.0);
        for (alien, y0) in fleet.aliens.iter().zip(y_before) {
            assert_eq!(alien.y, y0 + settings.fleet_drop);
        }
    }

    #[test]
    fn fleet_marches_in_its_direction() {
        let settings = Settings::new();
        let mut fleet = Fleet::build(&settings);
        let x_before: Vec<f32> = fleet.aliens.iter().map(|a| a.x).collect();
        fleet.update(&settings);
        for (alien, x0) in fleet.aliens.iter().zip(x_before) {
            assert_eq!(alien.x, x0 + settings.alien_speed);
        }
    }

    #[test]
    fn kill_intersecting_reports_the_count() {
        let settings = Settings::new();
        let mut fleet = Fleet::build(&settings);
        let total = fleet.aliens.len();
        let target = fleet.aliens[0].rect();
        let killed = fleet.kill_intersecting(&target);
        assert_eq!(killed, 1);
        assert_eq!(fleet.aliens.len(), total - 1);
        // Same spot again hits nothing.
        assert_eq!(fleet.kill_intersecting(&target), 0);
    }

    #[test]
    fn bottom_detection() {
        let settings = Settings::new();
        let mut fleet = Fleet::build(&settings);
        assert!(!fleet.any_at_bottom(&settings));
        fleet.aliens[0].y = settings.field_height - fleet.aliens[0].height;
        assert!(fleet.any_at_bottom(&settings));
    }
}

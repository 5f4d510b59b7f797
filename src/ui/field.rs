//! Braille-resolution renderer for the play field. Each terminal cell packs
//! a 2x4 dot matrix, giving sub-cell positions for sprites this small.

use std::collections::HashMap;

use ratatui::prelude::*;

use crate::game::AlienInvasion;

const BG: Color = Color::Rgb(2, 2, 10);
const STAR_COLOR: Color = Color::Rgb(70, 70, 90);
const ALIEN_COLOR: Color = Color::Rgb(120, 255, 140);
const SHIP_COLOR: Color = Color::Rgb(120, 200, 255);
const BULLET_COLOR: Color = Color::Rgb(255, 255, 190);
const GROUND_COLOR: Color = Color::Rgb(40, 80, 40);

// Two animation frames of the invader, as braille-pixel offsets from its
// center. Frame B swings the legs inward.
const ALIEN_FRAME_A: &[(i32, i32)] = &[
    (-2, -2), (2, -2),
    (-1, -1), (1, -1),
    (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0),
    (-3, 1), (-2, 1), (0, 1), (2, 1), (3, 1),
    (-3, 2), (3, 2),
];
const ALIEN_FRAME_B: &[(i32, i32)] = &[
    (-2, -2), (2, -2),
    (-1, -1), (1, -1),
    (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0),
    (-3, 1), (-2, 1), (0, 1), (2, 1), (3, 1),
    (-1, 2), (1, 2),
];

const SHIP_SPRITE: &[(i32, i32)] = &[
    (0, -2),
    (-1, -1), (0, -1), (1, -1),
    (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0),
    (-3, 1), (-2, 1), (-1, 1), (0, 1), (1, 1), (2, 1), (3, 1),
];

/// Dot buffer one frame wide. Dots accumulate per cell; the color of the
/// last dot written to a cell wins, which layers sprites over the stars.
struct Canvas {
    w: usize,
    h: usize,
    cells: HashMap<(usize, usize), (u8, Color)>,
}

impl Canvas {
    fn new(w: usize, h: usize) -> Self {
        Canvas {
            w,
            h,
            cells: HashMap::new(),
        }
    }

    fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
        match (sub_x, sub_y) {
            (0, 0) => 0x01,
            (0, 1) => 0x02,
            (0, 2) => 0x04,
            (0, 3) => 0x40,
            (1, 0) => 0x08,
            (1, 1) => 0x10,
            (1, 2) => 0x20,
            (1, 3) => 0x80,
            _ => 0,
        }
    }

    fn dot(&mut self, bx: i32, by: i32, color: Color) {
        if bx < 0 || by < 0 {
            return;
        }
        let (cx, cy) = (bx as usize / 2, by as usize / 4);
        if cx >= self.w || cy >= self.h {
            return;
        }
        let bit = Self::braille_bit(bx as usize % 2, by as usize % 4);
        let cell = self.cells.entry((cx, cy)).or_insert((0, color));
        cell.0 |= bit;
        cell.1 = color;
    }

    fn sprite(&mut self, pixels: &[(i32, i32)], cx: i32, cy: i32, color: Color) {
        for &(dx, dy) in pixels {
            self.dot(cx + dx, cy + dy, color);
        }
    }
}

/// Render the game into `width` x `height` cells of styled text.
pub fn render_field(game: &AlienInvasion, width: usize, height: usize) -> Vec<Line<'static>> {
    let mut canvas = Canvas::new(width, height);
    let bw = (width * 2) as f32;
    let bh = (height * 4) as f32;
    let sx = bw / game.settings.field_width;
    let sy = bh / game.settings.field_height;

    // Fixed starfield, a thin hash over the braille grid.
    for by in (0..bh as i32).step_by(3) {
        for bx in (0..bw as i32).step_by(5) {
            if (bx * 31 + by * 17) % 23 == 0 {
                canvas.dot(bx, by, STAR_COLOR);
            }
        }
    }

    let frame_a = (game.tick / 20) % 2 == 0;
    let alien_frame = if frame_a { ALIEN_FRAME_A } else { ALIEN_FRAME_B };
    for alien in &game.fleet.aliens {
        let cx = ((alien.x + alien.width / 2.0) * sx) as i32;
        let cy = ((alien.y + alien.height / 2.0) * sy) as i32;
        canvas.sprite(alien_frame, cx, cy, ALIEN_COLOR);
    }

    for bullet in &game.bullets {
        let bx = ((bullet.x + bullet.width / 2.0) * sx) as i32;
        let by = (bullet.y * sy) as i32;
        for dy in 0..3 {
            canvas.dot(bx, by + dy, BULLET_COLOR);
        }
    }

    let ship = &game.ship;
    let cx = ((ship.x + ship.width / 2.0) * sx) as i32;
    let cy = ((ship.y + ship.height / 2.0) * sy) as i32;
    canvas.sprite(SHIP_SPRITE, cx, cy, SHIP_COLOR);

    // Flatten to styled lines, with a ground rule along the bottom row.
    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(BG)); width]; height];
    for ((cx, cy), (bits, color)) in canvas.cells {
        if bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            grid[cy][cx] = (ch, Style::default().fg(color).bg(BG));
        }
    }
    if height > 0 {
        let ground = Style::default().fg(GROUND_COLOR).bg(BG);
        for x in 0..width {
            grid[height - 1][x] = ('\u{2500}', ground);
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

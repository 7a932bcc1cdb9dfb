//! Confetti particle field drawn over the board after a win.
//!
//! Particles live in unit coordinates (`0.0..1.0` on both axes) so the field
//! survives terminal resizes; they are scaled to the target area when drawn.

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const GLYPHS: &[char] = &['*', '+', '•', '~', '°', '✦'];

const COLORS: &[Color] = &[
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// Per-tick damping applied to sideways drift.
const DRIFT_DAMPING: f32 = 0.96;

/// A single piece of confetti.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in `0.0..1.0`.
    pub x: f32,
    /// Vertical position; below `0.0` is above the screen, `1.0` is the bottom.
    pub y: f32,
    /// Sideways drift per tick.
    pub vx: f32,
    /// Fall speed per tick.
    pub vy: f32,
    /// Character drawn for this particle.
    pub glyph: char,
    /// Foreground color.
    pub color: Color,
}

impl Particle {
    fn spawn(rng: &mut impl Rng, y: f32) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            y,
            vx: rng.random_range(-0.01..0.01),
            vy: rng.random_range(0.01..0.04),
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            color: COLORS[rng.random_range(0..COLORS.len())],
        }
    }
}

/// A field of falling confetti.
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    /// An empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field with `count` particles scattered above and across the screen.
    pub fn burst(&mut self, count: usize, rng: &mut impl Rng) {
        self.particles = (0..count)
            .map(|_| {
                let y = rng.random_range(-1.0..0.5);
                Particle::spawn(rng, y)
            })
            .collect();
    }

    /// Advance every particle one step. Particles that fall off the bottom
    /// re-enter at the top.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        for p in &mut self.particles {
            p.vx = (p.vx + rng.random_range(-0.004..0.004)) * DRIFT_DAMPING;
            p.x = wrap_unit(p.x + p.vx);
            p.y += p.vy;
            if p.y >= 1.0 {
                *p = Particle::spawn(rng, 0.0);
            }
        }
    }

    /// Remove every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Whether any particles are live.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// The live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Wrap a coordinate into `0.0..1.0`.
fn wrap_unit(v: f32) -> f32 {
    let wrapped = v.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for p in &self.particles {
            if !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let col = area.x + (p.x * f32::from(area.width)) as u16;
            let row = area.y + (p.y * f32::from(area.height)) as u16;
            let pos = (col.min(area.right() - 1), row.min(area.bottom() - 1));
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char(p.glyph).set_fg(p.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn burst_and_clear() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut confetti = Confetti::new();
        assert!(!confetti.is_active());

        confetti.burst(30, &mut rng);
        assert_eq!(confetti.particles().len(), 30);
        assert!(confetti.is_active());

        confetti.clear();
        assert!(!confetti.is_active());
    }

    #[test]
    fn particles_stay_in_bounds_while_falling() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut confetti = Confetti::new();
        confetti.burst(50, &mut rng);
        for _ in 0..500 {
            confetti.tick(&mut rng);
            for p in confetti.particles() {
                assert!((0.0..1.0).contains(&p.x));
                assert!(p.y < 1.0);
            }
        }
        assert_eq!(confetti.particles().len(), 50);
    }

    #[test]
    fn tick_moves_particles_down() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut confetti = Confetti::new();
        confetti.burst(1, &mut rng);
        let before = confetti.particles()[0];
        confetti.tick(&mut rng);
        let after = confetti.particles()[0];
        assert!(after.y > before.y || after.y == 0.0);
    }

    #[test]
    fn renders_inside_area() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut confetti = Confetti::new();
        confetti.burst(200, &mut rng);
        for _ in 0..40 {
            confetti.tick(&mut rng);
        }

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        (&confetti).render(area, &mut buf);

        let drawn = buf
            .content
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count();
        assert!(drawn > 0);
    }

    #[test]
    fn wrap_unit_stays_below_one() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert!((wrap_unit(1.5) - 0.5).abs() < f32::EPSILON);
        assert!(wrap_unit(-1e-10) < 1.0);
    }

    #[test]
    fn empty_area_is_ignored() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut confetti = Confetti::new();
        confetti.burst(10, &mut rng);
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        (&confetti).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert!(buf.content.iter().all(|cell| cell.symbol() == " "));
    }
}

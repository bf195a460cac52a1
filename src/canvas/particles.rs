//! Falling "data rain" background.
//!
//! A fixed number of square particles fall at their own speed and are reset
//! above the surface once they leave it at the bottom. Particles are never
//! removed; a resize rebuilds the whole field.

use rand::Rng;

use super::surface::Surface;
use crate::constants::{PARTICLE_GLOW, PARTICLE_SPAWN_Y};
use crate::scheduler::frame::Animate;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub size: f64,
    pub color: String,
}

impl Particle {
    /// A particle somewhere inside the surface, as seen on first paint.
    pub fn scattered<R: Rng>(rng: &mut R, width: f64, height: f64, colors: &(String, String)) -> Self {
        let mut particle = Self::spawned(rng, width, colors);
        particle.y = sample(rng, 0.0, height);
        particle
    }

    /// A particle just above the top edge.
    pub fn spawned<R: Rng>(rng: &mut R, width: f64, colors: &(String, String)) -> Self {
        let color = if rng.gen_bool(0.5) {
            colors.0.clone()
        } else {
            colors.1.clone()
        };
        Particle {
            x: sample(rng, 0.0, width),
            y: PARTICLE_SPAWN_Y,
            speed: rng.gen_range(1.0..3.0),
            size: rng.gen_range(1.0..3.0),
            color,
        }
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64, colors: &(String, String)) {
        self.y += self.speed;
        if self.y > height {
            *self = Self::spawned(rng, width, colors);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.x, self.y, self.size, self.size, &self.color, PARTICLE_GLOW);
    }
}

// `gen_range` panics on an empty range, which a zero-sized canvas produces.
fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

pub struct ParticleField<R: Rng> {
    particles: Vec<Particle>,
    count: usize,
    width: f64,
    height: f64,
    colors: (String, String),
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(count: usize, width: f64, height: f64, colors: (String, String), rng: R) -> Self {
        let mut field = ParticleField {
            particles: Vec::with_capacity(count),
            count,
            width,
            height,
            colors,
            rng,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        self.particles.clear();
        for _ in 0..self.count {
            let particle = Particle::scattered(&mut self.rng, self.width, self.height, &self.colors);
            self.particles.push(particle);
        }
    }

    /// Adopt new bounds; positions are not preserved.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update(&mut self.rng, self.width, self.height, &self.colors);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        for particle in &self.particles {
            particle.draw(surface);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl<R: Rng> Animate for ParticleField<R> {
    fn frame(&mut self, surface: &mut dyn Surface) {
        self.update();
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::surface::{DrawCommand, RecordingSurface};
    use crate::constants::{PARTICLE_COLOR_CYAN, PARTICLE_COLOR_MAGENTA};
    #[cfg(not(target_arch = "wasm32"))]
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn colors() -> (String, String) {
        (PARTICLE_COLOR_CYAN.to_string(), PARTICLE_COLOR_MAGENTA.to_string())
    }

    fn field(seed: u64, count: usize, w: f64, h: f64) -> ParticleField<SmallRng> {
        ParticleField::new(count, w, h, colors(), SmallRng::seed_from_u64(seed))
    }

    fn assert_in_ranges(p: &Particle, width: f64) {
        assert!(p.x >= 0.0 && p.x < width, "x out of range: {}", p.x);
        assert!(p.speed >= 1.0 && p.speed < 3.0, "speed out of range: {}", p.speed);
        assert!(p.size >= 1.0 && p.size < 3.0, "size out of range: {}", p.size);
        assert!(p.color == PARTICLE_COLOR_CYAN || p.color == PARTICLE_COLOR_MAGENTA);
    }

    #[test]
    fn initial_field_is_scattered_inside_bounds() {
        let f = field(7, 100, 800.0, 600.0);
        assert_eq!(f.particles().len(), 100);
        for p in f.particles() {
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert_in_ranges(p, 800.0);
        }
    }

    #[test]
    fn draw_clears_then_fills_every_particle() {
        let f = field(1, 5, 100.0, 100.0);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        f.draw(&mut surface);
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        let rects = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, 5);
    }

    #[test]
    fn resize_rebuilds_for_new_bounds() {
        let mut f = field(3, 40, 1000.0, 1000.0);
        f.resize(50.0, 20.0);
        assert_eq!(f.bounds(), (50.0, 20.0));
        assert_eq!(f.particles().len(), 40);
        for p in f.particles() {
            assert!(p.y >= 0.0 && p.y < 20.0);
            assert_in_ranges(p, 50.0);
        }
    }

    #[test]
    fn zero_sized_surface_does_not_panic() {
        let mut f = field(9, 10, 0.0, 0.0);
        for _ in 0..5 {
            f.update();
        }
        assert_eq!(f.particles().len(), 10);
    }

    #[cfg(not(target_arch = "wasm32"))]
    proptest! {
        #[test]
        fn every_tick_falls_by_speed_or_respawns(seed in any::<u64>(), ticks in 1usize..200) {
            let (w, h) = (320.0, 240.0);
            let mut f = field(seed, 30, w, h);
            for _ in 0..ticks {
                let before: Vec<Particle> = f.particles().to_vec();
                f.update();
                for (old, new) in before.iter().zip(f.particles()) {
                    let fallen = old.y + old.speed;
                    if fallen > h {
                        prop_assert_eq!(new.y, PARTICLE_SPAWN_Y);
                        assert_in_ranges(new, w);
                    } else {
                        prop_assert_eq!(new.y, fallen);
                        prop_assert_eq!(new.x, old.x);
                        prop_assert_eq!(new.speed, old.speed);
                    }
                    prop_assert!(new.y >= PARTICLE_SPAWN_Y && new.y <= h);
                }
            }
        }
    }
}

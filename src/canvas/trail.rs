//! Glowing cursor trail.
//!
//! Pointer positions are queued with a life of 1.0 and fade out frame by
//! frame. Brightness and radius follow the queue index, so the newest point
//! (highest index) is drawn largest; `life` only decides when a point leaves.

use std::collections::VecDeque;

use super::surface::Surface;
use crate::constants::{MAX_TRAIL_CAPACITY, TRAIL_GLOW, TRAIL_GLOW_COLOR, TRAIL_MAX_RADIUS};
use crate::scheduler::frame::Animate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub life: f64,
}

#[derive(Debug, Clone)]
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    decay_step: f64,
}

impl CursorTrail {
    pub fn new(capacity: usize, decay_step: f64) -> Self {
        // Only pre-allocate for the sizes a page plausibly configures.
        let reserve = capacity.min(MAX_TRAIL_CAPACITY).saturating_add(1);
        CursorTrail {
            points: VecDeque::with_capacity(reserve),
            capacity: capacity.max(1),
            decay_step,
        }
    }

    /// Record a pointer position; the oldest point is evicted past capacity.
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push_back(TrailPoint { x, y, life: 1.0 });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// `(alpha, radius)` for the point at `index`.
    pub fn appearance(&self, index: usize, point: &TrailPoint) -> (f64, f64) {
        let weight = index as f64 / self.capacity as f64;
        (point.life * weight, TRAIL_MAX_RADIUS * weight)
    }

    /// Draw every point with its current life, then age the whole queue.
    pub fn render_and_decay(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        for index in 0..self.points.len() {
            let point = self.points[index];
            let (alpha, radius) = self.appearance(index, &point);
            let fill = format!("rgba(0, 240, 255, {})", alpha);
            surface.fill_circle(point.x, point.y, radius, &fill, TRAIL_GLOW_COLOR, TRAIL_GLOW);
            self.points[index].life -= self.decay_step;
        }
        self.points.retain(|p| p.life > 0.0);
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Animate for CursorTrail {
    fn frame(&mut self, surface: &mut dyn Surface) {
        self.render_and_decay(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::surface::{DrawCommand, RecordingSurface};
    use crate::constants::{DEFAULT_TRAIL_CAPACITY, DEFAULT_TRAIL_DECAY_STEP};
    #[cfg(not(target_arch = "wasm32"))]
    use proptest::prelude::*;

    fn trail() -> CursorTrail {
        CursorTrail::new(DEFAULT_TRAIL_CAPACITY, DEFAULT_TRAIL_DECAY_STEP)
    }

    #[test]
    fn twenty_first_point_evicts_the_oldest() {
        let mut t = trail();
        for i in 0..20 {
            t.push(i as f64, 0.0);
        }
        assert_eq!(t.len(), 20);
        t.push(20.0, 0.0);
        assert_eq!(t.len(), 20);
        let xs: Vec<f64> = t.points().map(|p| p.x).collect();
        assert_eq!(xs.first(), Some(&1.0));
        assert_eq!(xs.last(), Some(&20.0));
    }

    #[test]
    fn life_drops_by_step_each_frame() {
        let mut t = trail();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        t.push(10.0, 10.0);
        let mut previous = 1.0;
        for _ in 0..10 {
            t.render_and_decay(&mut surface);
            let life = t.points().next().unwrap().life;
            assert!((previous - life - DEFAULT_TRAIL_DECAY_STEP).abs() < 1e-9);
            assert!(life < previous);
            previous = life;
        }
    }

    #[test]
    fn expired_points_leave_the_queue() {
        let mut t = trail();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        t.push(1.0, 1.0);
        // 1.0 / 0.02 frames, plus one for float rounding.
        for _ in 0..51 {
            t.render_and_decay(&mut surface);
        }
        assert!(t.is_empty());
        for p in t.points() {
            assert!(p.life > 0.0);
        }
    }

    #[test]
    fn newest_point_is_drawn_largest() {
        let mut t = trail();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        t.push(1.0, 1.0);
        t.push(2.0, 2.0);
        t.push(3.0, 3.0);
        t.render_and_decay(&mut surface);
        let radii: Vec<f64> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 3);
        assert_eq!(radii[0], 0.0);
        assert!(radii[0] < radii[1] && radii[1] < radii[2]);
        assert!((radii[2] - 5.0 * 2.0 / 20.0).abs() < 1e-12);
    }

    #[test]
    fn unbounded_capacity_does_not_overflow() {
        let mut t = CursorTrail::new(usize::MAX, DEFAULT_TRAIL_DECAY_STEP);
        t.push(1.0, 2.0);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn idle_trail_still_clears_the_surface() {
        let mut t = trail();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        t.render_and_decay(&mut surface);
        assert_eq!(surface.commands, vec![DrawCommand::Clear]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    proptest! {
        #[test]
        fn queue_never_exceeds_capacity(
            ops in prop::collection::vec(prop_oneof![Just(true), Just(false)], 0..300)
        ) {
            let mut t = trail();
            let mut surface = RecordingSurface::new(100.0, 100.0);
            for push in ops {
                if push {
                    t.push(5.0, 5.0);
                } else {
                    t.render_and_decay(&mut surface);
                }
                prop_assert!(t.len() <= DEFAULT_TRAIL_CAPACITY);
                prop_assert!(t.points().all(|p| p.life > 0.0 && p.life <= 1.0));
            }
        }
    }
}

//! Moving rectangles and their bounds
//!
//! Everything in the field (bird, pipe pieces, ground segments) is an
//! `Entity`: a center position, a velocity and a size. Bounds are derived
//! on demand; nothing caches them.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

/// A moving rectangle. `pos` is the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Entity {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self { pos, vel, size }
    }

    /// Bounds derived from the center position and size
    pub fn bounds(&self) -> Aabb {
        let half = self.size * 0.5;
        Aabb {
            min: self.pos - half,
            max: self.pos + half,
        }
    }

    /// Integrate position over dt
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_centered_on_position() {
        let entity = Entity::new(Vec2::new(10.0, 20.0), Vec2::ZERO, Vec2::new(4.0, 6.0));
        let bounds = entity.bounds();
        assert_eq!(bounds.min, Vec2::new(8.0, 17.0));
        assert_eq!(bounds.max, Vec2::new(12.0, 23.0));
    }

    #[test]
    fn test_advance_integrates_velocity() {
        let mut entity = Entity::new(Vec2::ZERO, Vec2::new(-200.0, 50.0), Vec2::ONE);
        entity.advance(0.5);
        assert_eq!(entity.pos, Vec2::new(-100.0, 25.0));
    }
}

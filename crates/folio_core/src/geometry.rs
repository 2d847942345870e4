//! 2D geometry primitives
//!
//! The motion engines work in window-space pixels; `Vec2` carries offsets,
//! velocities, and translation targets between them.

use serde::{Deserialize, Serialize};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Component-wise scale by a scalar
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Clamp each axis independently to `[-limit, limit]`
    pub fn clamp_axes(&self, limit: f32) -> Self {
        Self::new(self.x.clamp(-limit, limit), self.y.clamp(-limit, limit))
    }

    /// Linearly interpolate toward `other` by factor `t`
    pub fn lerp(&self, other: Vec2, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Check approximate equality per axis (for settling detection)
    pub fn approx_eq(&self, other: Vec2, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axes_bounds_both_axes() {
        let v = Vec2::new(35.0, -120.0).clamp_axes(20.0);
        assert_eq!(v, Vec2::new(20.0, -20.0));

        let inside = Vec2::new(5.0, -3.0).clamp_axes(20.0);
        assert_eq!(inside, Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, -4.0);
        let mid = a.lerp(b, 0.5);
        assert!(mid.approx_eq(Vec2::new(5.0, -2.0), 1e-6));
    }
}

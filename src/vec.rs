//! 2D vector type for positions, directions and gravity.

use crate::float::Float;
use core::ops::{Add, Sub, Neg, Mul, Div};

/// Below this length a vector has no usable direction.
const NORMALIZE_EPSILON: f32 = 1e-10;

/// 2D vector. A plain value: every operation returns a new vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns the zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(NORMALIZE_EPSILON)) {
            Self::zero()
        } else {
            self / len
        }
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }

    // ----------------------------------------------------------------------
    // Helpers not used by the solver, handy for demos and builders.
    // ----------------------------------------------------------------------

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Vec2 { x: self.x.min(other.x), y: self.y.min(other.y) }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Vec2 { x: self.x.max(other.x), y: self.y.max(other.y) }
    }

    /// Angle from the positive x axis, in radians.
    pub fn angle(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// Rotate around `center` by `radians` (counter-clockwise).
    pub fn rotate_about(self, center: Self, radians: F) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        let rel = self - center;
        Vec2 {
            x: rel.x * cos - rel.y * sin + center.x,
            y: rel.x * sin + rel.y * cos + center.y,
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self { self.scale(rhs) }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self { Vec2 { x: self.x / rhs, y: self.y / rhs } }
}

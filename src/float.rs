//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations the simulation needs.
///
/// Implemented for `f32` and `f64`. Scenes are usually `f64`; `f32` is
/// handy when positions are shipped straight to a renderer.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert from f64. Use for constants not exactly representable in f32.
    fn from_f64(v: f64) -> Self;
    /// Convert a count or index into this float type.
    fn from_usize(v: usize) -> Self;
    /// Arctangent of y/x, with correct quadrant.
    fn atan2(y: Self, x: Self) -> Self;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_f64(v: f64) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
}

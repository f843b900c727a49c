// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

use std::cmp::Ordering;

/// Color type alias (linear RGB, unbounded above).
///
/// Same algebra as [`Vec3`], but never normalized or cross-multiplied.
pub type Color = Vec3;

/// Element-wise operations glam does not provide on `Vec3`.
pub trait Vec3Ext {
    /// Raise every component to `exp`.
    fn powf_elem(self, exp: f32) -> Self;

    /// Square root of every component.
    fn sqrt_elem(self) -> Self;

    /// Componentwise lexicographic comparison (x, then y, then z).
    fn lex_cmp(&self, other: &Self) -> Option<Ordering>;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn powf_elem(self, exp: f32) -> Self {
        Vec3::new(self.x.powf(exp), self.y.powf(exp), self.z.powf(exp))
    }

    #[inline]
    fn sqrt_elem(self) -> Self {
        Vec3::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
    }

    fn lex_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match self.y.partial_cmp(&other.y)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        self.z.partial_cmp(&other.z)
    }
}

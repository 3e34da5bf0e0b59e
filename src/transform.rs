//! 2D transformation matrices for positioning words on a surface.

use crate::units::*;

/// An affine transformation used to place individually drawn words.
///
/// Surface coordinates have (0,0) at the top-left with y growing downwards.
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
///
/// # Composing transforms
///
/// Transforms can be chained using [`then`](Transform::then) or the builder methods
/// [`with_translate`](Transform::with_translate) and
/// [`with_rotate`](Transform::with_rotate). Operations are applied in the order
/// they're chained.
///
/// ```
/// use handnote::{Transform, Px};
///
/// // tilt a word slightly about its own origin, then move it into place
/// let transform = Transform::rotate(0.02)
///     .with_translate(Px(40.0), Px(72.0));
/// let (x, y) = transform.apply(Px(0.0), Px(0.0));
/// assert_eq!((x, y), (Px(40.0), Px(72.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: Px, y: Px) -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: *x,
            f: *y,
        }
    }

    /// Create a rotation transform (angle in radians). Because y grows downwards,
    /// positive angles turn clockwise on the surface.
    pub fn rotate(angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Transform {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: Px, y: Px) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Add a rotation to this transform
    pub fn with_rotate(self, angle: f32) -> Self {
        self.then(Transform::rotate(angle))
    }

    /// Map a point through the transform
    pub fn apply(&self, x: Px, y: Px) -> (Px, Px) {
        (
            Px(self.a * *x + self.c * *y + self.e),
            Px(self.b * *x + self.d * *y + self.f),
        )
    }
}

impl From<Transform> for tiny_skia::Transform {
    fn from(t: Transform) -> Self {
        tiny_skia::Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
    }
}

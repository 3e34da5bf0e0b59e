use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, MulAssign};

/// A logical surface unit. One logical unit maps onto exactly one output pixel.
///
/// Arithmetic between `Px` values and scaling by plain `f32` factors is supported:
///
/// ```
/// use handnote::Px;
///
/// let line_height = Px(20.0) * 1.5;
/// assert_eq!(line_height, Px(30.0));
/// assert_eq!(Px(40.0) + Px(2.0), Px(42.0));
/// ```
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    From,
    Into,
    Display,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    /// The larger of two lengths
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Whether the length is a finite number (not NaN or infinite)
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl MulAssign<f32> for Px {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_logical_units() {
        let mut x = Px(40.0);
        x += Px(75.0) + Px(15.0);
        assert_eq!(x, Px(130.0));
        assert_eq!(Px(400.0) - Px(40.0) * 2.0, Px(320.0));
        assert_eq!(Px(90.0) / 3.0, Px(30.0));
    }

    #[test]
    fn lengths_sum_and_compare() {
        let total: Px = [Px(1.0), Px(2.5), Px(3.5)].into_iter().sum();
        assert_eq!(total, Px(7.0));
        assert!(Px(121.0) > Px(120.0));
        assert_eq!(Px(3.0).max(Px(4.0)), Px(4.0));
        assert_eq!(Px::from(400u32), Px(400.0));
        assert_eq!(Px(12.5).to_string(), "12.5px");
    }
}

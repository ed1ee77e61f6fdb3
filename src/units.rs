//! Angle units for the overlay transforms
//!
//! Draw calls take degrees, the recognizer reports radians.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Deref, Neg, Sub};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f32);

impl Degrees {
    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees() as f32)
    }

    pub fn radians(&self) -> f32 {
        self.0.to_radians()
    }
}

impl Deref for Degrees {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Degrees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Display for Degrees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

pub const QUARTER: Degrees = Degrees(90.0);
pub const HALF: Degrees = Degrees(180.0);

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_from_radians() {
        let angle = Degrees::from_radians(PI / 4.0);
        assert!((*angle - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip_through_radians() {
        let angle = Degrees(30.0);
        assert!((angle.radians() - std::f32::consts::FRAC_PI_6).abs() < 1e-6);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Degrees(45.0) + Degrees(25.0), Degrees(70.0));
        assert_eq!(Degrees(45.0) - QUARTER, Degrees(-45.0));
        assert_eq!(-QUARTER, Degrees(-90.0));
    }
}

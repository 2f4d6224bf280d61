//! Type-safe physical units for link budget calculations
//!
//! This module provides strongly-typed lengths using the `uom` crate to
//! prevent unit confusion errors at compile time. Link geometry mixes
//! millimeters (gap distance, detector size) with nanometers (wavelengths),
//! which is exactly the kind of mixing that benefits from typed units.

use uom::si::f64::*;
use uom::si::length::{centimeter, meter, millimeter, nanometer};

/// Type alias for length measurements with convenient methods
pub type Length = uom::si::f64::Length;

/// Extension trait for length conversions commonly used in link geometry
pub trait LengthExt {
    /// Create length from nanometers (wavelengths)
    fn from_nanometers(nm: f64) -> Self;

    /// Get length in nanometers
    fn as_nanometers(&self) -> f64;

    /// Create length from millimeters (link gaps and detector sizes)
    fn from_millimeters(mm: f64) -> Self;

    /// Get length in millimeters
    fn as_millimeters(&self) -> f64;

    /// Create length from centimeters
    fn from_centimeters(cm: f64) -> Self;

    /// Get length in centimeters
    fn as_centimeters(&self) -> f64;

    /// Create length from meters
    fn from_meters(m: f64) -> Self;

    /// Get length in meters
    fn as_meters(&self) -> f64;
}

impl LengthExt for Length {
    fn from_nanometers(nm: f64) -> Self {
        Length::new::<nanometer>(nm)
    }

    fn as_nanometers(&self) -> f64 {
        self.get::<nanometer>()
    }

    fn from_millimeters(mm: f64) -> Self {
        Length::new::<millimeter>(mm)
    }

    fn as_millimeters(&self) -> f64 {
        self.get::<millimeter>()
    }

    fn from_centimeters(cm: f64) -> Self {
        Length::new::<centimeter>(cm)
    }

    fn as_centimeters(&self) -> f64 {
        self.get::<centimeter>()
    }

    fn from_meters(m: f64) -> Self {
        Length::new::<meter>(m)
    }

    fn as_meters(&self) -> f64 {
        self.get::<meter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_conversions() {
        let gap = Length::from_millimeters(10.0);

        assert_relative_eq!(gap.as_millimeters(), 10.0);
        assert_relative_eq!(gap.as_centimeters(), 1.0);
        assert_relative_eq!(gap.as_meters(), 0.01);
    }

    #[test]
    fn test_wavelength_conversions() {
        let wavelength = Length::from_nanometers(660.0);

        assert_relative_eq!(wavelength.as_nanometers(), 660.0);
        assert_relative_eq!(wavelength.as_meters(), 660.0e-9);
    }
}

//! Radiometric geometry of the link gap
//!
//! The emitter and detector face each other across a short air gap. The
//! power the detector intercepts is the emitter's radiant intensity times
//! the solid angle the detector subtends, so everything downstream starts
//! from the solid-angle calculation here.

/// Solid angle subtended by an on-axis square detector
///
/// Uses the closed-form pyramid solid-angle expression for a square of side
/// `s` viewed face-on from distance `d`:
///
/// `Ω = 4·atan(s² / (2d·√(4d² + 2s²)))`
///
/// The result is monotonically decreasing in distance and increasing in
/// side length, and approaches `s²/d²` in the far field. Both arguments
/// share a unit, so any length unit works.
///
/// # Arguments
///
/// * `side_mm` - Side length of the square detector in millimeters
/// * `distance_mm` - Perpendicular distance from the source in millimeters
///
/// # Returns
///
/// The subtended solid angle in steradians
pub fn square_solid_angle_sr(side_mm: f64, distance_mm: f64) -> f64 {
    if !side_mm.is_finite() || !distance_mm.is_finite() {
        panic!("Geometry cannot contain non-finite values");
    }
    if side_mm <= 0.0 || distance_mm <= 0.0 {
        panic!(
            "Side and distance must be positive, got side {} distance {}",
            side_mm, distance_mm
        );
    }

    let s2 = side_mm * side_mm;
    let d = distance_mm;

    4.0 * (s2 / (2.0 * d * (4.0 * d * d + 2.0 * s2).sqrt())).atan()
}

/// Irradiance at the detector face
///
/// Power intercepted by the detector is `Ie·ratio·Ω`; spreading it over the
/// detector area gives the irradiance. The current ratio scales the
/// datasheet radiant intensity to the actual drive current (LED output is
/// close to linear in forward current over the operating range).
///
/// # Arguments
///
/// * `radiant_intensity_w_sr` - Datasheet radiant intensity in W/sr
/// * `current_ratio` - Drive current over datasheet test current
/// * `solid_angle_sr` - Solid angle subtended by the detector in steradians
/// * `detector_area_m2` - Detector active area in m²
///
/// # Returns
///
/// Irradiance in W/m²
pub fn irradiance_w_per_m2(
    radiant_intensity_w_sr: f64,
    current_ratio: f64,
    solid_angle_sr: f64,
    detector_area_m2: f64,
) -> f64 {
    radiant_intensity_w_sr * current_ratio * solid_angle_sr / detector_area_m2
}

/// Convert an irradiance from W/m² to mW/cm², the unit datasheets quote
pub fn w_per_m2_to_mw_per_cm2(irradiance_w_per_m2: f64) -> f64 {
    // 1 W/m² = 1000 mW / 10000 cm²
    irradiance_w_per_m2 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_form_value() {
        // s = 10mm, d = 10mm worked example
        let omega = square_solid_angle_sr(10.0, 10.0);

        let expected = 4.0 * (100.0f64 / (20.0 * (400.0f64 + 200.0).sqrt())).atan();
        assert_relative_eq!(omega, expected, epsilon = 1e-15);
        assert_relative_eq!(omega, 0.805433, epsilon = 1e-6);
    }

    #[test]
    fn test_scale_invariance() {
        // The same geometry expressed in different units gives the same angle
        let in_mm = square_solid_angle_sr(10.0, 10.0);
        let in_m = square_solid_angle_sr(0.01, 0.01);

        assert_relative_eq!(in_mm, in_m, epsilon = 1e-12);
    }

    #[test]
    fn test_monotonically_decreasing_in_distance() {
        let mut previous = f64::INFINITY;
        for d in [5.0, 10.0, 20.0, 40.0, 80.0, 160.0] {
            let omega = square_solid_angle_sr(10.0, d);
            assert!(
                omega < previous,
                "Expected Ω({}) = {} < {}",
                d,
                omega,
                previous
            );
            previous = omega;
        }
    }

    #[test]
    fn test_monotonically_increasing_in_side() {
        let mut previous = 0.0;
        for s in [1.0, 2.0, 5.0, 10.0, 20.0] {
            let omega = square_solid_angle_sr(s, 10.0);
            assert!(
                omega > previous,
                "Expected Ω({}) = {} > {}",
                s,
                omega,
                previous
            );
            previous = omega;
        }
    }

    #[test]
    fn test_far_field_limit() {
        // At large distance the pyramid formula collapses to s²/d²
        let omega = square_solid_angle_sr(1.0, 1000.0);
        assert_relative_eq!(omega, 1.0 / 1_000_000.0, max_relative = 1e-4);
    }

    #[test]
    fn test_hemisphere_limit() {
        // As the detector grows without bound it fills the half space (2π)
        let omega = square_solid_angle_sr(1e6, 1.0);
        assert_relative_eq!(omega, 2.0 * std::f64::consts::PI, max_relative = 1e-3);
    }

    #[test]
    fn test_worked_example_irradiance() {
        // Ie = 0.029 W/sr at ratio 1 through the 10mm/10mm geometry
        let omega = square_solid_angle_sr(10.0, 10.0);
        let irradiance = irradiance_w_per_m2(0.029, 1.0, omega, 1e-4);

        assert_relative_eq!(irradiance, 233.58, max_relative = 1e-4);
        assert_relative_eq!(
            w_per_m2_to_mw_per_cm2(irradiance),
            23.358,
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_irradiance_linear_in_ratio() {
        let omega = square_solid_angle_sr(10.0, 10.0);

        let full = irradiance_w_per_m2(0.029, 1.0, omega, 1e-4);
        let half = irradiance_w_per_m2(0.029, 0.5, omega, 1e-4);

        assert_relative_eq!(full, 2.0 * half, epsilon = 1e-12);
    }
}

//! Spectral overlap between detector response and source emission
//!
//! How much of a source's radiated power a detector actually responds to
//! depends on how well the two curves overlap. The match factor computed
//! here is a pure shape property: it is unchanged by rescaling either
//! curve's amplitude, so datasheet curves can be used as published without
//! worrying about their normalization conventions.

use log::debug;

use super::observer;
use super::response::SpectralResponse;
use super::trapezoid::trap_integrate;

/// Detector-weighted fraction of a source shape on the observer grid
///
/// Both curves are resampled onto the standard observer wavelength grid
/// (refined with their own sample points) by interpolation; the detector
/// curve is normalized to unit peak so the result reads as "fraction of
/// source power seen by the detector, relative to its best wavelength":
///
/// `match = ∫ R̂(λ)·s(λ)dλ / ∫ s(λ)dλ`
///
/// # Arguments
///
/// * `detector` - Relative spectral response of the detector
/// * `source` - Relative emission curve of the source
///
/// # Returns
///
/// A dimensionless factor in [0, 1]. A source with no power on the observer
/// grid yields 0.0.
pub fn spectral_match(detector: &SpectralResponse, source: &SpectralResponse) -> f64 {
    let grid = observer::integration_grid_nm(&[detector, source]);
    let normalized_detector = detector.normalized_to_peak();

    let weighted = trap_integrate(&grid, |nm| {
        normalized_detector.fraction_at(nm) * source.at(nm)
    })
    .expect("Observer grid is a valid integration domain");
    let total = trap_integrate(&grid, |nm| source.at(nm))
        .expect("Observer grid is a valid integration domain");

    if total == 0.0 {
        return 0.0;
    }

    let matched = weighted / total;
    debug!(
        "spectral match: detector {:.0}-{:.0}nm vs source {:.0}-{:.0}nm -> {:.4}",
        detector.band().lower_nm,
        detector.band().upper_nm,
        source.band().lower_nm,
        source.band().upper_nm,
        matched
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn led_curve() -> SpectralResponse {
        SpectralResponse::from_table(
            vec![620.0, 640.0, 660.0, 680.0, 700.0],
            vec![0.0, 35.0, 100.0, 40.0, 0.0],
        )
        .unwrap()
    }

    fn detector_curve() -> SpectralResponse {
        SpectralResponse::from_table(
            vec![400.0, 500.0, 600.0, 700.0, 800.0],
            vec![10.0, 25.0, 50.0, 75.0, 95.0],
        )
        .unwrap()
    }

    #[test]
    fn test_match_in_unit_range() {
        let matched = spectral_match(&detector_curve(), &led_curve());

        assert!(matched > 0.0);
        assert!(matched <= 1.0);
    }

    #[test]
    fn test_match_invariant_to_source_amplitude() {
        let detector = detector_curve();
        let led = led_curve();
        let led_dim = SpectralResponse::from_table(
            vec![620.0, 640.0, 660.0, 680.0, 700.0],
            vec![0.0, 3.5, 10.0, 4.0, 0.0],
        )
        .unwrap();

        assert_relative_eq!(
            spectral_match(&detector, &led),
            spectral_match(&detector, &led_dim),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_match_invariant_to_detector_amplitude() {
        let led = led_curve();
        let detector = detector_curve();
        let detector_scaled = SpectralResponse::from_table(
            vec![400.0, 500.0, 600.0, 700.0, 800.0],
            vec![2.0, 5.0, 10.0, 15.0, 19.0],
        )
        .unwrap();

        assert_relative_eq!(
            spectral_match(&detector, &led),
            spectral_match(&detector_scaled, &led),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_perfect_detector_sees_everything() {
        // A flat detector at full response passes the source through
        let flat = SpectralResponse::from_table(vec![380.0, 780.0], vec![100.0, 100.0]).unwrap();
        let matched = spectral_match(&flat, &led_curve());

        assert_relative_eq!(matched, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_disjoint_curves_do_not_match() {
        // Blue-only detector against a red LED
        let blue_only =
            SpectralResponse::from_table(vec![400.0, 450.0, 500.0], vec![0.0, 100.0, 0.0]).unwrap();
        let matched = spectral_match(&blue_only, &led_curve());

        assert_relative_eq!(matched, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_invisible_source_matches_nothing() {
        let ir_led =
            SpectralResponse::from_table(vec![900.0, 940.0, 980.0], vec![0.0, 100.0, 0.0]).unwrap();

        assert_eq!(spectral_match(&detector_curve(), &ir_led), 0.0);
    }
}

//! CIE standard observer and photometric weighting
//!
//! Photometric quantities (lumens, lux) weight radiant power by the CIE 1931
//! photopic luminosity function V(λ). This module carries V(λ) sampled on a
//! fixed 380-780nm grid at 10nm steps and derives luminous efficacies of
//! arbitrary source shapes from it.

use once_cell::sync::Lazy;

use super::response::SpectralResponse;
use super::trapezoid::trap_integrate;

/// Peak luminous efficacy of monochromatic 555nm radiation in lm/W
pub const MAX_LUMINOUS_EFFICACY_LM_PER_W: f64 = 683.0;

/// The standard observer wavelength grid in nanometers: 380-780nm at 10nm steps
pub fn wavelength_grid_nm() -> Vec<f64> {
    (0..=40).map(|i| 380.0 + 10.0 * i as f64).collect()
}

/// The observer grid refined with the sample points of the given curves
///
/// Trapezoidal integration only sees the corner points, so curves with
/// features narrower than the 10nm grid pitch (a narrow-line source, a
/// steep datasheet edge) would otherwise be under-resolved or missed.
/// Merging each curve's own sample wavelengths into the grid keeps the
/// piecewise-linear curves exactly representable. Points outside the
/// observer band are discarded.
pub fn integration_grid_nm(curves: &[&SpectralResponse]) -> Vec<f64> {
    let mut grid = wavelength_grid_nm();

    for curve in curves {
        for &nm in curve.wavelengths() {
            if (380.0..=780.0).contains(&nm) {
                grid.push(nm);
            }
        }
    }

    grid.sort_by(|a, b| a.partial_cmp(b).unwrap());
    grid.dedup();
    grid
}

/// CIE 1931 photopic luminosity function V(λ), in percent of peak
///
/// Tabulated at the standard grid wavelengths. V(λ) peaks at 555nm between
/// the 550nm and 560nm samples.
pub static PHOTOPIC: Lazy<SpectralResponse> = Lazy::new(|| {
    let wavelengths = wavelength_grid_nm();
    let responses = vec![
        0.0039, 0.012, 0.0396, 0.121, 0.40, 1.16, 2.30, 3.80, 6.00, 9.098, 13.902, 20.802, 32.30,
        50.30, 71.00, 86.20, 95.40, 99.495, 99.50, 95.20, 87.00, 75.70, 63.10, 50.30, 38.10, 26.50,
        17.50, 10.70, 6.10, 3.20, 1.70, 0.821, 0.4102, 0.2091, 0.1047, 0.052, 0.0249, 0.012, 0.006,
        0.003, 0.0015,
    ];

    SpectralResponse::from_table(wavelengths, responses)
        .expect("Photopic observer curve should be valid")
});

/// Luminous efficacy of a source shape in lm/W
///
/// Computes `683 · ∫V(λ)s(λ)dλ / ∫s(λ)dλ` over the observer grid, the
/// lumens produced per watt of radiant power with the given spectral shape.
/// The result depends only on the shape: scaling the curve's amplitude does
/// not change it. A source with no power on the observer grid yields 0.0.
///
/// # Arguments
///
/// * `source` - The source emission curve (relative response, any amplitude)
///
/// # Returns
///
/// Luminous efficacy in lm/W, between 0 and 683
pub fn luminous_efficacy_lm_per_w(source: &SpectralResponse) -> f64 {
    let grid = integration_grid_nm(&[source]);

    let weighted = trap_integrate(&grid, |nm| PHOTOPIC.fraction_at(nm) * source.at(nm))
        .expect("Observer grid is a valid integration domain");
    let total = trap_integrate(&grid, |nm| source.at(nm))
        .expect("Observer grid is a valid integration domain");

    if total == 0.0 {
        return 0.0;
    }

    MAX_LUMINOUS_EFFICACY_LM_PER_W * weighted / total
}

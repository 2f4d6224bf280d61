//! Black-body radiation models
//!
//! Planck spectral radiance and the Stefan-Boltzmann law, used to model the
//! CIE illuminant A reference source (a 2856K tungsten radiator) that
//! phototransistor datasheets calibrate against.

use once_cell::sync::Lazy;

use super::observer::{self, MAX_LUMINOUS_EFFICACY_LM_PER_W, PHOTOPIC};
use super::response::SpectralResponse;
use super::trapezoid::trap_integrate;

/// Constants in SI units
pub struct SI {}

impl SI {
    /// Planck's constant
    /// Units: 6.62607015e-34 J⋅s
    pub const PLANCK_CONSTANT: f64 = 6.62607015e-34;

    /// Speed of light in vacuum
    /// Units: 2.99792458e8 m/s
    pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

    /// Boltzmann constant
    /// Units: 1.380649e-23 J/K
    pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23;

    /// Stefan-Boltzmann constant
    /// Units: 5.670374419e-8 W⋅m⁻²⋅K⁻⁴
    pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;
}

/// Color temperature of CIE standard illuminant A in Kelvin
pub const ILLUMINANT_A_TEMP_K: f64 = 2856.0;

/// Calculate spectral radiance using Planck's law
///
/// # Arguments
///
/// * `wavelength_m` - Wavelength in meters
/// * `temperature_k` - Black-body temperature in Kelvin
///
/// # Returns
///
/// Spectral radiance in W⋅sr⁻¹⋅m⁻² per meter of wavelength (W⋅sr⁻¹⋅m⁻³)
pub fn planck_spectral_radiance(wavelength_m: f64, temperature_k: f64) -> f64 {
    if wavelength_m <= 0.0 {
        panic!("Wavelength must be positive, got: {}", wavelength_m);
    }
    if temperature_k <= 0.0 {
        panic!("Temperature must be positive, got: {}", temperature_k);
    }

    // B_λ(T) = 2hc² / λ⁵ / (exp(hc/λkT) - 1)
    let numerator = 2.0 * SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT * SI::SPEED_OF_LIGHT;
    let exponent = (SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT)
        / (wavelength_m * SI::BOLTZMANN_CONSTANT * temperature_k);
    let denominator = wavelength_m.powi(5) * (exponent.exp() - 1.0);

    numerator / denominator
}

/// Total radiant exitance of a black body per the Stefan-Boltzmann law
///
/// # Arguments
///
/// * `temperature_k` - Black-body temperature in Kelvin
///
/// # Returns
///
/// Radiant exitance `σT⁴` in W/m², the all-wavelength total
pub fn radiant_exitance_w_per_m2(temperature_k: f64) -> f64 {
    SI::STEFAN_BOLTZMANN * temperature_k.powi(4)
}

/// Luminous efficacy of black-body radiation in lm/W
///
/// The photometrically weighted fraction of total radiated power:
/// `683 · π·∫V(λ)B_λ(T)dλ / σT⁴`. The numerator integrates over the
/// observer grid (V is zero elsewhere); the denominator is the
/// Stefan-Boltzmann all-wavelength total, which is what keeps the deep
/// infrared tail of warm radiators in the accounting.
///
/// # Arguments
///
/// * `temperature_k` - Black-body temperature in Kelvin
///
/// # Returns
///
/// Luminous efficacy in lm/W
pub fn luminous_efficacy_lm_per_w(temperature_k: f64) -> f64 {
    let grid = observer::wavelength_grid_nm();

    // ∫V(λ)B_λ(T)dλ over the visible grid, wavelength converted to meters
    let weighted_radiance = trap_integrate(&grid, |nm| {
        PHOTOPIC.fraction_at(nm) * planck_spectral_radiance(nm * 1e-9, temperature_k) * 1e-9
    })
    .expect("Observer grid is a valid integration domain");

    // Radiance integrated over the hemisphere picks up a factor of π
    MAX_LUMINOUS_EFFICACY_LM_PER_W * std::f64::consts::PI * weighted_radiance
        / radiant_exitance_w_per_m2(temperature_k)
}

/// CIE illuminant A sampled on the observer grid, in percent of band peak
///
/// The relative spectral power of a 2856K black body across the visible
/// range. For this temperature the curve rises monotonically toward the
/// red end of the grid (the Planck peak lies in the near infrared).
pub static ILLUMINANT_A: Lazy<SpectralResponse> = Lazy::new(|| {
    let wavelengths = observer::wavelength_grid_nm();
    let radiances: Vec<f64> = wavelengths
        .iter()
        .map(|nm| planck_spectral_radiance(nm * 1e-9, ILLUMINANT_A_TEMP_K))
        .collect();

    let peak = radiances.iter().cloned().fold(0.0, f64::max);
    // Divide before scaling so the peak sample is exactly 100.0
    let responses = radiances.iter().map(|r| r / peak * 100.0).collect();

    SpectralResponse::from_table(wavelengths, responses)
        .expect("Illuminant A table should be valid")
});

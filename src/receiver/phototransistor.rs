//! Phototransistor collector-current estimation
//!
//! Phototransistor datasheets specify collector current at a photometric
//! test condition: 1000 lx of CIE illuminant A. Estimating the current
//! under LED illumination therefore needs two corrections: converting the
//! photometric reference to radiometric irradiance, and rescaling for how
//! differently the detector sees the LED spectrum versus the tungsten
//! reference. The two estimators here differ only in how the illuminant A
//! luminous efficacy is obtained.

use log::debug;

use crate::geometry;
use crate::params::LinkParams;
use crate::photometry::blackbody::{self, ILLUMINANT_A, ILLUMINANT_A_TEMP_K};
use crate::photometry::spectral_match;

/// Handbook luminous efficacy of CIE illuminant A in lm/W
///
/// The tabulated value for a 2856K tungsten radiator.
pub const ILLUMINANT_A_EFFICACY_LM_PER_W: f64 = 14.7;

/// How the illuminant A luminous efficacy is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceModel {
    /// Use the handbook table value
    PhotopicTable,
    /// Derive it from the Planck curve with the Stefan-Boltzmann total
    Blackbody,
}

impl ReferenceModel {
    /// Luminous efficacy of illuminant A under this model, in lm/W
    pub fn illuminant_a_efficacy_lm_per_w(&self) -> f64 {
        match self {
            ReferenceModel::PhotopicTable => ILLUMINANT_A_EFFICACY_LM_PER_W,
            ReferenceModel::Blackbody => blackbody::luminous_efficacy_lm_per_w(ILLUMINANT_A_TEMP_K),
        }
    }
}

/// Irradiance of the datasheet reference condition in W/m²
///
/// Converts the photometric test illuminance to radiometric irradiance
/// through the illuminant A luminous efficacy: `E_e = E_v / K_A`.
pub fn reference_irradiance_w_per_m2(illuminance_lx: f64, model: ReferenceModel) -> f64 {
    illuminance_lx / model.illuminant_a_efficacy_lm_per_w()
}

/// Estimate the phototransistor collector current for one link direction
///
/// Scales the datasheet reference current by the irradiance ratio between
/// the LED condition and the reference condition, corrected for the
/// detector's relative spectral match to each source:
///
/// `I_c = I_ref · (E_led / E_ref) · match(det, led) / match(det, illA)`
///
/// # Arguments
///
/// * `params` - The link parameter set to evaluate
/// * `model` - Which illuminant A efficacy derivation to use
///
/// # Returns
///
/// Estimated collector current in amperes
pub fn collector_current_a(params: &LinkParams, model: ReferenceModel) -> f64 {
    let solid_angle_sr =
        geometry::square_solid_angle_sr(params.detector_side_mm, params.distance_mm);
    let led_irradiance = geometry::irradiance_w_per_m2(
        params.led_radiant_intensity_w_sr,
        params.current_ratio(),
        solid_angle_sr,
        params.detector_area_m2(),
    );

    let reference_irradiance =
        reference_irradiance_w_per_m2(params.reference_illuminance_lx, model);

    let led_match = spectral_match(&params.detector_response, &params.led_emission);
    let reference_match = spectral_match(&params.detector_response, &ILLUMINANT_A);

    let collector_current = params.reference_current_a() * (led_irradiance / reference_irradiance)
        * (led_match / reference_match);

    debug!(
        "{} ({:?}): E_led {:.2} W/m², E_ref {:.2} W/m², match {:.3}/{:.3}, I_c {:.3e} A",
        params.direction.label(),
        model,
        led_irradiance,
        reference_irradiance,
        led_match,
        reference_match,
        collector_current
    );

    collector_current
}

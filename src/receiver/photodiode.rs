//! Photodiode link budget
//!
//! The PIN photodiode path is the simple half of the receiver front end:
//! intercepted power times spectral sensitivity gives the photocurrent, and
//! the dark current sets the noise floor the signal is compared against.

use log::debug;

use crate::geometry;
use crate::params::LinkParams;

/// Signal-to-noise ratio of a photocurrent against the dark current floor
///
/// `SNR = 20·log10(signal / dark)`. Invariant under simultaneous scaling of
/// both currents. A zero dark current yields `+inf` dB by IEEE float
/// semantics; the degenerate input is not guarded.
pub fn snr_db(signal_a: f64, dark_a: f64) -> f64 {
    20.0 * (signal_a / dark_a).log10()
}

/// Computed link budget for the photodiode receiver
#[derive(Debug, Clone)]
pub struct PhotodiodeBudget {
    /// Solid angle subtended by the detector in steradians
    pub solid_angle_sr: f64,
    /// Irradiance at the detector face in W/m²
    pub irradiance_w_per_m2: f64,
    /// Photocurrent in amperes
    pub photocurrent_a: f64,
    /// Signal-to-noise ratio against dark current in decibels
    pub snr_db: f64,
}

impl PhotodiodeBudget {
    /// Evaluate the budget for one link direction
    ///
    /// # Arguments
    ///
    /// * `params` - The link parameter set to evaluate
    ///
    /// # Returns
    ///
    /// The derived solid angle, irradiance, photocurrent and SNR
    pub fn from_params(params: &LinkParams) -> Self {
        let solid_angle_sr =
            geometry::square_solid_angle_sr(params.detector_side_mm, params.distance_mm);

        // Power intercepted by the detector, scaled to the actual drive current
        let received_w =
            params.led_radiant_intensity_w_sr * params.current_ratio() * solid_angle_sr;

        let irradiance_w_per_m2 = received_w / params.detector_area_m2();
        let photocurrent_a = received_w * params.photodiode_sensitivity_a_per_w;
        let snr = snr_db(photocurrent_a, params.dark_current_a());

        debug!(
            "{}: omega {:.4} sr, received {:.3e} W, photocurrent {:.3e} A, snr {:.1} dB",
            params.direction.label(),
            solid_angle_sr,
            received_w,
            photocurrent_a,
            snr
        );

        Self {
            solid_angle_sr,
            irradiance_w_per_m2,
            photocurrent_a,
            snr_db: snr,
        }
    }

    /// Irradiance in mW/cm², the unit emitter datasheets quote
    pub fn irradiance_mw_per_cm2(&self) -> f64 {
        geometry::w_per_m2_to_mw_per_cm2(self.irradiance_w_per_m2)
    }
}

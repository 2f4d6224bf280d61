//! Link parameter sets
//!
//! Each direction of the link (uplink, downlink) is described by one
//! immutable set of datasheet constants. Values common to both directions
//! live in [`CommonParams`] and are merged into the per-direction set once
//! at construction; after that a [`LinkParams`] is read-only.

use crate::photometry::SpectralResponse;
use crate::units::{Length, LengthExt};

/// Direction of an optical link hop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDirection {
    /// Remote module to base station
    Uplink,
    /// Base station to remote module
    Downlink,
}

impl LinkDirection {
    /// Human-readable label used in worksheet output
    pub fn label(&self) -> &'static str {
        match self {
            LinkDirection::Uplink => "Uplink",
            LinkDirection::Downlink => "Downlink",
        }
    }
}

/// Constants shared by both link directions
///
/// Both hops cross the same mechanical gap onto the same style of receiver,
/// so the geometry and receiver reference conditions are defined once here.
#[derive(Debug, Clone)]
pub struct CommonParams {
    /// Gap between emitter and detector in millimeters
    pub distance_mm: f64,
    /// Side length of the square detector active area in millimeters
    pub detector_side_mm: f64,
    /// Photodiode dark current in nanoamperes
    pub dark_current_na: f64,
    /// Illuminance of the phototransistor datasheet test condition in lux
    pub reference_illuminance_lx: f64,
    /// Phototransistor collector current at the reference illuminance, in milliamperes
    pub reference_current_ma: f64,
}

/// Full parameter set for one link direction
///
/// Produced by merging [`CommonParams`] with the direction-specific emitter
/// and detector constants. Owns clones of the spectral tables so a single
/// `LinkParams` is self-contained.
#[derive(Debug, Clone)]
pub struct LinkParams {
    /// Direction this set describes
    pub direction: LinkDirection,
    /// LED radiant intensity in W/sr at the datasheet test current
    pub led_radiant_intensity_w_sr: f64,
    /// LED current at which the radiant intensity was specified, in milliamperes
    pub led_test_current_ma: f64,
    /// Actual LED drive current in milliamperes
    pub led_drive_current_ma: f64,
    /// Photodiode spectral sensitivity at the LED wavelength in A/W
    pub photodiode_sensitivity_a_per_w: f64,
    /// LED relative emission spectrum
    pub led_emission: SpectralResponse,
    /// Phototransistor relative spectral response
    pub detector_response: SpectralResponse,

    // Merged from CommonParams
    /// Gap between emitter and detector in millimeters
    pub distance_mm: f64,
    /// Side length of the square detector active area in millimeters
    pub detector_side_mm: f64,
    /// Photodiode dark current in nanoamperes
    pub dark_current_na: f64,
    /// Illuminance of the phototransistor datasheet test condition in lux
    pub reference_illuminance_lx: f64,
    /// Phototransistor collector current at the reference illuminance, in milliamperes
    pub reference_current_ma: f64,
}

impl LinkParams {
    /// Merge the common set with per-direction constants
    ///
    /// This is the single construction point: the merge happens here and the
    /// resulting set is never modified afterwards.
    pub fn from_common(
        common: &CommonParams,
        direction: LinkDirection,
        led_radiant_intensity_w_sr: f64,
        led_test_current_ma: f64,
        led_drive_current_ma: f64,
        photodiode_sensitivity_a_per_w: f64,
        led_emission: SpectralResponse,
        detector_response: SpectralResponse,
    ) -> Self {
        Self {
            direction,
            led_radiant_intensity_w_sr,
            led_test_current_ma,
            led_drive_current_ma,
            photodiode_sensitivity_a_per_w,
            led_emission,
            detector_response,
            distance_mm: common.distance_mm,
            detector_side_mm: common.detector_side_mm,
            dark_current_na: common.dark_current_na,
            reference_illuminance_lx: common.reference_illuminance_lx,
            reference_current_ma: common.reference_current_ma,
        }
    }

    /// Construct a copy with a different gap distance
    ///
    /// Used by the worksheet CLI to explore sensitivity to mechanical
    /// tolerance; this builds a new set rather than mutating an existing one.
    pub fn at_distance_mm(&self, distance_mm: f64) -> Self {
        let mut params = self.clone();
        params.distance_mm = distance_mm;
        params
    }

    /// Drive current over datasheet test current
    pub fn current_ratio(&self) -> f64 {
        self.led_drive_current_ma / self.led_test_current_ma
    }

    /// Gap distance as a typed length
    pub fn distance(&self) -> Length {
        Length::from_millimeters(self.distance_mm)
    }

    /// Detector side as a typed length
    pub fn detector_side(&self) -> Length {
        Length::from_millimeters(self.detector_side_mm)
    }

    /// Detector active area in m²
    pub fn detector_area_m2(&self) -> f64 {
        let side_m = self.detector_side().as_meters();
        side_m * side_m
    }

    /// Photodiode dark current in amperes
    pub fn dark_current_a(&self) -> f64 {
        self.dark_current_na * 1e-9
    }

    /// Phototransistor reference collector current in amperes
    pub fn reference_current_a(&self) -> f64 {
        self.reference_current_ma * 1e-3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_curve() -> SpectralResponse {
        SpectralResponse::from_table(vec![600.0, 660.0, 720.0], vec![0.0, 100.0, 0.0]).unwrap()
    }

    fn test_common() -> CommonParams {
        CommonParams {
            distance_mm: 10.0,
            detector_side_mm: 10.0,
            dark_current_na: 2.0,
            reference_illuminance_lx: 1000.0,
            reference_current_ma: 1.6,
        }
    }

    #[test]
    fn test_merge_carries_common_values() {
        let params = LinkParams::from_common(
            &test_common(),
            LinkDirection::Downlink,
            0.029,
            20.0,
            20.0,
            0.42,
            test_curve(),
            test_curve(),
        );

        assert_eq!(params.distance_mm, 10.0);
        assert_eq!(params.detector_side_mm, 10.0);
        assert_eq!(params.dark_current_na, 2.0);
        assert_eq!(params.reference_illuminance_lx, 1000.0);
    }

    #[test]
    fn test_derived_accessors() {
        let params = LinkParams::from_common(
            &test_common(),
            LinkDirection::Uplink,
            0.012,
            20.0,
            10.0,
            0.33,
            test_curve(),
            test_curve(),
        );

        assert_relative_eq!(params.current_ratio(), 0.5);
        assert_relative_eq!(params.detector_area_m2(), 1e-4, epsilon = 1e-12);
        assert_relative_eq!(params.dark_current_a(), 2e-9);
        assert_relative_eq!(params.reference_current_a(), 1.6e-3);
        assert_relative_eq!(params.distance().as_centimeters(), 1.0);
    }

    #[test]
    fn test_at_distance_builds_new_set() {
        let params = LinkParams::from_common(
            &test_common(),
            LinkDirection::Downlink,
            0.029,
            20.0,
            20.0,
            0.42,
            test_curve(),
            test_curve(),
        );

        let moved = params.at_distance_mm(25.0);

        assert_eq!(moved.distance_mm, 25.0);
        assert_eq!(params.distance_mm, 10.0);
        assert_eq!(moved.detector_side_mm, params.detector_side_mm);
    }
}

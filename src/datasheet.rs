//! Datasheet constants for the link hardware
//!
//! Every number the calculators consume lives here: the shared geometry and
//! receiver reference conditions, the per-direction emitter constants, and
//! the two sampled spectral tables. Values are transcribed from the emitter
//! and detector datasheets for the bidirectional 10mm air-gap link.

use once_cell::sync::Lazy;

use crate::params::{CommonParams, LinkDirection, LinkParams};
use crate::photometry::SpectralResponse;

/// Constants shared by both hops: the mechanical gap and the receiver
/// reference conditions.
pub static COMMON: Lazy<CommonParams> = Lazy::new(|| CommonParams {
    distance_mm: 10.0,
    detector_side_mm: 10.0,
    dark_current_na: 2.0,
    reference_illuminance_lx: 1000.0,
    reference_current_ma: 1.6,
});

/// Relative emission spectrum of the 660nm red downlink LED
///
/// Manufacturer curve, percent of peak. Red AlGaInP emitters have a
/// slightly asymmetric line with a long-wavelength shoulder.
pub static RED_LED_EMISSION: Lazy<SpectralResponse> = Lazy::new(|| {
    let wavelengths = vec![
        600.0, 610.0, 620.0, 630.0, 640.0, 650.0, 660.0, 670.0, 680.0, 690.0, 700.0, 710.0, 720.0,
    ];
    let responses = vec![
        0.0, 1.0, 3.0, 8.0, 22.0, 60.0, 100.0, 72.0, 35.0, 14.0, 5.0, 2.0, 0.0,
    ];

    SpectralResponse::from_table(wavelengths, responses)
        .expect("Red LED emission curve should be valid")
});

/// Relative emission spectrum of the 525nm green uplink LED
pub static GREEN_LED_EMISSION: Lazy<SpectralResponse> = Lazy::new(|| {
    let wavelengths = vec![
        460.0, 480.0, 500.0, 510.0, 520.0, 530.0, 540.0, 560.0, 580.0, 600.0, 620.0,
    ];
    let responses = vec![
        0.0, 4.0, 35.0, 70.0, 100.0, 88.0, 55.0, 18.0, 6.0, 2.0, 0.0,
    ];

    SpectralResponse::from_table(wavelengths, responses)
        .expect("Green LED emission curve should be valid")
});

/// Relative spectral response of the silicon phototransistor receiver
///
/// Percent of peak; silicon peaks near 850nm and falls off steeply past
/// 1000nm toward the band-gap cutoff.
pub static PHOTOTRANSISTOR_RESPONSE: Lazy<SpectralResponse> = Lazy::new(|| {
    let wavelengths = vec![
        400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0,
        1000.0, 1050.0, 1100.0,
    ];
    let responses = vec![
        5.0, 12.0, 22.0, 35.0, 48.0, 62.0, 75.0, 86.0, 94.0, 100.0, 97.0, 80.0, 48.0, 18.0, 2.0,
    ];

    SpectralResponse::from_table(wavelengths, responses)
        .expect("Phototransistor response curve should be valid")
});

/// Downlink hop: 660nm red LED driven at its 20mA test current
///
/// Radiant intensity 29mW/sr at 20mA; the PIN photodiode sensitivity is the
/// datasheet value at 660nm.
pub static DOWNLINK: Lazy<LinkParams> = Lazy::new(|| {
    LinkParams::from_common(
        &COMMON,
        LinkDirection::Downlink,
        0.029,
        20.0,
        20.0,
        0.42,
        RED_LED_EMISSION.clone(),
        PHOTOTRANSISTOR_RESPONSE.clone(),
    )
});

/// Uplink hop: 525nm green LED, derated to 10mA to limit remote-side power
///
/// Green emitters are dimmer per steradian and silicon is less sensitive
/// at 525nm, so the uplink budget is the tighter of the two.
pub static UPLINK: Lazy<LinkParams> = Lazy::new(|| {
    LinkParams::from_common(
        &COMMON,
        LinkDirection::Uplink,
        0.012,
        20.0,
        10.0,
        0.33,
        GREEN_LED_EMISSION.clone(),
        PHOTOTRANSISTOR_RESPONSE.clone(),
    )
});

/// Both link directions in worksheet order
pub static ALL_LINKS: Lazy<Vec<&'static LinkParams>> =
    Lazy::new(|| vec![&*DOWNLINK, &*UPLINK]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_valid() {
        // Force every Lazy so a bad table fails loudly here
        assert!(RED_LED_EMISSION.peak() == 100.0);
        assert!(GREEN_LED_EMISSION.peak() == 100.0);
        assert!(PHOTOTRANSISTOR_RESPONSE.peak() == 100.0);
        assert_eq!(ALL_LINKS.len(), 2);
    }

    #[test]
    fn test_led_peaks_at_nominal_wavelengths() {
        assert_eq!(RED_LED_EMISSION.at(660.0), 100.0);
        assert_eq!(GREEN_LED_EMISSION.at(520.0), 100.0);
    }

    #[test]
    fn test_directions_share_common_geometry() {
        assert_eq!(DOWNLINK.distance_mm, UPLINK.distance_mm);
        assert_eq!(DOWNLINK.detector_side_mm, UPLINK.detector_side_mm);
        assert_eq!(DOWNLINK.dark_current_na, UPLINK.dark_current_na);
    }

    #[test]
    fn test_uplink_is_derated() {
        assert!(UPLINK.current_ratio() < DOWNLINK.current_ratio());
        assert!(UPLINK.led_radiant_intensity_w_sr < DOWNLINK.led_radiant_intensity_w_sr);
    }
}

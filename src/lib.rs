//! Link budget calculations for a short-range optical data link
//!
//! This crate computes the receiver front-end budget for a bidirectional
//! LED-over-air-gap data link: detector solid angle, irradiance,
//! photocurrent and SNR for the photodiode path, and spectrally corrected
//! collector-current estimates for the phototransistor path.

pub mod datasheet;
pub mod geometry;
pub mod params;
pub mod photometry;
pub mod receiver;
pub mod units;
pub mod viz;

// Re-exports for easier access
pub use geometry::square_solid_angle_sr;
pub use params::{CommonParams, LinkDirection, LinkParams};
pub use photometry::observer::luminous_efficacy_lm_per_w;
pub use photometry::response::SpectralResponse;
pub use photometry::spectral_match;
pub use receiver::photodiode::PhotodiodeBudget;
pub use receiver::phototransistor::{collector_current_a, ReferenceModel};

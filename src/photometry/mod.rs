//! Photometry models and utilities

pub mod blackbody;
pub mod observer;
pub mod overlap;
pub mod response;
pub mod trapezoid;

pub use observer::{luminous_efficacy_lm_per_w, MAX_LUMINOUS_EFFICACY_LM_PER_W, PHOTOPIC};
pub use overlap::spectral_match;
pub use response::{Band, SpectralResponse};
pub use trapezoid::trap_integrate;

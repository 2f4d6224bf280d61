//! Receiver front-end calculators

pub mod photodiode;
pub mod phototransistor;

pub use photodiode::{snr_db, PhotodiodeBudget};
pub use phototransistor::{collector_current_a, ReferenceModel};

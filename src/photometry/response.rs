//! Sampled spectral response curves
//!
//! Datasheets publish emitter spectra and detector sensitivities as sampled
//! relative-response curves (wavelength in nm against percent of peak). This
//! module stores those tables and provides the interpolation and integration
//! primitives the rest of the crate builds on.

use thiserror::Error;

/// A wavelength interval in nanometers
pub struct Band {
    /// Lower wavelength bound in nanometers
    pub lower_nm: f64,

    /// Upper wavelength bound in nanometers
    pub upper_nm: f64,
}

impl Band {
    /// Create a new Band directly from lower and upper bounds
    ///
    /// # Arguments
    ///
    /// * `lower_nm` - Lower wavelength bound in nanometers
    /// * `upper_nm` - Upper wavelength bound in nanometers
    ///
    /// # Returns
    ///
    /// A new Band with the specified wavelength bounds
    pub fn from_nm_bounds(lower_nm: f64, upper_nm: f64) -> Self {
        // These are programming errors, so we don't return Result
        // but panic if the range is invalid
        if !lower_nm.is_finite() || !upper_nm.is_finite() {
            panic!("Wavelength range cannot contain non-finite values");
        }

        if lower_nm > upper_nm {
            panic!(
                "Invalid wavelength range: start must be less than end, got {}..{}",
                lower_nm, upper_nm,
            );
        }
        if lower_nm < 0.0 || upper_nm < 0.0 {
            panic!("Wavelengths must be non-negative");
        }

        Self { lower_nm, upper_nm }
    }

    /// Get the width of the band in nanometers
    pub fn width(&self) -> f64 {
        self.upper_nm - self.lower_nm
    }

    /// Return the center of the band in nanometers
    pub fn center(&self) -> f64 {
        (self.lower_nm + self.upper_nm) / 2.0
    }
}

/// Errors that can occur when constructing a spectral response curve
#[derive(Debug, Error)]
pub enum SpectralResponseError {
    #[error("Wavelength and response vectors must have the same length")]
    LengthMismatch,

    #[error("Wavelengths must be in ascending order")]
    NotAscending,

    #[error("Response values must be between 0.0 and 100.0 percent")]
    OutOfRange,
}

/// A sampled relative spectral response curve
///
/// Stores wavelength/response pairs as two parallel ordered sequences and
/// evaluates the curve at any wavelength by linear interpolation. Responses
/// are in percent of peak (0.0 to 100.0), the convention used by emitter and
/// detector datasheets. The curve is immutable after construction.
#[derive(Debug, Clone)]
pub struct SpectralResponse {
    /// Wavelengths in nanometers (nm)
    wavelengths: Vec<f64>,

    /// Relative response in percent (0.0 to 100.0) for each wavelength
    responses: Vec<f64>,
}

impl SpectralResponse {
    /// Create a new SpectralResponse from wavelength and response tables
    ///
    /// # Arguments
    ///
    /// * `wavelengths` - Wavelengths in nanometers, must be in ascending order
    /// * `responses` - Relative response in percent (0.0 to 100.0) per wavelength
    ///
    /// # Returns
    ///
    /// A Result containing the new SpectralResponse or an error
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The vectors have different lengths
    /// - There are fewer than two points
    /// - Wavelengths are not in ascending order
    /// - Any response value is outside the range [0.0, 100.0]
    pub fn from_table(
        wavelengths: Vec<f64>,
        responses: Vec<f64>,
    ) -> Result<Self, SpectralResponseError> {
        if wavelengths.len() != responses.len() {
            return Err(SpectralResponseError::LengthMismatch);
        }

        // A curve needs at least one segment to interpolate over
        if wavelengths.len() < 2 {
            return Err(SpectralResponseError::LengthMismatch);
        }

        for i in 1..wavelengths.len() {
            if wavelengths[i] <= wavelengths[i - 1] {
                return Err(SpectralResponseError::NotAscending);
            }
        }

        for &response in &responses {
            if !(0.0..=100.0).contains(&response) {
                return Err(SpectralResponseError::OutOfRange);
            }
        }

        Ok(Self {
            wavelengths,
            responses,
        })
    }

    /// Get the relative response in percent at a specific wavelength
    ///
    /// If the wavelength is outside the sampled range, returns 0.0
    ///
    /// # Arguments
    ///
    /// * `wavelength` - The wavelength in nanometers (nm)
    ///
    /// # Returns
    ///
    /// The interpolated response value in percent (0.0 to 100.0)
    pub fn at(&self, wavelength: f64) -> f64 {
        // Return 0.0 if outside the range
        if wavelength < self.wavelengths[0] || wavelength > *self.wavelengths.last().unwrap() {
            return 0.0;
        }

        // Find the segment that contains the wavelength
        for i in 0..self.wavelengths.len() - 1 {
            if wavelength >= self.wavelengths[i] && wavelength <= self.wavelengths[i + 1] {
                // Linear interpolation
                let t = (wavelength - self.wavelengths[i])
                    / (self.wavelengths[i + 1] - self.wavelengths[i]);

                return self.responses[i] * (1.0 - t) + self.responses[i + 1] * t;
            }
        }

        // Should never reach here if input is in range
        unreachable!()
    }

    /// Get the relative response as a 0.0 to 1.0 fraction at a wavelength
    pub fn fraction_at(&self, wavelength: f64) -> f64 {
        self.at(wavelength) / 100.0
    }

    /// The sampled wavelengths in nanometers, ascending
    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    /// Returns the band (wavelength range) covered by the sampled curve
    pub fn band(&self) -> Band {
        Band {
            lower_nm: self.wavelengths[0],
            upper_nm: *self.wavelengths.last().unwrap(),
        }
    }

    /// The peak response value in percent over the sampled points
    pub fn peak(&self) -> f64 {
        self.responses.iter().cloned().fold(0.0, f64::max)
    }

    /// Return a copy of the curve rescaled so its peak sample is 100 percent
    ///
    /// The shape is preserved; only the amplitude changes. A curve that is
    /// zero everywhere is returned unchanged.
    pub fn normalized_to_peak(&self) -> Self {
        let peak = self.peak();
        if peak == 0.0 {
            return self.clone();
        }

        let responses = self.responses.iter().map(|r| r / peak * 100.0).collect();
        Self {
            wavelengths: self.wavelengths.clone(),
            responses,
        }
    }

    /// Integrate the response curve against a weighting function
    ///
    /// # Arguments
    ///
    /// * `f` - Function that takes wavelength (nm) and returns a weight to
    ///   multiply with the response fraction at that wavelength
    ///
    /// # Returns
    ///
    /// The integrated value, using the sampled wavelengths as trapezoid corners
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut sum = 0.0;

        // Integrate over each segment
        for i in 0..self.wavelengths.len() - 1 {
            let x1 = self.wavelengths[i];
            let x2 = self.wavelengths[i + 1];
            let y1 = self.responses[i] / 100.0 * f(x1);
            let y2 = self.responses[i + 1] / 100.0 * f(x2);

            // Area of trapezoid = (width) * (average height)
            sum += (x2 - x1) * (y1 + y2) / 2.0;
        }

        sum
    }
}

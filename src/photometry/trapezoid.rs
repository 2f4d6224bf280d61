//! Trapezoidal integration utility

use thiserror::Error;

/// Errors that can occur during trapezoidal integration
#[derive(Debug, Error)]
pub enum TrapezoidError {
    #[error("Insufficient points for integration, need at least 2 points")]
    InsufficientPoints,

    #[error("Points must be in ascending order")]
    NotAscending,
}

/// Performs trapezoidal integration of a function over a set of points.
///
/// # Arguments
///
/// * `corners` - The x coordinates of the trapezoid corners in ascending order
/// * `to_integrate` - The function to integrate
///
/// # Returns
///
/// The result of the trapezoidal integration or an error if the input is invalid.
pub fn trap_integrate<F>(corners: &[f64], to_integrate: F) -> Result<f64, TrapezoidError>
where
    F: Fn(f64) -> f64,
{
    if corners.len() < 2 {
        return Err(TrapezoidError::InsufficientPoints);
    }

    // Strictly ascending bounds are required for well-defined intervals
    for i in 1..corners.len() {
        if corners[i] <= corners[i - 1] {
            return Err(TrapezoidError::NotAscending);
        }
    }

    let mut integral_sum = 0.0;

    // Composite trapezoidal rule over all intervals:
    // ∫[x₁,x₂] f(x)dx ≈ (x₂-x₁) × (f(x₁)+f(x₂))/2
    for i in 0..corners.len() - 1 {
        let x_left = corners[i];
        let x_right = corners[i + 1];
        let y_left = to_integrate(x_left);
        let y_right = to_integrate(x_right);

        integral_sum += (x_right - x_left) * (y_left + y_right) / 2.0;
    }

    Ok(integral_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trap_integrate() {
        // Integrate f(x) = x^2 from 0 to 3 using 4 points
        // The trapezoidal approximation gives us:
        // (1-0)(0^2+1^2)/2 + (2-1)(1^2+2^2)/2 + (3-2)(2^2+3^2)/2
        // = 0.5 + 2.5 + 6.5 = 9.5
        let corners = [0.0, 1.0, 2.0, 3.0];
        let result = trap_integrate(&corners, |x| x * x).unwrap();

        assert_relative_eq!(result, 9.5, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_function_is_exact() {
        // The trapezoidal rule is exact for linear functions regardless of spacing
        let corners = [0.0, 0.7, 2.3, 5.0];
        let result = trap_integrate(&corners, |x| 2.0 * x + 1.0).unwrap();

        // ∫(2x+1)dx from 0 to 5 = 25 + 5 = 30
        assert_relative_eq!(result, 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_points() {
        let corners = [1.0];
        let result = trap_integrate(&corners, |x| x);

        assert!(matches!(result, Err(TrapezoidError::InsufficientPoints)));
    }

    #[test]
    fn test_not_ascending() {
        let corners = [0.0, 2.0, 1.0, 3.0];
        let result = trap_integrate(&corners, |x| x);

        assert!(matches!(result, Err(TrapezoidError::NotAscending)));
    }
}

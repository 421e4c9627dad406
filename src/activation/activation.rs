/// Logistic sigmoid: σ(z) = 1 / (1 + e^(-z)).
///
/// Branches on the sign of `z` so `exp` is only ever called on a non-positive
/// argument; extreme magnitudes saturate to 0/1 instead of overflowing.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// σ'(z) = σ(z)·(1 − σ(z)).
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval() {
        for &z in &[-30.0, -4.0, -0.5, 0.0, 0.5, 4.0, 30.0] {
            let s = sigmoid(z);
            assert!(s > 0.0 && s < 1.0, "sigmoid({}) = {}", z, s);
        }
    }

    #[test]
    fn sigmoid_saturates_without_overflow() {
        assert_eq!(sigmoid(1e4), 1.0);
        assert_eq!(sigmoid(-1e4), 0.0);
        assert!(sigmoid(f64::MAX).is_finite());
        assert!(sigmoid(-f64::MAX).is_finite());
    }

    #[test]
    fn sigmoid_is_symmetric_about_half() {
        for &z in &[0.1, 1.0, 3.5] {
            assert!((sigmoid(z) + sigmoid(-z) - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn derivative_peaks_at_zero() {
        assert_eq!(sigmoid_prime(0.0), 0.25);
        assert!(sigmoid_prime(2.0) < 0.25);
        assert!(sigmoid_prime(-2.0) < 0.25);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-6;
        for &z in &[-3.0, -1.0, 0.0, 0.7, 2.5] {
            let numeric = (sigmoid(z + h) - sigmoid(z - h)) / (2.0 * h);
            assert!((sigmoid_prime(z) - numeric).abs() < 1e-6);
        }
    }
}

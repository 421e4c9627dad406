use crate::math::matrix::Matrix;

pub struct QuadraticCost;

impl QuadraticCost {
    /// Scalar cost for one example: ½ Σ (aᵢ − yᵢ)²
    pub fn cost(output: &[f64], target: &[f64]) -> f64 {
        0.5 * output
            .iter()
            .zip(target.iter())
            .map(|(a, y)| (a - y).powi(2))
            .sum::<f64>()
    }

    /// ∂C/∂a = a − y, shaped like the output column.
    pub fn derivative(output: &Matrix, target: &Matrix) -> Matrix {
        output.clone() - target.clone()
    }
}

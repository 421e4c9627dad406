use rand::Rng;

use crate::activation::activation::sigmoid;
use crate::error::{NetError, NetResult};
use crate::math::matrix::Matrix;

/// A fully-connected feedforward network of sigmoid layers.
///
/// `sizes[0]` is the input width; layers `1..sizes.len()` are computed.
/// `weights[l]` has shape `(sizes[l+1], sizes[l])` and `biases[l]` has shape
/// `(sizes[l+1], 1)` — one weight matrix and one bias column per computed
/// layer, so `weights.len() == biases.len() == sizes.len() - 1`. The input
/// layer carries no bias.
///
/// Parameters are only ever mutated by `Sgd::step` during training.
#[derive(Debug, Clone)]
pub struct Network {
    pub sizes: Vec<usize>,
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
}

impl Network {
    /// Builds a network with the given layer widths, all parameters drawn
    /// independently from N(0, 1) using the caller's RNG. Passing a seeded
    /// RNG makes construction reproducible.
    pub fn new<R: Rng>(sizes: Vec<usize>, rng: &mut R) -> NetResult<Network> {
        if sizes.len() < 2 {
            return Err(NetError::invalid_config(
                "sizes",
                format!("{:?}", sizes),
                "a network needs at least an input and an output layer",
            ));
        }
        if sizes.iter().any(|&s| s == 0) {
            return Err(NetError::invalid_config(
                "sizes",
                format!("{:?}", sizes),
                "every layer must have at least one neuron",
            ));
        }

        let biases = sizes[1..]
            .iter()
            .map(|&n| Matrix::standard_normal(n, 1, rng))
            .collect();
        let weights = sizes
            .windows(2)
            .map(|pair| Matrix::standard_normal(pair[1], pair[0], rng))
            .collect();

        Ok(Network {
            sizes,
            weights,
            biases,
        })
    }

    pub fn num_layers(&self) -> usize {
        self.sizes.len()
    }

    /// Forward pass: a ← σ(W·a + b) through every layer, starting from
    /// `input`. Returns the output layer's activation. Does not mutate the
    /// network.
    pub fn feed_forward(&self, input: &[f64]) -> NetResult<Vec<f64>> {
        if input.len() != self.sizes[0] {
            return Err(NetError::dimension_mismatch(
                self.sizes[0],
                input.len(),
                "feed_forward input",
            ));
        }

        let mut a = Matrix::column(input);
        for (w, b) in self.weights.iter().zip(self.biases.iter()) {
            a = (w.clone() * a + b.clone()).map(sigmoid);
        }
        Ok(a.column_data())
    }
}

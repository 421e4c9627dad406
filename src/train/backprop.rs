use crate::activation::activation::{sigmoid, sigmoid_prime};
use crate::error::{NetError, NetResult};
use crate::loss::quadratic::QuadraticCost;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Per-parameter cost gradients, shaped exactly like a network's biases and
/// weights: `nabla_b[l]` matches `biases[l]`, `nabla_w[l]` matches
/// `weights[l]`.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub nabla_b: Vec<Matrix>,
    pub nabla_w: Vec<Matrix>,
}

impl Gradients {
    /// Zero-filled accumulators matching `network`'s parameter shapes.
    pub fn zeros_like(network: &Network) -> Gradients {
        Gradients {
            nabla_b: network
                .biases
                .iter()
                .map(|b| Matrix::zeros(b.rows, b.cols))
                .collect(),
            nabla_w: network
                .weights
                .iter()
                .map(|w| Matrix::zeros(w.rows, w.cols))
                .collect(),
        }
    }

    /// Element-wise sum of another gradient set into this one.
    pub fn accumulate(&mut self, delta: &Gradients) {
        for (acc, d) in self.nabla_b.iter_mut().zip(delta.nabla_b.iter()) {
            *acc = acc.clone() + d.clone();
        }
        for (acc, d) in self.nabla_w.iter_mut().zip(delta.nabla_w.iter()) {
            *acc = acc.clone() + d.clone();
        }
    }
}

/// Gradients of the quadratic cost for one example, by backpropagation.
///
/// Runs the forward pass caching every pre-activation z and activation a,
/// seeds the output-layer error δ = (a − y) ⊙ σ'(z), then walks the layers
/// backward: δ ← (Wᵀ·δ) ⊙ σ'(z), with ∂C/∂b = δ and ∂C/∂W = δ·aᵀ against the
/// previous layer's activation. Deterministic for fixed parameters and input.
pub fn backprop(network: &Network, input: &[f64], target: &[f64]) -> NetResult<Gradients> {
    let in_size = network.sizes[0];
    let out_size = network.sizes[network.sizes.len() - 1];
    if input.len() != in_size {
        return Err(NetError::dimension_mismatch(
            in_size,
            input.len(),
            "backprop input",
        ));
    }
    if target.len() != out_size {
        return Err(NetError::dimension_mismatch(
            out_size,
            target.len(),
            "backprop target",
        ));
    }

    let steps = network.weights.len();

    // Forward pass, caching z and a per layer. activations[l] is layer l's
    // activation (the input column for l = 0); zs[l] belongs to layer l + 1.
    let mut activation = Matrix::column(input);
    let mut activations = Vec::with_capacity(steps + 1);
    let mut zs = Vec::with_capacity(steps);
    activations.push(activation.clone());
    for (w, b) in network.weights.iter().zip(network.biases.iter()) {
        let z = w.clone() * activation + b.clone();
        activation = z.map(sigmoid);
        zs.push(z);
        activations.push(activation.clone());
    }

    let mut grads = Gradients::zeros_like(network);

    // Output layer error.
    let last = steps - 1;
    let target_col = Matrix::column(target);
    let mut delta = QuadraticCost::derivative(&activations[steps], &target_col)
        .hadamard(&zs[last].map(sigmoid_prime));
    grads.nabla_w[last] = delta.clone() * activations[steps - 1].transpose();
    grads.nabla_b[last] = delta.clone();

    // Backward recursion over the hidden layers; `layer` indexes the weight
    // matrix whose gradient is being filled.
    for layer in (0..last).rev() {
        let sp = zs[layer].map(sigmoid_prime);
        delta = (network.weights[layer + 1].transpose() * delta).hadamard(&sp);
        grads.nabla_w[layer] = delta.clone() * activations[layer].transpose();
        grads.nabla_b[layer] = delta.clone();
    }

    Ok(grads)
}

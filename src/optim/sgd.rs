use crate::error::{NetError, NetResult};
use crate::network::network::Network;
use crate::train::backprop::Gradients;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> NetResult<Sgd> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NetError::invalid_config(
                "learning_rate",
                learning_rate.to_string(),
                "must be a positive finite number",
            ));
        }
        Ok(Sgd { learning_rate })
    }

    /// One averaged mini-batch update: p ← p − (η / batch_len) · ∇p for every
    /// weight matrix and bias vector. The only place network parameters change.
    pub fn step(&self, network: &mut Network, grads: &Gradients, batch_len: usize) {
        let scale = self.learning_rate / batch_len as f64;

        for (w, nw) in network.weights.iter_mut().zip(grads.nabla_w.iter()) {
            *w = w.clone() - nw.map(|x| x * scale);
        }
        for (b, nb) in network.biases.iter_mut().zip(grads.nabla_b.iter()) {
            *b = b.clone() - nb.map(|x| x * scale);
        }
    }
}

use crate::data::sample::Sample;
use crate::error::NetResult;
use crate::network::network::Network;

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Number of test examples whose predicted class (argmax of the network
/// output) equals the stored label. Side-effect-free.
pub fn correct_count(network: &Network, test_set: &[Sample]) -> NetResult<usize> {
    let mut correct = 0;
    for sample in test_set {
        let output = network.feed_forward(&sample.input)?;
        if argmax(&output) == sample.label {
            correct += 1;
        }
    }
    Ok(correct)
}

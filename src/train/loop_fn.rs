use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::sample::Sample;
use crate::error::{NetError, NetResult};
use crate::eval::evaluator::correct_count;
use crate::loss::quadratic::QuadraticCost;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::backprop::{backprop, Gradients};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` by mini-batch SGD for `config.epochs` epochs and returns
/// the mean training cost after the **last completed epoch**.
///
/// # Arguments
/// - `network`   — mutable reference to the network; modified in place
/// - `training`  — labeled training examples; read and index-shuffled only,
///                 never mutated
/// - `test`      — optional labeled test set, evaluated after every epoch
/// - `optimizer` — SGD optimizer (carries the learning rate)
/// - `config`    — epoch/batch hyperparameters, optional progress channel,
///                 optional stop flag
/// - `rng`       — random source driving the per-epoch shuffle; a seeded
///                 `StdRng` makes the whole run reproducible
///
/// Each epoch reshuffles the example order, partitions it into consecutive
/// mini-batches of `config.batch_size` (the final batch may be smaller), and
/// applies one averaged gradient update per batch — a short final batch
/// divides by its own length, not the configured one.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped (natural disconnect), **or**
/// - `config.stop_flag` is set to `true`.
pub fn train_loop<R: Rng>(
    network: &mut Network,
    training: &[Sample],
    test: Option<&[Sample]>,
    optimizer: &Sgd,
    config: &TrainConfig,
    rng: &mut R,
) -> NetResult<f64> {
    if training.is_empty() {
        return Err(NetError::EmptyDataset);
    }

    let n = training.len();
    let mut last_train_cost = 0.0;

    for epoch in 1..=config.epochs {
        // Check stop flag at the top of each epoch.
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        let order = epoch_order(n, rng);
        for batch in order.chunks(config.batch_size) {
            update_mini_batch(network, training, batch, optimizer)?;
        }

        let train_cost = mean_cost(network, training)?;
        last_train_cost = train_cost;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        // ── Test-set evaluation ────────────────────────────────────────────
        let (test_correct, test_total) = match test {
            Some(t) => (Some(correct_count(network, t)?), Some(t.len())),
            None => (None, None),
        };

        // ── Emit progress ─────────────────────────────────────────────────
        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_cost,
            test_correct,
            test_total,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }

        // Check stop flag again after the potentially expensive eval.
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }
    }

    Ok(last_train_cost)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Freshly shuffled index order for one epoch. Chunking this into consecutive
/// slices yields the epoch's mini-batch partition: every example lands in
/// exactly one batch.
fn epoch_order<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}

/// Accumulates per-example backprop gradients over one mini-batch, then
/// applies a single update averaged over the batch's actual length.
fn update_mini_batch(
    network: &mut Network,
    training: &[Sample],
    batch: &[usize],
    optimizer: &Sgd,
) -> NetResult<()> {
    let mut grads = Gradients::zeros_like(network);
    for &idx in batch {
        let sample = &training[idx];
        let delta = backprop(network, &sample.input, &sample.target)?;
        grads.accumulate(&delta);
    }
    optimizer.step(network, &grads, batch.len());
    Ok(())
}

/// Mean quadratic cost over a dataset without gradient work (eval mode).
fn mean_cost(network: &Network, samples: &[Sample]) -> NetResult<f64> {
    let mut total = 0.0;
    for sample in samples {
        let output = network.feed_forward(&sample.input)?;
        total += QuadraticCost::cost(&output, &sample.target);
    }
    Ok(total / samples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn xor_samples() -> Vec<Sample> {
        vec![
            Sample::new(vec![0.0, 0.0], vec![0.0]),
            Sample::new(vec![0.0, 1.0], vec![1.0]),
            Sample::new(vec![1.0, 0.0], vec![1.0]),
            Sample::new(vec![1.0, 1.0], vec![0.0]),
        ]
    }

    #[test]
    fn rejects_empty_training_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut network = Network::new(vec![2, 1], &mut rng).unwrap();
        let optimizer = Sgd::new(1.0).unwrap();
        let config = TrainConfig::new(1, 4).unwrap();

        let err = train_loop(&mut network, &[], None, &optimizer, &config, &mut rng).unwrap_err();
        assert_eq!(err, NetError::EmptyDataset);
    }

    #[test]
    fn epoch_order_is_a_disjoint_cover() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let order = epoch_order(10, &mut rng);
            let batches: Vec<&[usize]> = order.chunks(3).collect();
            assert_eq!(
                batches.iter().map(|b| b.len()).collect::<Vec<_>>(),
                vec![3, 3, 3, 1]
            );

            let mut seen: Vec<usize> = batches.concat();
            seen.sort_unstable();
            assert_eq!(seen, (0..10).collect::<Vec<_>>());
        }
    }

    /// A mini-batch holding one example must update parameters exactly as a
    /// direct backprop step scaled by η / 1.
    #[test]
    fn batch_of_one_update_matches_direct_backprop() {
        let mut rng = StdRng::seed_from_u64(42);
        let network = Network::new(vec![2, 3, 1], &mut rng).unwrap();
        let sample = Sample::new(vec![0.4, -0.9], vec![1.0]);
        let optimizer = Sgd::new(3.0).unwrap();

        let mut expected = network.clone();
        let grads = backprop(&expected, &sample.input, &sample.target).unwrap();
        optimizer.step(&mut expected, &grads, 1);

        let mut trained = network.clone();
        let config = TrainConfig::new(1, 1).unwrap();
        train_loop(
            &mut trained,
            std::slice::from_ref(&sample),
            None,
            &optimizer,
            &config,
            &mut rng,
        )
        .unwrap();

        assert_eq!(trained.weights, expected.weights);
        assert_eq!(trained.biases, expected.biases);
    }

    /// Replays one epoch by hand with the same shuffle stream and checks the
    /// loop produced identical parameters — including the short final batch
    /// dividing by its own length.
    #[test]
    fn epoch_matches_manual_replay_with_uneven_batches() {
        let samples = vec![
            Sample::new(vec![0.1, 0.4], vec![1.0]),
            Sample::new(vec![0.9, -0.2], vec![0.0]),
            Sample::new(vec![-0.5, 0.3], vec![1.0]),
        ];
        let mut build_rng = StdRng::seed_from_u64(42);
        let network = Network::new(vec![2, 2, 1], &mut build_rng).unwrap();
        let optimizer = Sgd::new(0.7).unwrap();

        // 3 samples, batch size 2: batches of length 2 and 1.
        let mut expected = network.clone();
        let mut replay_rng = StdRng::seed_from_u64(7);
        let order = epoch_order(samples.len(), &mut replay_rng);
        for batch in order.chunks(2) {
            update_mini_batch(&mut expected, &samples, batch, &optimizer).unwrap();
        }

        let mut trained = network.clone();
        let mut loop_rng = StdRng::seed_from_u64(7);
        let config = TrainConfig::new(1, 2).unwrap();
        train_loop(&mut trained, &samples, None, &optimizer, &config, &mut loop_rng).unwrap();

        assert_eq!(trained.weights, expected.weights);
        assert_eq!(trained.biases, expected.biases);
    }

    #[test]
    fn training_reduces_cost() {
        // Separable two-point task: descent drives the cost toward zero.
        let samples = vec![
            Sample::new(vec![0.0, 0.0], vec![0.0]),
            Sample::new(vec![1.0, 1.0], vec![1.0]),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let mut network = Network::new(vec![2, 3, 1], &mut rng).unwrap();
        let optimizer = Sgd::new(2.0).unwrap();
        let config = TrainConfig::new(500, 1).unwrap();

        let initial = mean_cost(&network, &samples).unwrap();
        let last = train_loop(&mut network, &samples, None, &optimizer, &config, &mut rng).unwrap();
        assert!(last < initial, "cost went from {} to {}", initial, last);
    }

    #[test]
    fn progress_channel_receives_one_stats_per_epoch() {
        let samples = xor_samples();
        let test_set = xor_samples();
        let mut rng = StdRng::seed_from_u64(42);
        let mut network = Network::new(vec![2, 3, 1], &mut rng).unwrap();
        let optimizer = Sgd::new(0.5).unwrap();

        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(3, 4).unwrap();
        config.progress_tx = Some(tx);

        train_loop(
            &mut network,
            &samples,
            Some(&test_set),
            &optimizer,
            &config,
            &mut rng,
        )
        .unwrap();
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 3);
        for (i, s) in stats.iter().enumerate() {
            assert_eq!(s.epoch, i + 1);
            assert_eq!(s.total_epochs, 3);
            assert_eq!(s.test_total, Some(4));
            assert!(s.test_correct.unwrap() <= 4);
        }
    }

    #[test]
    fn preset_stop_flag_leaves_parameters_untouched() {
        let samples = xor_samples();
        let mut rng = StdRng::seed_from_u64(42);
        let mut network = Network::new(vec![2, 3, 1], &mut rng).unwrap();
        let optimizer = Sgd::new(1.0).unwrap();

        let mut config = TrainConfig::new(5, 2).unwrap();
        config.stop_flag = Some(Arc::new(AtomicBool::new(true)));

        let before = network.clone();
        train_loop(&mut network, &samples, None, &optimizer, &config, &mut rng).unwrap();
        assert_eq!(network.weights, before.weights);
        assert_eq!(network.biases, before.biases);
    }
}

/// Two-class Gaussian blob classification.
///
/// Generates a synthetic 2-D dataset (two clusters of points around opposite
/// corners), trains a 2 → 8 → 2 sigmoid network on it, and prints per-epoch
/// test accuracy from the progress channel while appending the same stats to
/// a JSON-lines log.
///
/// Run with:
///   cargo run --example blobs
use std::sync::mpsc;
use std::thread;

use hematite_nn::{correct_count, logging, train_loop, Matrix, Network, Sample, Sgd, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPOCH_LOG: &str = "blobs_epochs.jsonl";

/// `n_per_class` noisy points around each of the two cluster centers.
fn make_blobs(n_per_class: usize, rng: &mut StdRng) -> Vec<Sample> {
    let centers = [([-1.0, -1.0], 0usize), ([1.0, 1.0], 1usize)];

    let mut samples = Vec::with_capacity(2 * n_per_class);
    for &(center, label) in &centers {
        for _ in 0..n_per_class {
            let noise = Matrix::standard_normal(2, 1, rng);
            let input = vec![
                center[0] + 0.6 * noise.data[0][0],
                center[1] + 0.6 * noise.data[1][0],
            ];
            samples.push(Sample::from_label(input, 2, label));
        }
    }
    samples
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let training = make_blobs(100, &mut rng);
    let test_set = make_blobs(25, &mut rng);

    let mut network = Network::new(vec![2, 8, 2], &mut rng).expect("valid layer sizes");
    let optimizer = Sgd::new(3.0).expect("valid learning rate");

    let (tx, rx) = mpsc::channel();
    let mut config = TrainConfig::new(30, 10).expect("valid config");
    config.progress_tx = Some(tx);

    let printer = thread::spawn(move || {
        for stats in rx {
            match (stats.test_correct, stats.test_total) {
                (Some(correct), Some(total)) => {
                    println!("Epoch {}: {} / {}", stats.epoch, correct, total)
                }
                _ => println!("Epoch {} complete", stats.epoch),
            }
            if let Err(err) = logging::append_epoch_stats(EPOCH_LOG, &stats) {
                eprintln!("could not write epoch log: {}", err);
            }
        }
    });

    train_loop(
        &mut network,
        &training,
        Some(&test_set),
        &optimizer,
        &config,
        &mut rng,
    )
    .expect("training failed");

    drop(config);
    printer.join().expect("progress printer panicked");

    let correct = correct_count(&network, &test_set).expect("test set matches network");
    println!(
        "Done. Final accuracy: {} / {} (epoch log in {})",
        correct,
        test_set.len(),
        EPOCH_LOG
    );
}

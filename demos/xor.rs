use hematite_nn::{train_loop, Network, Sample, Sgd, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let samples = vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ];

    let mut network = Network::new(vec![2, 3, 1], &mut rng).expect("valid layer sizes");
    let optimizer = Sgd::new(3.0).expect("valid learning rate");
    let config = TrainConfig::new(5000, 4).expect("valid config");

    let last_cost = train_loop(&mut network, &samples, None, &optimizer, &config, &mut rng)
        .expect("training failed");
    println!("Final training cost: {last_cost:.6}");

    for sample in &samples {
        let output = network.feed_forward(&sample.input).expect("input matches network");
        println!(
            "Input: {:?} -> Output: {:.4} (target {})",
            sample.input, output[0], sample.target[0]
        );
    }
}

use serde::{Deserialize, Serialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
/// Receivers use this to drive progress lines or an epoch log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean quadratic cost over the training set after this epoch's updates.
    pub train_cost: f64,
    /// Correctly classified test examples, if a test set was provided.
    pub test_correct: Option<usize>,
    /// Test set size, if a test set was provided.
    pub test_total: Option<usize>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

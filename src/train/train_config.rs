use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};

use crate::error::{NetError, NetResult};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — total number of full passes over the training data
/// - `batch_size`  — samples per mini-batch; use `1` for online SGD
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch.  If the receiver is dropped the loop
///                   terminates early (clean shutdown).
/// - `stop_flag`   — optional atomic flag; when set to `true` from another
///                   thread the loop terminates after the current epoch.
#[derive(Debug)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop
    /// flag. Zero epochs or a zero batch size are rejected here, before any
    /// network is touched.
    pub fn new(epochs: usize, batch_size: usize) -> NetResult<Self> {
        if epochs == 0 {
            return Err(NetError::invalid_config(
                "epochs",
                "0",
                "must be at least 1",
            ));
        }
        if batch_size == 0 {
            return Err(NetError::invalid_config(
                "batch_size",
                "0",
                "must be at least 1",
            ));
        }
        Ok(TrainConfig {
            epochs,
            batch_size,
            progress_tx: None,
            stop_flag: None,
        })
    }
}

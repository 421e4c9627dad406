//! Append-only JSON-lines log of per-epoch statistics.
//!
//! The format is a progress side channel for humans and plotting scripts, not
//! a compatibility contract.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::train::epoch_stats::EpochStats;

/// Appends one `EpochStats` as a JSON line to `path`, creating the file on
/// first use.
pub fn append_epoch_stats<P: AsRef<Path>>(path: P, stats: &EpochStats) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, stats)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn stats(epoch: usize) -> EpochStats {
        EpochStats {
            epoch,
            total_epochs: 2,
            train_cost: 0.25,
            test_correct: Some(9),
            test_total: Some(10),
            elapsed_ms: 12,
        }
    }

    #[test]
    fn appends_one_json_line_per_call() {
        let path = std::env::temp_dir().join("hematite_epoch_stats_test.jsonl");
        let _ = fs::remove_file(&path);

        append_epoch_stats(&path, &stats(1)).unwrap();
        append_epoch_stats(&path, &stats(2)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: EpochStats = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.epoch, 2);
        assert_eq!(parsed.test_correct, Some(9));

        let _ = fs::remove_file(&path);
    }
}

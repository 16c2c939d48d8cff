//! Allocation-failure log
//!
//! Append-only text log of placement failures, one timestamped line per
//! failure. Never truncated, never rotated.

use crate::memory::ProcessId;
use crate::placement::Strategy;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends allocation failures to a persistent log file
pub struct FailureLog {
    path: PathBuf,
}

impl FailureLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FailureLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record one allocation failure
    ///
    /// A log file that cannot be opened or written is reported as a warning;
    /// logging never fails the simulation itself.
    pub fn record(&self, pid: ProcessId, strategy: Strategy, reason: &str) {
        tracing::warn!(
            pid = pid.get(),
            strategy = strategy.as_str(),
            reason,
            "allocation failure"
        );

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!(
            "[{}] ERROR: process {} | {} fit | reason: {}\n",
            timestamp,
            pid.get(),
            strategy,
            reason
        );

        let opened = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path);
        match opened {
            Ok(mut file) => {
                if let Err(e) = file.write_all(line.as_bytes()) {
                    tracing::warn!(error = %e, path = %self.path.display(), "failed to append to failure log");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "failed to open failure log");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pid(n: u32) -> ProcessId {
        ProcessId::new(n).unwrap()
    }

    #[test]
    fn test_record_appends_one_line_per_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("failures.log");
        let log = FailureLog::new(&path);

        log.record(pid(1), Strategy::FirstFit, "no free region large enough");
        log.record(pid(6), Strategy::WorstFit, "no free region large enough");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("process 1 | first fit"));
        assert!(lines[1].contains("process 6 | worst fit"));
        assert!(lines[0].starts_with('['));
    }

    #[test]
    fn test_record_never_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("failures.log");
        std::fs::write(&path, "existing line\n").unwrap();

        let log = FailureLog::new(&path);
        log.record(pid(2), Strategy::BestFit, "no free region large enough");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("existing line\n"));
        assert!(contents.contains("process 2"));
    }

    #[test]
    fn test_unwritable_log_is_swallowed() {
        let log = FailureLog::new("/nonexistent-dir/failures.log");
        // Must not panic or error.
        log.record(pid(3), Strategy::FirstFit, "no free region large enough");
    }
}

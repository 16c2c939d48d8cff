//! High-level simulation session
//!
//! Combines the memory space, placement engine and failure log behind one
//! API with the reference error policy: allocation failures and duplicate
//! requests are reported and execution continues with the prior, consistent
//! state. Nothing here is fatal to the hosting process.

use crate::command::Command;
use crate::error::{Result, SimError};
use crate::log::FailureLog;
use crate::memory::MemorySpace;
use crate::placement;
use std::path::Path;

/// A memory-management simulation session
pub struct Simulator {
    space: MemorySpace,
    failure_log: Option<FailureLog>,
}

impl Simulator {
    /// Create a session over a fresh all-free space
    pub fn new(capacity: usize) -> Self {
        Simulator {
            space: MemorySpace::new(capacity),
            failure_log: None,
        }
    }

    /// Create a session over an existing space
    pub fn from_space(space: MemorySpace) -> Self {
        Simulator {
            space,
            failure_log: None,
        }
    }

    /// Attach an allocation-failure log
    pub fn with_failure_log(mut self, log: FailureLog) -> Self {
        self.failure_log = Some(log);
        self
    }

    pub fn space(&self) -> &MemorySpace {
        &self.space
    }

    pub fn space_mut(&mut self) -> &mut MemorySpace {
        &mut self.space
    }

    pub fn into_space(self) -> MemorySpace {
        self.space
    }

    /// Execute one command
    ///
    /// Placement failures are logged and swallowed; a duplicate allocation
    /// request is reported and swallowed with the space unchanged. Only
    /// caller errors (zero length) propagate.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Allocate {
                pid,
                length,
                strategy,
            } => match placement::place(&mut self.space, strategy, pid, length) {
                Ok(start) => {
                    tracing::info!(
                        pid = pid.get(),
                        length,
                        strategy = strategy.as_str(),
                        start,
                        "allocated"
                    );
                    Ok(())
                }
                Err(SimError::NoSuitableRegion { .. }) => {
                    if let Some(log) = &self.failure_log {
                        log.record(pid, strategy, "no free region large enough");
                    }
                    Ok(())
                }
                Err(SimError::OwnerAlreadyPresent(owner)) => {
                    tracing::warn!(pid = owner, "process is already allocated, request ignored");
                    Ok(())
                }
                Err(e) => Err(e),
            },
            Command::Free { pid } => {
                self.space.free(pid);
                tracing::info!(pid = pid.get(), "freed");
                Ok(())
            }
        }
    }

    /// Execute every command in a file, one per line
    ///
    /// A missing command file is an error for this invocation: nothing is
    /// mutated and the caller gets a diagnostic.
    pub fn run_command_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let contents = std::fs::read_to_string(path)?;
        for line in contents.lines() {
            if let Some(command) = Command::parse(line)? {
                self.execute(command)?;
            }
        }
        Ok(())
    }
}

//! Placement strategies for contiguous allocation
//!
//! The engine separates *selection* from *commitment*: a strategy only
//! inspects the space and picks a qualifying free region, and [`place`]
//! commits the chosen run. A failed call therefore never mutates the space.
//!
//! All three strategies consider the same candidates: maximal free regions,
//! as produced by [`MemorySpace::free_regions`].

pub mod best;
pub mod first;
pub mod worst;

pub use best::BestFit;
pub use first::FirstFit;
pub use worst::WorstFit;

use crate::error::{Result, SimError};
use crate::memory::{MemorySpace, ProcessId, Region};
use std::fmt;
use std::str::FromStr;

/// A contiguous-placement policy
///
/// Defines which qualifying free region receives a new allocation.
pub trait PlacementStrategy {
    /// Strategy name as used in command files and log records
    fn name(&self) -> &'static str;

    /// Select a free region of at least `length` blocks, or `None` when no
    /// region qualifies. Read-only; never mutates the space.
    fn select(&self, space: &MemorySpace, length: usize) -> Option<Region>;
}

/// Dispatch over the built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FirstFit,
    BestFit,
    WorstFit,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::FirstFit => "first",
            Strategy::BestFit => "best",
            Strategy::WorstFit => "worst",
        }
    }

    fn policy(&self) -> &'static dyn PlacementStrategy {
        match self {
            Strategy::FirstFit => &FirstFit,
            Strategy::BestFit => &BestFit,
            Strategy::WorstFit => &WorstFit,
        }
    }
}

impl FromStr for Strategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first" => Ok(Strategy::FirstFit),
            "best" => Ok(Strategy::BestFit),
            "worst" => Ok(Strategy::WorstFit),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allocate `length` contiguous blocks for `pid` under `strategy`
///
/// Returns the start index of the placed run. All-or-nothing: on any error
/// the space is left unchanged. The duplicate-owner check precedes every
/// placement attempt, so a pid that already owns blocks is rejected before
/// any scan.
pub fn place(
    space: &mut MemorySpace,
    strategy: Strategy,
    pid: ProcessId,
    length: usize,
) -> Result<usize> {
    if length == 0 {
        return Err(SimError::InvalidLength(length));
    }
    if space.owner_exists(pid) {
        return Err(SimError::OwnerAlreadyPresent(pid.get()));
    }

    let policy = strategy.policy();
    let region = policy
        .select(space, length)
        .ok_or(SimError::NoSuitableRegion {
            pid: pid.get(),
            requested: length,
        })?;

    space.occupy(region.start, length, pid);

    tracing::debug!(
        pid = pid.get(),
        length,
        strategy = policy.name(),
        start = region.start,
        "placed allocation"
    );

    Ok(region.start)
}

//! First Fit placement
//!
//! Scans left to right and takes the first maximal free region large enough
//! for the request. Fast, but tends to concentrate allocations at the front
//! of the space.

use crate::memory::{MemorySpace, Region};
use crate::placement::PlacementStrategy;

/// First Fit: leftmost qualifying region wins
pub struct FirstFit;

impl PlacementStrategy for FirstFit {
    fn name(&self) -> &'static str {
        "first"
    }

    fn select(&self, space: &MemorySpace, length: usize) -> Option<Region> {
        space.free_regions().find(|r| r.length >= length)
    }
}

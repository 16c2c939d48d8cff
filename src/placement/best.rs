//! Best Fit placement
//!
//! Scans every maximal free region and picks the smallest one that still
//! fits the request, leaving larger regions intact for future allocations.

use crate::memory::{MemorySpace, Region};
use crate::placement::PlacementStrategy;

/// Best Fit: smallest qualifying region wins, first-seen on ties
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn name(&self) -> &'static str {
        "best"
    }

    fn select(&self, space: &MemorySpace, length: usize) -> Option<Region> {
        // Strict improvement only: an equally small later region never
        // replaces the incumbent, so ties go to the first region seen.
        let mut best: Option<Region> = None;
        for region in space.free_regions() {
            if region.length < length {
                continue;
            }
            match best {
                Some(incumbent) if region.length >= incumbent.length => {}
                _ => best = Some(region),
            }
        }
        best
    }
}

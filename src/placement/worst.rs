//! Worst Fit placement
//!
//! Scans every maximal free region and picks the largest qualifying one,
//! leaving the biggest possible leftover run for later small requests.

use crate::memory::{MemorySpace, Region};
use crate::placement::PlacementStrategy;

/// Worst Fit: largest qualifying region wins, first-seen on ties
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn name(&self) -> &'static str {
        "worst"
    }

    fn select(&self, space: &MemorySpace, length: usize) -> Option<Region> {
        // Strict improvement only, so ties go to the first region seen.
        let mut worst: Option<Region> = None;
        for region in space.free_regions() {
            if region.length < length {
                continue;
            }
            match worst {
                Some(incumbent) if region.length <= incumbent.length => {}
                _ => worst = Some(region),
            }
        }
        worst
    }
}

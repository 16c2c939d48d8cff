//! Fragmentation analysis
//!
//! Derives aggregate statistics from the current memory state in one linear
//! scan. Read-only; never mutates the space.

use crate::memory::MemorySpace;
use serde::Serialize;
use std::fmt;

/// Aggregate view of the free space in a memory space
///
/// A *region* is a maximal run of consecutive free blocks. The space counts
/// as externally fragmented when free capacity exists in more than one
/// disjoint location, even if the total would satisfy a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FragmentationReport {
    /// Total number of free blocks
    pub total_free: usize,
    /// Number of disjoint free regions
    pub region_count: usize,
    /// Smallest region size; `None` when the space is fully occupied
    pub min_region: Option<usize>,
    /// Largest region size; `None` when the space is fully occupied
    pub max_region: Option<usize>,
    /// True iff more than one free region exists
    pub fragmented: bool,
}

/// Analyze the free space of `space`
pub fn analyze(space: &MemorySpace) -> FragmentationReport {
    let mut total_free = 0;
    let mut region_count = 0;
    let mut min_region: Option<usize> = None;
    let mut max_region: Option<usize> = None;

    for region in space.free_regions() {
        total_free += region.length;
        region_count += 1;
        min_region = Some(min_region.map_or(region.length, |m| m.min(region.length)));
        max_region = Some(max_region.map_or(region.length, |m| m.max(region.length)));
    }

    FragmentationReport {
        total_free,
        region_count,
        min_region,
        max_region,
        fragmented: region_count > 1,
    }
}

impl fmt::Display for FragmentationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "free blocks:  {}", self.total_free)?;
        writeln!(f, "free regions: {}", self.region_count)?;
        if let (Some(min), Some(max)) = (self.min_region, self.max_region) {
            writeln!(f, "largest region:  {}", max)?;
            writeln!(f, "smallest region: {}", min)?;
        }
        write!(
            f,
            "verdict: {}",
            if self.fragmented {
                "fragmented"
            } else {
                "not fragmented"
            }
        )
    }
}

//! Memory compaction
//!
//! Relocates every occupied block to the front of the space, preserving the
//! relative left-to-right order of owner tags, and frees the remainder.
//! Absolute positions are not preserved.

use crate::memory::{Block, MemorySpace};

/// Compact the space in place
///
/// Returns the number of blocks that remain occupied (the length of the
/// packed prefix). Idempotent: compacting a compacted space is a no-op.
/// Never fails, including on an all-free or all-occupied space.
pub fn compact(space: &mut MemorySpace) -> usize {
    let packed: Vec<Block> = space
        .blocks()
        .iter()
        .copied()
        .filter(|b| !b.is_free())
        .collect();
    let occupied = packed.len();

    for index in 0..space.capacity() {
        let block = packed.get(index).copied().unwrap_or(Block::Free);
        space.set(index, block);
    }

    occupied
}

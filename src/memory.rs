//! Memory space model for the simulator
//!
//! The simulated memory is a fixed-length sequence of blocks. Each block is
//! either free or occupied by a process. Allocations are implicit: a process
//! "owns" whatever blocks carry its id, and a whole-process free releases all
//! of them regardless of contiguity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Default capacity of the simulated memory space, in blocks
pub const DEFAULT_CAPACITY: usize = 100;

/// Blocks per row when rendering the memory map
const MAP_ROW_WIDTH: usize = 20;

/// Identifier of a process occupying memory
///
/// The free state is a separate [`Block`] variant, so a zero or negative
/// owner tag is unrepresentable.
pub type ProcessId = NonZeroU32;

/// One indivisible unit of the simulated memory space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Free,
    Occupied(ProcessId),
}

impl Block {
    /// Owner tag as persisted in the state file (0 = free)
    pub fn tag(&self) -> u32 {
        match self {
            Block::Free => 0,
            Block::Occupied(pid) => pid.get(),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Block::Free)
    }
}

/// A maximal contiguous run of free blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Index of the first block in the run
    pub start: usize,
    /// Number of blocks in the run
    pub length: usize,
}

impl Region {
    pub fn new(start: usize, length: usize) -> Self {
        Region { start, length }
    }

    /// Index one past the last block in the run
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Check if this region contains a block index
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}

/// The simulated memory space
///
/// An explicit owned value rather than process-wide state, so multiple
/// independent spaces can coexist (and tests need no reset ritual).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySpace {
    blocks: Vec<Block>,
}

impl MemorySpace {
    /// Create a new space with every block free
    pub fn new(capacity: usize) -> Self {
        MemorySpace {
            blocks: vec![Block::Free; capacity],
        }
    }

    /// Total number of blocks in the space
    pub fn capacity(&self) -> usize {
        self.blocks.len()
    }

    /// All blocks in order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of free blocks
    pub fn free_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_free()).count()
    }

    /// Set every block to free
    pub fn reset(&mut self) {
        self.blocks.fill(Block::Free);
    }

    /// Release every block owned by `pid`
    ///
    /// No-op when the process owns nothing.
    pub fn free(&mut self, pid: ProcessId) {
        for block in &mut self.blocks {
            if *block == Block::Occupied(pid) {
                *block = Block::Free;
            }
        }
    }

    /// True iff at least one block carries `pid`
    pub fn owner_exists(&self, pid: ProcessId) -> bool {
        self.blocks.contains(&Block::Occupied(pid))
    }

    /// Number of blocks owned by `pid`
    pub fn owned_blocks(&self, pid: ProcessId) -> usize {
        self.blocks
            .iter()
            .filter(|b| **b == Block::Occupied(pid))
            .count()
    }

    /// Tag a contiguous run of blocks with `pid` (placement commit)
    ///
    /// The caller must have selected the run from `free_regions`; the run
    /// must lie inside the space.
    pub fn occupy(&mut self, start: usize, length: usize, pid: ProcessId) {
        debug_assert!(start + length <= self.blocks.len());
        for block in &mut self.blocks[start..start + length] {
            debug_assert!(block.is_free());
            *block = Block::Occupied(pid);
        }
    }

    pub(crate) fn set(&mut self, index: usize, block: Block) {
        self.blocks[index] = block;
    }

    /// Iterate over the maximal free regions, left to right
    ///
    /// Shared scan used by the placement strategies and the fragmentation
    /// analyzer.
    pub fn free_regions(&self) -> FreeRegions<'_> {
        FreeRegions {
            blocks: &self.blocks,
            index: 0,
        }
    }
}

impl Default for MemorySpace {
    fn default() -> Self {
        MemorySpace::new(DEFAULT_CAPACITY)
    }
}

/// Iterator over the maximal free regions of a space
pub struct FreeRegions<'a> {
    blocks: &'a [Block],
    index: usize,
}

impl Iterator for FreeRegions<'_> {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        while self.index < self.blocks.len() && !self.blocks[self.index].is_free() {
            self.index += 1;
        }
        if self.index >= self.blocks.len() {
            return None;
        }

        let start = self.index;
        while self.index < self.blocks.len() && self.blocks[self.index].is_free() {
            self.index += 1;
        }

        Some(Region::new(start, self.index - start))
    }
}

impl fmt::Display for MemorySpace {
    /// Render the memory map, 20 blocks per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.blocks.chunks(MAP_ROW_WIDTH) {
            for block in row {
                write!(f, "{:2} ", block.tag())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

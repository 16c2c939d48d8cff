//! Contiguous memory allocation simulator
//!
//! Models how an operating system assigns and reclaims contiguous blocks of
//! memory for processes over a fixed-size address space.
//!
//! ## Features
//!
//! - **Three placement strategies**: First Fit, Best Fit, Worst Fit
//! - **All-or-nothing placement**: a failed allocation never mutates the space
//! - **Compaction**: relocates occupied blocks to the front, order preserved
//! - **Fragmentation analysis**: free-region statistics and a verdict
//! - **Flat state persistence**: whitespace-separated owner tags
//! - **Failure log**: timestamped append-only record of placement failures
//!
//! ## Example
//!
//! ```rust
//! use blocksim::{analyze, place, MemorySpace, ProcessId, Strategy};
//!
//! let mut space = MemorySpace::new(20);
//! let pid = ProcessId::new(1).unwrap();
//!
//! let start = place(&mut space, Strategy::FirstFit, pid, 10).unwrap();
//! assert_eq!(start, 0);
//! assert_eq!(space.free_blocks(), 10);
//!
//! space.free(pid);
//! let report = analyze(&space);
//! assert_eq!(report.region_count, 1);
//! assert!(!report.fragmented);
//! ```
//!
//! The simulated space is an explicit owned value; any number of independent
//! spaces can coexist. Everything is single-threaded and synchronous: every
//! operation is a bounded linear scan that runs to completion.

pub mod analyze;
pub mod codec;
pub mod command;
pub mod compact;
pub mod error;
pub mod log;
pub mod memory;
pub mod placement;
pub mod sim;

// Re-export commonly used types
pub use analyze::{analyze, FragmentationReport};
pub use command::Command;
pub use compact::compact;
pub use error::{Result, SimError};
pub use log::FailureLog;
pub use memory::{Block, MemorySpace, ProcessId, Region, DEFAULT_CAPACITY};
pub use placement::{place, BestFit, FirstFit, PlacementStrategy, Strategy, WorstFit};
pub use sim::Simulator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

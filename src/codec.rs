//! State persistence for the memory space
//!
//! The persisted format is a flat sequence of whitespace-separated decimal
//! owner tags, one per block, in block order. No length header, no checksum.

use crate::error::{Result, SimError};
use crate::memory::{Block, MemorySpace, ProcessId};
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Write the entire space to `path`, replacing any previous contents
pub fn save<P: AsRef<Path>>(space: &MemorySpace, path: P) -> Result<()> {
    let tags: Vec<String> = space.blocks().iter().map(|b| b.tag().to_string()).collect();

    let mut file = File::create(path)?;
    file.write_all(tags.join(" ").as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;

    Ok(())
}

/// Load persisted state from `path` into `space`
///
/// Returns the number of blocks read. A missing file leaves the space
/// unchanged and returns 0 (not an error). A short file overwrites only the
/// leading blocks; the tail keeps whatever it held, so callers wanting
/// deterministic results should load into a freshly constructed space.
/// Values beyond capacity are ignored. The load is all-or-nothing: a
/// malformed or negative tag rejects the whole file with the space
/// untouched.
pub fn load<P: AsRef<Path>>(space: &mut MemorySpace, path: P) -> Result<usize> {
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    // Parse fully before touching the space, so a bad token cannot leave it
    // partially overwritten.
    let mut parsed = Vec::with_capacity(space.capacity());
    for token in contents.split_whitespace().take(space.capacity()) {
        let value: i64 = token
            .parse()
            .map_err(|_| SimError::MalformedState(format!("unparsable owner tag {:?}", token)))?;
        let tag = u32::try_from(value).map_err(|_| SimError::InvalidOwnerTag(value))?;
        parsed.push(ProcessId::new(tag).map(Block::Occupied).unwrap_or(Block::Free));
    }

    let read = parsed.len();
    for (index, block) in parsed.into_iter().enumerate() {
        space.set(index, block);
    }

    Ok(read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn pid(n: u32) -> ProcessId {
        ProcessId::new(n).unwrap()
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp = NamedTempFile::new().unwrap();

        let mut space = MemorySpace::new(20);
        space.occupy(3, 7, pid(1));
        space.occupy(17, 3, pid(2));

        save(&space, temp.path()).unwrap();

        let mut loaded = MemorySpace::new(20);
        let read = load(&mut loaded, temp.path()).unwrap();
        assert_eq!(read, 20);
        assert_eq!(loaded, space);
    }

    #[test]
    fn test_save_writes_flat_tag_sequence() {
        let temp = NamedTempFile::new().unwrap();

        let mut space = MemorySpace::new(5);
        space.occupy(2, 2, pid(7));
        save(&space, temp.path()).unwrap();

        let contents = std::fs::read_to_string(temp.path()).unwrap();
        assert_eq!(contents.trim(), "0 0 7 7 0");
    }

    #[test]
    fn test_load_missing_file_leaves_space_unchanged() {
        let mut space = MemorySpace::new(20);
        space.occupy(0, 5, pid(1));
        let before = space.clone();

        let read = load(&mut space, "/nonexistent/blocksim-state").unwrap();
        assert_eq!(read, 0);
        assert_eq!(space, before);
    }

    #[test]
    fn test_load_short_file_leaves_tail() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "4 4 4").unwrap();

        let mut space = MemorySpace::new(10);
        space.occupy(5, 5, pid(9));

        let read = load(&mut space, temp.path()).unwrap();
        assert_eq!(read, 3);
        assert_eq!(space.owned_blocks(pid(4)), 3);
        // Tail beyond the file keeps its previous contents.
        assert_eq!(space.owned_blocks(pid(9)), 5);
    }

    #[test]
    fn test_load_ignores_values_beyond_capacity() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "1 1 1 2 2 2").unwrap();

        let mut space = MemorySpace::new(4);
        let read = load(&mut space, temp.path()).unwrap();
        assert_eq!(read, 4);
        assert_eq!(space.owned_blocks(pid(1)), 3);
        assert_eq!(space.owned_blocks(pid(2)), 1);
    }

    #[test]
    fn test_load_rejects_negative_tag_without_mutation() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "1 -2 3").unwrap();

        let mut space = MemorySpace::new(10);
        let before = space.clone();

        let result = load(&mut space, temp.path());
        assert!(matches!(result, Err(SimError::InvalidOwnerTag(-2))));
        assert_eq!(space, before);
    }

    #[test]
    fn test_load_rejects_garbage_token_without_mutation() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "1 two 3").unwrap();

        let mut space = MemorySpace::new(10);
        let before = space.clone();

        let result = load(&mut space, temp.path());
        assert!(matches!(result, Err(SimError::MalformedState(_))));
        assert_eq!(space, before);
    }
}

//! Command-file parsing
//!
//! The driver consumes single-line commands of the form
//! `alocar <id> <length> <algorithm>` or `liberar <id>`, where the algorithm
//! is one of `first`, `best`, `worst`. Unrecognized command words are
//! silently ignored; malformed arguments of a recognized word are errors.

use crate::error::{Result, SimError};
use crate::memory::ProcessId;
use crate::placement::Strategy;

/// A single simulator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `alocar <id> <length> <algorithm>`
    Allocate {
        pid: ProcessId,
        length: usize,
        strategy: Strategy,
    },
    /// `liberar <id>`
    Free { pid: ProcessId },
}

impl Command {
    /// Parse one command line
    ///
    /// Returns `Ok(None)` for blank lines and unrecognized command words.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut parts = line.split_whitespace();
        let word = match parts.next() {
            Some(word) => word,
            None => return Ok(None),
        };

        match word {
            "alocar" => {
                let pid = parse_pid(parts.next(), line)?;
                let length = parse_length(parts.next(), line)?;
                let strategy = parts
                    .next()
                    .ok_or_else(|| missing("algorithm", line))?
                    .parse::<Strategy>()?;
                Ok(Some(Command::Allocate {
                    pid,
                    length,
                    strategy,
                }))
            }
            "liberar" => {
                let pid = parse_pid(parts.next(), line)?;
                Ok(Some(Command::Free { pid }))
            }
            _ => Ok(None),
        }
    }
}

fn missing(what: &str, line: &str) -> SimError {
    SimError::MalformedCommand(format!("missing {} in {:?}", what, line))
}

fn parse_pid(token: Option<&str>, line: &str) -> Result<ProcessId> {
    let token = token.ok_or_else(|| missing("process id", line))?;
    token
        .parse::<u32>()
        .ok()
        .and_then(ProcessId::new)
        .ok_or_else(|| {
            SimError::MalformedCommand(format!(
                "invalid process id {:?} (must be a positive integer)",
                token
            ))
        })
}

fn parse_length(token: Option<&str>, line: &str) -> Result<usize> {
    let token = token.ok_or_else(|| missing("length", line))?;
    token.parse::<usize>().map_err(|_| {
        SimError::MalformedCommand(format!("invalid length {:?}", token))
    })
}

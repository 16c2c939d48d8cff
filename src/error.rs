use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("no suitable free region: process {pid} requested {requested} blocks")]
    NoSuitableRegion { pid: u32, requested: usize },

    #[error("process {0} is already allocated")]
    OwnerAlreadyPresent(u32),

    #[error("invalid allocation length: {0}")]
    InvalidLength(usize),

    #[error("invalid owner tag in state file: {0} (must be 0 or a positive process id)")]
    InvalidOwnerTag(i64),

    #[error("malformed state file: {0}")]
    MalformedState(String),

    #[error("malformed command: {0}")]
    MalformedCommand(String),

    #[error("unknown placement strategy: {0} (must be first, best or worst)")]
    UnknownStrategy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

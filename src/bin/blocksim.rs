//! blocksim driver
//!
//! Command-line front end for the simulator: executes command files against
//! a persisted memory state, and inspects, compacts or resets that state.

use anyhow::Context;
use blocksim::{analyze, codec, compact, FailureLog, MemorySpace, Simulator, DEFAULT_CAPACITY};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "blocksim")]
#[command(about = "Contiguous memory allocation simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args, Debug)]
struct StateArgs {
    /// Path to the persisted memory state
    #[arg(short = 's', long, default_value = "estado.txt")]
    state_file: PathBuf,

    /// Capacity of the memory space, in blocks
    #[arg(short = 'n', long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Execute a command file against the persisted state
    Process {
        #[command(flatten)]
        state: StateArgs,

        /// Path to the command file
        #[arg(short = 'c', long, default_value = "comando.txt")]
        command_file: PathBuf,

        /// Path to the allocation-failure log
        #[arg(short = 'l', long, default_value = "log.txt")]
        log_file: PathBuf,
    },
    /// Print the fragmentation report
    Report {
        #[command(flatten)]
        state: StateArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compact the persisted state
    Compact {
        #[command(flatten)]
        state: StateArgs,
    },
    /// Print the memory map, 20 blocks per row
    Show {
        #[command(flatten)]
        state: StateArgs,
    },
    /// Write an all-free state file
    Init {
        #[command(flatten)]
        state: StateArgs,
    },
}

/// Load the persisted state into a fresh space
///
/// The space starts all-free, so a short or missing state file yields a
/// deterministic free tail.
fn load_space(state: &StateArgs) -> anyhow::Result<MemorySpace> {
    let mut space = MemorySpace::new(state.capacity);
    codec::load(&mut space, &state.state_file)
        .with_context(|| format!("loading state from {}", state.state_file.display()))?;
    Ok(space)
}

fn save_space(space: &MemorySpace, path: &Path) -> anyhow::Result<()> {
    codec::save(space, path).with_context(|| format!("saving state to {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Cmd::Process {
            state,
            command_file,
            log_file,
        } => {
            let space = load_space(&state)?;
            let mut sim = Simulator::from_space(space).with_failure_log(FailureLog::new(log_file));

            sim.run_command_file(&command_file)
                .with_context(|| format!("processing {}", command_file.display()))?;

            save_space(sim.space(), &state.state_file)?;
        }
        Cmd::Report { state, json } => {
            let report = analyze(&load_space(&state)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Cmd::Compact { state } => {
            let mut space = load_space(&state)?;
            let occupied = compact(&mut space);
            save_space(&space, &state.state_file)?;
            println!(
                "compacted: {} occupied blocks packed, {} free",
                occupied,
                space.free_blocks()
            );
        }
        Cmd::Show { state } => {
            print!("{}", load_space(&state)?);
        }
        Cmd::Init { state } => {
            let space = MemorySpace::new(state.capacity);
            save_space(&space, &state.state_file)?;
        }
    }

    Ok(())
}

/*!
 * osviz - OS Algorithm Simulator
 *
 * Command-line front end for the simulation engines:
 * - CPU scheduling
 * - Banker's safety check
 * - Page replacement
 *
 * Results are printed to stdout as JSON; tracing goes to stderr.
 */

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use osviz_core::core::limits::{DEFAULT_FRAME_COUNT, DEFAULT_QUANTUM};
use osviz_core::request::parse::{
    parse_frame_count, parse_process_spec, parse_quantum, parse_reference_string,
    parse_resource_column,
};
use osviz_core::{
    check_safety, execute_json, init_tracing, run_schedule, simulate_paging, SchedulingPolicy,
};

/// OS algorithm simulator
#[derive(Parser, Debug)]
#[command(name = "osviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print single-line JSON instead of pretty-printed output
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a CPU scheduling policy
    Schedule {
        /// fcfs, sjf, sjf_preemptive, priority, priority_preemptive, round_robin
        #[arg(short, long)]
        policy: String,
        /// ARRIVAL:BURST[:PRIORITY] or ID:ARRIVAL:BURST[:PRIORITY], once per process
        #[arg(long = "process", required = true)]
        processes: Vec<String>,
        /// Round Robin time quantum
        #[arg(short, long, allow_hyphen_values = true)]
        quantum: Option<String>,
    },
    /// Check whether a single-resource allocation state is safe
    Banker {
        /// Current allocation per process, e.g. "1 2 2"
        #[arg(long)]
        allocation: String,
        /// Maximum claim per process, e.g. "3 4 2"
        #[arg(long)]
        maximum: String,
        /// Available instances, e.g. "1"
        #[arg(long)]
        available: String,
    },
    /// Simulate page replacement over a reference string
    Paging {
        /// fifo, lru, optimal
        #[arg(short, long)]
        policy: String,
        /// Number of frames
        #[arg(short, long, allow_hyphen_values = true)]
        frames: Option<String>,
        /// Reference string, e.g. "7 0 1 2 0 3"
        #[arg(short, long)]
        refs: String,
    },
    /// Run a JSON request read from a file (or stdin when omitted)
    Run {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let compact = cli.compact;

    match cli.command {
        Commands::Schedule {
            policy,
            processes,
            quantum,
        } => {
            let policy: SchedulingPolicy = policy.parse()?;
            let processes = processes
                .iter()
                .enumerate()
                .map(|(i, spec)| parse_process_spec(i, spec))
                .collect::<Result<Vec<_>, _>>()?;
            let quantum = match quantum {
                Some(q) => Some(parse_quantum(&q)?),
                None if policy == SchedulingPolicy::RoundRobin => Some(DEFAULT_QUANTUM),
                None => None,
            };
            info!(policy = %policy, processes = processes.len(), "running scheduler");
            emit(&run_schedule(policy, &processes, quantum)?, compact)
        }
        Commands::Banker {
            allocation,
            maximum,
            available,
        } => {
            let allocation = parse_resource_column(&allocation, "allocation")?;
            let maximum = parse_resource_column(&maximum, "maximum")?;
            let available: Vec<_> = parse_resource_column(&available, "available")?
                .into_iter()
                .flatten()
                .collect();
            emit(&check_safety(&allocation, &maximum, &available)?, compact)
        }
        Commands::Paging {
            policy,
            frames,
            refs,
        } => {
            let frame_count = match frames {
                Some(f) => parse_frame_count(&f)?,
                None => DEFAULT_FRAME_COUNT,
            };
            let references = parse_reference_string(&refs)?;
            emit(&simulate_paging(&references, frame_count, &policy)?, compact)
        }
        Commands::Run { input } => {
            let json = match input {
                Some(path) => std::fs::read_to_string(&path).into_diagnostic()?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf).into_diagnostic()?;
                    buf
                }
            };
            emit(&execute_json(&json)?, compact)
        }
    }
}

fn emit<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .into_diagnostic()?;
    println!("{}", out);
    Ok(())
}

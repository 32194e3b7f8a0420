/*!
 * schedsim - Command Line Driver
 *
 * Loads a binary process descriptor file, runs one scheduling algorithm
 * over it and prints the resulting statistics.
 */

use clap::Parser;
use cpu_sched_sim::monitoring::SimulationSpan;
use cpu_sched_sim::{init_tracing, load_descriptors, Algorithm, Quantum, ScheduleReport};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

/// Batch CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "schedsim", version)]
#[command(about = "Simulate FCFS, SJF, Priority, Round-Robin and SRT scheduling", long_about = None)]
struct Args {
    /// Binary process descriptor file
    descriptor_file: PathBuf,

    /// Algorithm code: FCFS, SJF, P, RR or SRT
    algorithm: Algorithm,

    /// Round-robin time quantum (required for RR)
    #[arg(env = "SCHEDSIM_QUANTUM")]
    quantum: Option<u32>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let queue = load_descriptors(&args.descriptor_file)?;
    let quantum = args.quantum.map(Quantum::new).transpose()?;

    let report = {
        let span = SimulationSpan::new(args.algorithm.as_str(), queue.len());
        let _entered = span.enter();
        args.algorithm.simulate(&queue, quantum)?
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report.result).into_diagnostic()?
        );
    } else {
        print_report(&report);
    }

    info!(algorithm = %args.algorithm, "Done");
    Ok(())
}

fn print_report(report: &ScheduleReport) {
    let name = match report.algorithm {
        Algorithm::Fcfs => "FCFS",
        other => other.name(),
    };
    println!("{} scheduling results:", name);
    println!(
        "Average Turnaround Time: {:.6}",
        report.result.average_turnaround_time
    );
    println!(
        "Average Waiting Time: {:.6}",
        report.result.average_waiting_time
    );
    println!("Total Run Time: {}", report.result.total_run_time);
}

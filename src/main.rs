/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Usage: sched-sim <workload.json>
 *
 * The workload path may also come from SIM_WORKLOAD. Reports go to stdout,
 * logs to stderr.
 */

use anyhow::{Context, Result};
use std::fmt::Write as _;
use tracing::info;

use cpu_sched_sim::{init_tracing, OutputFormat, SimConfig, SimulationReport};

fn main() -> Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SIM_WORKLOAD").ok())
        .context("usage: sched-sim <workload.json> (or set SIM_WORKLOAD)")?;

    info!(path = %path, "Loading workload");
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read workload file {path}"))?;

    let config = SimConfig::from_json(&raw)
        .and_then(SimConfig::with_env_overrides)
        .with_context(|| format!("Invalid workload file {path}"))?;
    let simulator = config.simulator()?;
    let reports = simulator.run_all(&config.processes)?;

    match config.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Table => {
            for report in &reports {
                println!("{}", render_table(report));
            }
        }
    }

    Ok(())
}

fn render_table(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", report.policy);
    let _ = writeln!(
        out,
        "{:>5} {:>8} {:>6} {:>9} {:>11} {:>11} {:>8}",
        "pid", "arrival", "burst", "priority", "completion", "turnaround", "waiting"
    );
    for o in &report.outcomes {
        let _ = writeln!(
            out,
            "{:>5} {:>8} {:>6} {:>9} {:>11} {:>11} {:>8}",
            o.pid,
            o.arrival_time,
            o.burst_time,
            o.priority,
            o.completion_time,
            o.turnaround_time,
            o.waiting_time
        );
    }

    let s = &report.summary;
    let _ = writeln!(
        out,
        "avg turnaround {:.2} | avg waiting {:.2} | makespan {} | idle {} | utilization {:.1}% | dispatches {} | preemptions {}",
        s.average_turnaround,
        s.average_waiting,
        s.makespan,
        s.idle_time,
        s.cpu_utilization * 100.0,
        s.dispatches,
        s.preemptions
    );
    out
}

/*!
 * Simulation Engine
 * Uniform driver loop shared by every scheduling policy
 */

use super::state::RunState;
use super::stats::{finalize, outcome_for, Summary};
use super::traits::Policy;
use super::types::SchedulingPolicy;
use crate::core::types::Pid;
use crate::monitoring::TimelineEvent;
use crate::process::{Process, ProcessOutcome};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Everything one policy run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub policy: SchedulingPolicy,
    /// Per-process results in input order
    pub outcomes: Vec<ProcessOutcome>,
    pub timeline: Vec<TimelineEvent>,
    pub summary: Summary,
}

impl SimulationReport {
    pub fn outcome(&self, pid: Pid) -> Option<&ProcessOutcome> {
        outcome_for(&self.outcomes, pid)
    }

    pub fn completion_times(&self) -> Vec<u64> {
        self.outcomes.iter().map(|o| o.completion_time).collect()
    }

    pub fn waiting_times(&self) -> Vec<u64> {
        self.outcomes.iter().map(|o| o.waiting_time).collect()
    }

    /// Pids in the order they were given the CPU (repeats for preemption)
    pub fn dispatch_order(&self) -> Vec<Pid> {
        self.timeline
            .iter()
            .filter_map(|e| match e {
                TimelineEvent::Dispatch { pid, .. } => Some(*pid),
                _ => None,
            })
            .collect()
    }
}

/// Run `policy` over validated `processes` (indexed by pid)
///
/// Loop: select; if nothing is ready advance the clock; otherwise run one
/// step. Ends when every process is finished. Empty input returns at once.
#[instrument(skip_all, fields(policy = %policy.kind(), processes = processes.len()))]
pub fn simulate(policy: &mut dyn Policy, processes: &[Process]) -> SimulationReport {
    let mut state = RunState::new(processes);

    while !state.all_done() {
        if let Some(pid) = policy.select_next(processes, &mut state) {
            policy.step(processes, &mut state, pid);
            continue;
        }

        match policy.idle_until(processes, &state) {
            Some(time) if time > state.clock() => state.advance_to(time),
            _ => {
                warn!(
                    clock = state.clock(),
                    unfinished = processes.len() - state.finished(),
                    "No runnable process and no future arrival; stopping"
                );
                break;
            }
        }
    }

    let outcomes = finalize(processes, &state);
    let summary = Summary::from_run(&outcomes, &state);
    info!(
        makespan = summary.makespan,
        avg_waiting = summary.average_waiting,
        avg_turnaround = summary.average_turnaround,
        "Simulation finished"
    );

    SimulationReport {
        policy: policy.kind(),
        outcomes,
        timeline: state.take_timeline().into_events(),
        summary,
    }
}

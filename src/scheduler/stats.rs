/*!
 * Scheduler Statistics
 * Turnaround/waiting finalization and per-run summary metrics
 */

use super::state::RunState;
use crate::core::types::{slot, Pid, Time};
use crate::process::{Process, ProcessOutcome};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Derive turnaround and waiting time for every finished process
///
/// Runs once after the engine loop. Uses the original burst from the input
/// record; the run state's remaining counters are exhausted by now.
/// Unfinished processes are skipped.
pub fn finalize(processes: &[Process], state: &RunState) -> Vec<ProcessOutcome> {
    processes
        .iter()
        .filter_map(|p| {
            let Some(completion) = state.completion(p.pid) else {
                warn!(pid = p.pid, "Process never completed");
                return None;
            };
            let turnaround = completion - p.arrival;
            Some(ProcessOutcome {
                pid: p.pid,
                arrival_time: p.arrival,
                burst_time: p.burst,
                priority: p.priority,
                completion_time: completion,
                turnaround_time: turnaround,
                waiting_time: turnaround - p.burst,
            })
        })
        .collect()
}

/// Aggregate metrics for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub processes: usize,
    pub average_turnaround: f64,
    pub average_waiting: f64,
    /// Final clock value
    pub makespan: Time,
    pub busy_time: Time,
    pub idle_time: Time,
    /// busy / makespan, 0 for an empty run
    pub cpu_utilization: f64,
    pub dispatches: u64,
    pub preemptions: u64,
}

impl Summary {
    pub fn from_run(outcomes: &[ProcessOutcome], state: &RunState) -> Self {
        let count = outcomes.len();
        let average = |total: u128| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        // Per-process times fit in Time; their sum may not
        let total_turnaround: u128 = outcomes.iter().map(|o| o.turnaround_time as u128).sum();
        let total_waiting: u128 = outcomes.iter().map(|o| o.waiting_time as u128).sum();
        let makespan = state.clock();

        Self {
            processes: count,
            average_turnaround: average(total_turnaround),
            average_waiting: average(total_waiting),
            makespan,
            busy_time: state.busy_time(),
            idle_time: state.idle_time(),
            cpu_utilization: if makespan == 0 {
                0.0
            } else {
                state.busy_time() as f64 / makespan as f64
            },
            dispatches: state.dispatches(),
            preemptions: state.preemptions(),
        }
    }
}

/// Outcome for `pid`, if it finished
pub fn outcome_for(outcomes: &[ProcessOutcome], pid: Pid) -> Option<&ProcessOutcome> {
    outcomes
        .get(slot(pid))
        .filter(|o| o.pid == pid)
        .or_else(|| outcomes.iter().find(|o| o.pid == pid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_uses_original_burst() {
        let processes = vec![Process { pid: 0, arrival: 2, burst: 3, priority: 0 }];
        let mut state = RunState::new(&processes);
        state.advance_to(4);
        state.execute(0, 1);
        state.execute(0, 5);

        let outcomes = finalize(&processes, &state);
        assert_eq!(outcomes[0].completion_time, 7);
        assert_eq!(outcomes[0].turnaround_time, 5);
        assert_eq!(outcomes[0].waiting_time, 2);
    }

    #[test]
    fn test_summary_of_empty_run() {
        let state = RunState::new(&[]);
        let summary = Summary::from_run(&[], &state);
        assert_eq!(summary.average_waiting, 0.0);
        assert_eq!(summary.cpu_utilization, 0.0);
        assert_eq!(summary.makespan, 0);
    }
}

/*!
 * Shortest-Job-First
 * Non-preemptive, minimum total burst among arrived processes
 */

use super::idle_target;
use crate::core::types::{slot, Pid, Time};
use crate::process::Process;
use crate::scheduler::state::{RunState, Step};
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{IdleAdvance, SchedulingPolicy};

#[derive(Debug)]
pub struct ShortestJobFirst {
    idle: IdleAdvance,
}

impl ShortestJobFirst {
    pub fn new(idle: IdleAdvance) -> Self {
        Self { idle }
    }
}

impl Policy for ShortestJobFirst {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::Sjf
    }

    fn select_next(&mut self, processes: &[Process], state: &mut RunState) -> Option<Pid> {
        // min_by_key keeps the first minimum, so later equal bursts never win
        state
            .order()
            .iter()
            .map(|pid| &processes[slot(*pid)])
            .filter(|p| state.is_ready(p))
            .min_by_key(|p| p.burst)
            .map(|p| p.pid)
    }

    fn step(&mut self, processes: &[Process], state: &mut RunState, pid: Pid) -> Step {
        state.execute(pid, processes[slot(pid)].burst)
    }

    fn idle_until(&self, processes: &[Process], state: &RunState) -> Option<Time> {
        idle_target(self.idle, processes, state)
    }
}

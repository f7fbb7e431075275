/*!
 * First-Come-First-Served
 * Non-preemptive, strict arrival order
 */

use crate::core::types::{slot, Pid, Time};
use crate::process::Process;
use crate::scheduler::state::{RunState, Step};
use crate::scheduler::traits::Policy;
use crate::scheduler::types::SchedulingPolicy;

/// Walks the arrival-ordered sequence once
#[derive(Debug, Default)]
pub struct FirstComeFirstServed {
    cursor: usize,
}

impl FirstComeFirstServed {
    pub fn new() -> Self {
        Self::default()
    }

    fn head(&self, state: &RunState) -> Option<Pid> {
        state.order().get(self.cursor).copied()
    }
}

impl Policy for FirstComeFirstServed {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    fn select_next(&mut self, processes: &[Process], state: &mut RunState) -> Option<Pid> {
        let pid = self.head(state)?;
        (processes[slot(pid)].arrival <= state.clock()).then_some(pid)
    }

    fn step(&mut self, processes: &[Process], state: &mut RunState, pid: Pid) -> Step {
        self.cursor += 1;
        state.execute(pid, processes[slot(pid)].burst)
    }

    fn idle_until(&self, processes: &[Process], state: &RunState) -> Option<Time> {
        self.head(state).map(|pid| processes[slot(pid)].arrival)
    }
}

/*!
 * Shortest-Remaining-Time-First
 * Preemptive, least remaining work among arrived processes
 */

use crate::core::types::{slot, Pid, Time};
use crate::process::Process;
use crate::scheduler::state::{RunState, Step};
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};

#[derive(Debug)]
pub struct ShortestRemainingTimeFirst {
    quantum: TimeQuantum,
}

impl ShortestRemainingTimeFirst {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }
}

impl Policy for ShortestRemainingTimeFirst {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::Srtf
    }

    fn select_next(&mut self, processes: &[Process], state: &mut RunState) -> Option<Pid> {
        state
            .order()
            .iter()
            .map(|pid| &processes[slot(*pid)])
            .filter(|p| state.is_ready(p))
            .min_by_key(|p| state.remaining(p.pid))
            .map(|p| p.pid)
    }

    fn step(&mut self, _processes: &[Process], state: &mut RunState, pid: Pid) -> Step {
        state.execute(pid, self.quantum.ticks())
    }

    /// Always jumps straight to the next arrival
    fn idle_until(&self, processes: &[Process], state: &RunState) -> Option<Time> {
        state.next_arrival(processes)
    }
}

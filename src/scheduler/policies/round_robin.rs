/*!
 * Round-Robin
 * Preemptive, fixed quantum, cyclic FIFO ready queue
 */

use crate::core::types::{slot, Pid, Time};
use crate::process::Process;
use crate::scheduler::state::{RunState, Step};
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};
use std::collections::VecDeque;

#[derive(Debug)]
pub struct RoundRobin {
    quantum: TimeQuantum,
    queue: VecDeque<Pid>,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
        }
    }

    /// Queue every arrived, unfinished process not already in the system
    ///
    /// The running process keeps its `queued` flag, so it is never admitted
    /// twice and is re-queued only after these arrivals.
    fn admit_arrivals(&mut self, processes: &[Process], state: &mut RunState) {
        for idx in 0..state.order().len() {
            let pid = state.order()[idx];
            if state.is_ready(&processes[slot(pid)]) && !state.is_queued(pid) {
                state.set_queued(pid, true);
                self.queue.push_back(pid);
            }
        }
    }

    pub fn queue(&self) -> &VecDeque<Pid> {
        &self.queue
    }
}

impl Policy for RoundRobin {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    fn select_next(&mut self, processes: &[Process], state: &mut RunState) -> Option<Pid> {
        self.admit_arrivals(processes, state);
        self.queue.pop_front()
    }

    fn step(&mut self, processes: &[Process], state: &mut RunState, pid: Pid) -> Step {
        let step = state.execute(pid, self.quantum.ticks());
        self.admit_arrivals(processes, state);

        if step.completed {
            state.set_queued(pid, false);
        } else {
            self.queue.push_back(pid);
        }
        step
    }

    fn idle_until(&self, processes: &[Process], state: &RunState) -> Option<Time> {
        state.next_arrival(processes)
    }
}

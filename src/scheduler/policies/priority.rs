/*!
 * Priority Scheduling with Aging
 * Non-preemptive, highest priority + age among arrived processes
 */

use super::idle_target;
use crate::core::types::{slot, Pid, Time};
use crate::process::Process;
use crate::scheduler::state::{RunState, Step};
use crate::scheduler::traits::Policy;
use crate::scheduler::types::{AgeIncrement, IdleAdvance, SchedulingPolicy};
use std::cmp::Reverse;
use tracing::trace;

#[derive(Debug)]
pub struct PriorityAging {
    increment: AgeIncrement,
    idle: IdleAdvance,
}

impl PriorityAging {
    pub fn new(increment: AgeIncrement, idle: IdleAdvance) -> Self {
        Self { increment, idle }
    }

    /// Age every process still waiting at the decision boundary
    ///
    /// A process arriving exactly at the boundary is aged too.
    fn age_waiting(&self, processes: &[Process], state: &mut RunState) {
        let step = self.increment.get();
        if step == 0 {
            return;
        }
        for process in processes {
            if state.is_ready(process) {
                let entry = state.slot_mut(process.pid);
                entry.age = entry.age.saturating_add(step);
                trace!(pid = process.pid, age = entry.age, "Aged waiting process");
            }
        }
    }
}

impl Policy for PriorityAging {
    fn kind(&self) -> SchedulingPolicy {
        SchedulingPolicy::Priority
    }

    fn select_next(&mut self, processes: &[Process], state: &mut RunState) -> Option<Pid> {
        // Reverse turns the first maximum into the first minimum
        state
            .order()
            .iter()
            .map(|pid| &processes[slot(*pid)])
            .filter(|p| state.is_ready(p))
            .min_by_key(|p| Reverse(p.priority.saturating_add(state.age(p.pid))))
            .map(|p| p.pid)
    }

    fn step(&mut self, processes: &[Process], state: &mut RunState, pid: Pid) -> Step {
        let step = state.execute(pid, processes[slot(pid)].burst);
        state.slot_mut(pid).age = 0;
        self.age_waiting(processes, state);
        step
    }

    fn idle_until(&self, processes: &[Process], state: &RunState) -> Option<Time> {
        idle_target(self.idle, processes, state)
    }
}

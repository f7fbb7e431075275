/*!
 * Run State
 * Per-run scratch arena indexed by pid, plus the shared execution stepper
 */

use crate::core::types::{slot, Pid, Time};
use crate::monitoring::{Timeline, TimelineEvent};
use crate::process::Process;
use tracing::debug;

/// Mutable bookkeeping for one process during one run
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    pub remaining: Time,
    pub age: i64,
    pub queued: bool,
    pub completion: Option<Time>,
}

/// Result of one execution step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub pid: Pid,
    pub ran: Time,
    pub completed: bool,
}

/// Scratch state owned by a single policy run
///
/// The input process list is never touched; everything the policies consume
/// or destroy (remaining work, age, queue membership) lives here.
#[derive(Debug)]
pub struct RunState {
    clock: Time,
    order: Vec<Pid>,
    slots: Vec<Slot>,
    finished: usize,
    busy: Time,
    idle: Time,
    dispatches: u64,
    preemptions: u64,
    timeline: Timeline,
}

impl RunState {
    /// Fresh state with the scan order sorted by arrival (stable on input order)
    pub fn new(processes: &[Process]) -> Self {
        let mut order: Vec<Pid> = processes.iter().map(|p| p.pid).collect();
        order.sort_by_key(|pid| processes[slot(*pid)].arrival);

        let slots = processes
            .iter()
            .map(|p| Slot {
                remaining: p.burst,
                age: 0,
                queued: false,
                completion: None,
            })
            .collect();

        Self {
            clock: 0,
            order,
            slots,
            finished: 0,
            busy: 0,
            idle: 0,
            dispatches: 0,
            preemptions: 0,
            timeline: Timeline::new(),
        }
    }

    #[inline]
    pub fn clock(&self) -> Time {
        self.clock
    }

    /// Arrival-ordered scan order used for every tie-break
    #[inline]
    pub fn order(&self) -> &[Pid] {
        &self.order
    }

    #[inline]
    pub fn remaining(&self, pid: Pid) -> Time {
        self.slots[slot(pid)].remaining
    }

    #[inline]
    pub fn is_done(&self, pid: Pid) -> bool {
        self.slots[slot(pid)].completion.is_some()
    }

    /// Arrived by the current clock and not yet finished
    #[inline]
    pub fn is_ready(&self, process: &Process) -> bool {
        process.arrival <= self.clock && !self.is_done(process.pid)
    }

    pub fn completion(&self, pid: Pid) -> Option<Time> {
        self.slots[slot(pid)].completion
    }

    pub fn age(&self, pid: Pid) -> i64 {
        self.slots[slot(pid)].age
    }

    pub(crate) fn slot_mut(&mut self, pid: Pid) -> &mut Slot {
        &mut self.slots[slot(pid)]
    }

    pub fn is_queued(&self, pid: Pid) -> bool {
        self.slots[slot(pid)].queued
    }

    pub fn set_queued(&mut self, pid: Pid, queued: bool) {
        self.slots[slot(pid)].queued = queued;
    }

    pub fn all_done(&self) -> bool {
        self.finished == self.slots.len()
    }

    pub fn finished(&self) -> usize {
        self.finished
    }

    /// Earliest arrival strictly after the clock among unfinished processes
    pub fn next_arrival(&self, processes: &[Process]) -> Option<Time> {
        processes
            .iter()
            .filter(|p| p.arrival > self.clock && !self.is_done(p.pid))
            .map(|p| p.arrival)
            .min()
    }

    /// Move the clock forward over an idle gap
    pub fn advance_to(&mut self, time: Time) {
        if time <= self.clock {
            return;
        }
        debug!(from = self.clock, to = time, "CPU idle");
        self.timeline.idle(self.clock, time);
        self.idle += time - self.clock;
        self.clock = time;
    }

    /// Run `pid` for at most `slice` ticks
    ///
    /// Records the completion time when remaining work reaches zero. A
    /// zero-length burst completes immediately at the current clock.
    pub fn execute(&mut self, pid: Pid, slice: Time) -> Step {
        let start = self.clock;
        let entry = &mut self.slots[slot(pid)];
        let ran = entry.remaining.min(slice);
        entry.remaining -= ran;
        let remaining = entry.remaining;

        self.clock += ran;
        self.busy += ran;
        self.dispatches += 1;
        self.timeline.push(TimelineEvent::Dispatch { pid, start, ran });

        let completed = remaining == 0;
        if completed {
            self.slots[slot(pid)].completion = Some(self.clock);
            self.finished += 1;
            self.timeline.push(TimelineEvent::Complete { pid, at: self.clock });
            debug!(pid, start, ran, at = self.clock, "Process completed");
        } else {
            self.preemptions += 1;
            self.timeline.push(TimelineEvent::Preempt {
                pid,
                at: self.clock,
                remaining,
            });
            debug!(pid, start, ran, remaining, "Process preempted");
        }

        Step { pid, ran, completed }
    }

    pub fn busy_time(&self) -> Time {
        self.busy
    }

    pub fn idle_time(&self) -> Time {
        self.idle
    }

    pub fn dispatches(&self) -> u64 {
        self.dispatches
    }

    pub fn preemptions(&self) -> u64 {
        self.preemptions
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub(crate) fn take_timeline(&mut self) -> Timeline {
        std::mem::take(&mut self.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procs(specs: &[(Time, Time)]) -> Vec<Process> {
        specs
            .iter()
            .enumerate()
            .map(|(i, (arrival, burst))| Process {
                pid: i as Pid,
                arrival: *arrival,
                burst: *burst,
                priority: 0,
            })
            .collect()
    }

    #[test]
    fn test_order_is_stable_by_arrival() {
        let processes = procs(&[(3, 1), (0, 1), (3, 1), (0, 1)]);
        let state = RunState::new(&processes);
        assert_eq!(state.order(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_execute_partial_then_complete() {
        let processes = procs(&[(0, 5)]);
        let mut state = RunState::new(&processes);

        let step = state.execute(0, 2);
        assert_eq!(step, Step { pid: 0, ran: 2, completed: false });
        assert_eq!(state.remaining(0), 3);
        assert_eq!(state.preemptions(), 1);

        let step = state.execute(0, 10);
        assert_eq!(step.ran, 3);
        assert!(step.completed);
        assert_eq!(state.completion(0), Some(5));
        assert!(state.all_done());
    }

    #[test]
    fn test_zero_burst_completes_in_place() {
        let processes = procs(&[(4, 0)]);
        let mut state = RunState::new(&processes);
        state.advance_to(4);
        let step = state.execute(0, 2);
        assert_eq!(step.ran, 0);
        assert_eq!(state.completion(0), Some(4));
    }

    #[test]
    fn test_idle_accounting() {
        let processes = procs(&[(3, 1), (7, 1)]);
        let mut state = RunState::new(&processes);
        assert_eq!(state.next_arrival(&processes), Some(3));
        state.advance_to(3);
        state.advance_to(2);
        assert_eq!(state.clock(), 3);
        assert_eq!(state.idle_time(), 3);
        assert_eq!(state.next_arrival(&processes), Some(7));
    }
}

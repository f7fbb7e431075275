/*!
 * Scheduling Policies
 * The five disciplines behind the common Policy trait
 */

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::FirstComeFirstServed;
pub use priority::PriorityAging;
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;
pub use srtf::ShortestRemainingTimeFirst;

use super::state::RunState;
use super::traits::Policy;
use super::types::{IdleAdvance, PolicyParams, SchedulingPolicy};
use crate::core::types::Time;
use crate::process::Process;

/// Instantiate a policy with fresh internal state
pub fn build_policy(kind: SchedulingPolicy, params: &PolicyParams) -> Box<dyn Policy> {
    match kind {
        SchedulingPolicy::Fcfs => Box::new(FirstComeFirstServed::new()),
        SchedulingPolicy::Sjf => Box::new(ShortestJobFirst::new(params.idle_advance)),
        SchedulingPolicy::Priority => {
            Box::new(PriorityAging::new(params.age_increment, params.idle_advance))
        }
        SchedulingPolicy::RoundRobin => Box::new(RoundRobin::new(params.time_quantum)),
        SchedulingPolicy::Srtf => Box::new(ShortestRemainingTimeFirst::new(params.time_quantum)),
    }
}

/// Idle advance for the non-preemptive scanners
///
/// Ticking and jumping reach the same next arrival; ticking just takes
/// more rounds to get there.
pub(super) fn idle_target(
    mode: IdleAdvance,
    processes: &[Process],
    state: &RunState,
) -> Option<Time> {
    let next = state.next_arrival(processes)?;
    match mode {
        IdleAdvance::Tick => Some(state.clock() + 1),
        IdleAdvance::Jump => Some(next),
    }
}

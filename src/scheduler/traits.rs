/*!
 * Scheduler Policy Trait
 * Interface every scheduling discipline implements for the engine loop
 */

use super::state::{RunState, Step};
use super::types::SchedulingPolicy;
use crate::core::types::{Pid, Time};
use crate::process::Process;

/// A scheduling discipline driven by the engine loop
///
/// `processes` is indexed by pid. Implementations keep their own selection
/// and tie-break rule; all timing goes through [`RunState::execute`] and
/// [`RunState::advance_to`].
pub trait Policy {
    /// Which discipline this is
    fn kind(&self) -> SchedulingPolicy;

    /// Pick the next process to run, or `None` if nothing is ready
    fn select_next(&mut self, processes: &[Process], state: &mut RunState) -> Option<Pid>;

    /// Run the selected process for one step and update bookkeeping
    fn step(&mut self, processes: &[Process], state: &mut RunState, pid: Pid) -> Step;

    /// Clock value to advance to when nothing is ready
    ///
    /// `None` means no unfinished process will ever arrive.
    fn idle_until(&self, processes: &[Process], state: &RunState) -> Option<Time>;
}

/*!
 * Timeline Events
 * Observable simulation events returned as data
 */

use crate::core::types::{Pid, Time};
use serde::{Deserialize, Serialize};

/// One entry in a run's timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// CPU idle over `[from, to)`
    Idle { from: Time, to: Time },
    /// Process ran for `ran` ticks starting at `start`
    Dispatch { pid: Pid, start: Time, ran: Time },
    /// Process lost the CPU with work left
    Preempt { pid: Pid, at: Time, remaining: Time },
    /// Process finished
    Complete { pid: Pid, at: Time },
}

/// Append-only event log with idle-gap coalescing
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an idle gap, merging with an immediately preceding one
    pub fn idle(&mut self, from: Time, to: Time) {
        if let Some(TimelineEvent::Idle { to: end, .. }) = self.events.last_mut() {
            if *end == from {
                *end = to;
                return;
            }
        }
        self.events.push(TimelineEvent::Idle { from, to });
    }

    pub fn push(&mut self, event: TimelineEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TimelineEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_gaps_coalesce() {
        let mut timeline = Timeline::new();
        timeline.idle(0, 1);
        timeline.idle(1, 2);
        timeline.idle(2, 5);
        assert_eq!(timeline.events(), &[TimelineEvent::Idle { from: 0, to: 5 }]);
    }

    #[test]
    fn test_separate_gaps_stay_separate() {
        let mut timeline = Timeline::new();
        timeline.idle(0, 2);
        timeline.push(TimelineEvent::Dispatch { pid: 0, start: 2, ran: 1 });
        timeline.idle(3, 4);
        assert_eq!(timeline.events().len(), 3);
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&TimelineEvent::Complete { pid: 2, at: 9 }).unwrap();
        assert_eq!(json, r#"{"event":"complete","pid":2,"at":9}"#);
    }
}

/*!
 * Workload Validation
 * Reject malformed process descriptors before any simulation starts
 */

use super::types::{Process, ProcessSpec};
use crate::core::errors::SimError;
use crate::core::limits::MAX_WORKLOAD_PROCESSES;
use crate::core::types::{Pid, SimResult, Time};
use tracing::warn;

/// Validate a workload and assign pids in input order
pub fn validate_workload(specs: &[ProcessSpec]) -> SimResult<Vec<Process>> {
    if specs.len() > MAX_WORKLOAD_PROCESSES {
        return Err(SimError::WorkloadTooLarge {
            count: specs.len(),
            limit: MAX_WORKLOAD_PROCESSES,
        });
    }

    let processes = specs
        .iter()
        .enumerate()
        .map(|(idx, spec)| validate_process(idx as Pid, spec))
        .collect::<SimResult<Vec<_>>>()?;

    check_horizon(&processes)?;
    Ok(processes)
}

/// The clock never passes the latest arrival plus the total burst
fn check_horizon(processes: &[Process]) -> SimResult<()> {
    let mut latest: Time = 0;
    let mut total: Time = 0;

    for process in processes {
        latest = latest.max(process.arrival);
        total = total
            .checked_add(process.burst)
            .and_then(|sum| latest.checked_add(sum).map(|_| sum))
            .ok_or_else(|| {
                warn!(pid = process.pid, "Rejecting workload whose timeline overflows");
                SimError::TimeOverflow { pid: process.pid }
            })?;
    }
    Ok(())
}

fn validate_process(pid: Pid, spec: &ProcessSpec) -> SimResult<Process> {
    let arrival = u64::try_from(spec.arrival_time).map_err(|_| {
        warn!(pid, arrival = spec.arrival_time, "Rejecting negative arrival time");
        SimError::NegativeArrival {
            pid,
            value: spec.arrival_time,
        }
    })?;

    let burst = u64::try_from(spec.burst_time).map_err(|_| {
        warn!(pid, burst = spec.burst_time, "Rejecting negative burst time");
        SimError::NegativeBurst {
            pid,
            value: spec.burst_time,
        }
    })?;

    Ok(Process {
        pid,
        arrival,
        burst,
        priority: spec.priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigns_pids_in_input_order() {
        let procs = validate_workload(&[ProcessSpec::new(4, 1), ProcessSpec::new(0, 2)]).unwrap();
        assert_eq!(procs[0].pid(), 0);
        assert_eq!(procs[0].arrival(), 4);
        assert_eq!(procs[1].pid(), 1);
        assert_eq!(procs[1].burst(), 2);
    }

    #[test]
    fn test_rejects_negative_arrival() {
        let err = validate_workload(&[ProcessSpec::new(0, 1), ProcessSpec::new(-1, 3)]).unwrap_err();
        assert_eq!(err, SimError::NegativeArrival { pid: 1, value: -1 });
    }

    #[test]
    fn test_rejects_negative_burst() {
        let err = validate_workload(&[ProcessSpec::new(2, -5)]).unwrap_err();
        assert_eq!(err, SimError::NegativeBurst { pid: 0, value: -5 });
    }

    #[test]
    fn test_rejects_overflowing_timeline() {
        let err = validate_workload(&[ProcessSpec::new(0, i64::MAX); 3]).unwrap_err();
        assert_eq!(err, SimError::TimeOverflow { pid: 2 });

        let late = ProcessSpec::new(i64::MAX, i64::MAX);
        let err = validate_workload(&[late, ProcessSpec::new(0, i64::MAX)]).unwrap_err();
        assert_eq!(err, SimError::TimeOverflow { pid: 1 });
    }

    #[test]
    fn test_accepts_timeline_at_clock_limit() {
        let procs = validate_workload(&[ProcessSpec::new(0, i64::MAX); 2]).unwrap();
        assert_eq!(procs.len(), 2);
    }

    #[test]
    fn test_empty_and_zero_burst_are_valid() {
        assert!(validate_workload(&[]).unwrap().is_empty());
        assert_eq!(validate_workload(&[ProcessSpec::new(0, 0)]).unwrap()[0].burst(), 0);
    }
}

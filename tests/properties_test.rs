/*!
 * Scheduler Property Tests
 * Timing arithmetic and conservation invariants across all policies
 */

use cpu_sched_sim::scheduler::{IdleAdvance, SchedulingPolicy, Simulator};
use cpu_sched_sim::{ProcessSpec, SimulationReport};
use proptest::prelude::*;

fn workloads() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..30, 0i64..10, -5i64..5), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .map(|(arrival, burst, priority)| ProcessSpec::new(arrival, burst).with_priority(priority))
            .collect()
    })
}

fn run_all(specs: &[ProcessSpec], quantum: i64, age: i64, idle: IdleAdvance) -> Vec<SimulationReport> {
    Simulator::builder()
        .with_time_quantum(quantum)
        .with_age_increment(age)
        .with_idle_advance(idle)
        .build()
        .unwrap()
        .run_all(specs)
        .unwrap()
}

proptest! {
    #[test]
    fn prop_timing_arithmetic_holds(specs in workloads(), quantum in 1i64..5, age in 0i64..3) {
        for report in run_all(&specs, quantum, age, IdleAdvance::Tick) {
            prop_assert_eq!(report.outcomes.len(), specs.len());
            for (o, spec) in report.outcomes.iter().zip(&specs) {
                prop_assert_eq!(o.arrival_time as i64, spec.arrival_time);
                prop_assert_eq!(o.burst_time as i64, spec.burst_time);
                prop_assert_eq!(o.turnaround_time, o.completion_time - o.arrival_time);
                prop_assert_eq!(o.waiting_time, o.turnaround_time - o.burst_time);
                prop_assert!(o.completion_time >= o.arrival_time + o.burst_time);
            }
        }
    }

    #[test]
    fn prop_busy_time_is_conserved(specs in workloads(), quantum in 1i64..5) {
        let total_burst: u64 = specs.iter().map(|s| s.burst_time as u64).sum();
        for report in run_all(&specs, quantum, 1, IdleAdvance::Jump) {
            let s = report.summary;
            prop_assert_eq!(s.busy_time, total_burst, "{}", report.policy);
            prop_assert_eq!(s.busy_time + s.idle_time, s.makespan, "{}", report.policy);
        }
    }

    #[test]
    fn prop_idle_tick_matches_jump(specs in workloads(), age in 0i64..3) {
        let tick = run_all(&specs, 2, age, IdleAdvance::Tick);
        let jump = run_all(&specs, 2, age, IdleAdvance::Jump);
        for (t, j) in tick.iter().zip(&jump) {
            prop_assert_eq!(t.completion_times(), j.completion_times(), "{}", t.policy);
        }
    }

    #[test]
    fn prop_non_preemptive_policies_never_preempt(specs in workloads()) {
        for report in run_all(&specs, 1, 1, IdleAdvance::Jump) {
            if !report.policy.is_preemptive() {
                prop_assert_eq!(report.summary.preemptions, 0, "{}", report.policy);
                prop_assert_eq!(report.summary.dispatches, specs.len() as u64);
            }
        }
    }

    #[test]
    fn prop_fcfs_completes_in_arrival_order(specs in workloads()) {
        let report = Simulator::new().run(SchedulingPolicy::Fcfs, &specs).unwrap();
        let mut by_arrival: Vec<_> = report.outcomes.clone();
        by_arrival.sort_by_key(|o| (o.arrival_time, o.pid));
        for pair in by_arrival.windows(2) {
            prop_assert!(pair[0].completion_time <= pair[1].completion_time);
        }
    }
}

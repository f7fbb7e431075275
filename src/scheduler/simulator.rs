/*!
 * Simulator
 * Validated entry point: workload in, one report per policy out
 */

use super::engine::{simulate, SimulationReport};
use super::policies::build_policy;
use super::types::{AgeIncrement, IdleAdvance, PolicyParams, SchedulingPolicy, TimeQuantum};
use crate::core::types::SimResult;
use crate::process::{validate_workload, Process, ProcessSpec};
use tracing::info;

/// Configured simulator
///
/// Every run builds a fresh policy and a fresh run state, so one workload can
/// be replayed under several policies without any state leaking between them.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: PolicyParams,
    policies: Vec<SchedulingPolicy>,
}

impl Simulator {
    /// Simulator with default parameters and all five policies
    pub fn new() -> Self {
        Self::with_params(PolicyParams::default())
    }

    pub fn with_params(params: PolicyParams) -> Self {
        Self {
            params,
            policies: SchedulingPolicy::ALL.to_vec(),
        }
    }

    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    pub fn params(&self) -> &PolicyParams {
        &self.params
    }

    pub fn policies(&self) -> &[SchedulingPolicy] {
        &self.policies
    }

    /// Validate `specs` and run one policy
    pub fn run(&self, policy: SchedulingPolicy, specs: &[ProcessSpec]) -> SimResult<SimulationReport> {
        let processes = validate_workload(specs)?;
        Ok(self.run_validated(policy, &processes))
    }

    /// Run one policy on the output of [`validate_workload`]
    pub fn run_validated(&self, policy: SchedulingPolicy, processes: &[Process]) -> SimulationReport {
        let mut engine = build_policy(policy, &self.params);
        simulate(engine.as_mut(), processes)
    }

    /// Validate once, then run every configured policy on independent state
    pub fn run_all(&self, specs: &[ProcessSpec]) -> SimResult<Vec<SimulationReport>> {
        let processes = validate_workload(specs)?;
        info!(
            processes = processes.len(),
            policies = self.policies.len(),
            "Running workload under all configured policies"
        );
        Ok(self
            .policies
            .iter()
            .map(|policy| self.run_validated(*policy, &processes))
            .collect())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Simulator`]
///
/// Raw values are validated in [`SimulatorBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SimulatorBuilder {
    time_quantum: Option<i64>,
    age_increment: Option<i64>,
    idle_advance: IdleAdvance,
    policies: Option<Vec<SchedulingPolicy>>,
}

impl SimulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantum for Round-Robin and SRTF
    pub fn with_time_quantum(mut self, ticks: i64) -> Self {
        self.time_quantum = Some(ticks);
        self
    }

    /// Aging step for Priority scheduling
    pub fn with_age_increment(mut self, step: i64) -> Self {
        self.age_increment = Some(step);
        self
    }

    /// Idle advance for SJF and Priority
    pub fn with_idle_advance(mut self, idle: IdleAdvance) -> Self {
        self.idle_advance = idle;
        self
    }

    /// Restrict `run_all` to these policies
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = SchedulingPolicy>) -> Self {
        self.policies = Some(policies.into_iter().collect());
        self
    }

    pub fn build(self) -> SimResult<Simulator> {
        let time_quantum = self
            .time_quantum
            .map(TimeQuantum::new)
            .transpose()?
            .unwrap_or_default();
        let age_increment = self
            .age_increment
            .map(AgeIncrement::new)
            .transpose()?
            .unwrap_or_default();

        Ok(Simulator {
            params: PolicyParams {
                time_quantum,
                age_increment,
                idle_advance: self.idle_advance,
            },
            policies: self
                .policies
                .unwrap_or_else(|| SchedulingPolicy::ALL.to_vec()),
        })
    }
}

/*!
 * Simulator Configuration
 * Workload files and SIM_* environment overrides
 */

use crate::core::errors::SimError;
use crate::core::limits::{DEFAULT_AGE_INCREMENT, DEFAULT_TIME_QUANTUM};
use crate::core::types::SimResult;
use crate::process::ProcessSpec;
use crate::scheduler::{IdleAdvance, SchedulingPolicy, Simulator};
use serde::{Deserialize, Serialize};

/// Report presentation for the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Full run configuration
///
/// Numeric knobs stay raw here; range checks happen when the simulator is
/// built so every source reports the same typed errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimConfig {
    pub processes: Vec<ProcessSpec>,
    pub time_quantum: i64,
    pub age_increment: i64,
    pub idle_advance: IdleAdvance,
    pub policies: Vec<SchedulingPolicy>,
    pub output: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            processes: Vec::new(),
            time_quantum: DEFAULT_TIME_QUANTUM as i64,
            age_increment: DEFAULT_AGE_INCREMENT,
            idle_advance: IdleAdvance::default(),
            policies: SchedulingPolicy::ALL.to_vec(),
            output: OutputFormat::default(),
        }
    }
}

impl SimConfig {
    /// Parse a workload file
    ///
    /// Accepts either a full config object or a bare array of processes.
    pub fn from_json(json: &str) -> SimResult<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Workload {
            Full(SimConfig),
            Bare(Vec<ProcessSpec>),
        }

        match serde_json::from_str(json) {
            Ok(Workload::Full(config)) => Ok(config),
            Ok(Workload::Bare(processes)) => Ok(Self {
                processes,
                ..Self::default()
            }),
            Err(e) => Err(SimError::InvalidConfig(e.to_string())),
        }
    }

    /// Apply SIM_* overrides from the process environment
    pub fn with_env_overrides(self) -> SimResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Keys: SIM_POLICY (comma list or `all`), SIM_TIME_QUANTUM,
    /// SIM_AGE_INCREMENT, SIM_IDLE_ADVANCE, SIM_OUTPUT_JSON.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> SimResult<Self> {
        if let Some(value) = lookup("SIM_POLICY") {
            self.policies = parse_policies(&value)?;
        }
        if let Some(value) = lookup("SIM_TIME_QUANTUM") {
            self.time_quantum = parse_int("SIM_TIME_QUANTUM", &value)?;
        }
        if let Some(value) = lookup("SIM_AGE_INCREMENT") {
            self.age_increment = parse_int("SIM_AGE_INCREMENT", &value)?;
        }
        if let Some(value) = lookup("SIM_IDLE_ADVANCE") {
            self.idle_advance = value.parse()?;
        }
        if let Some(value) = lookup("SIM_OUTPUT_JSON") {
            if value == "1" || value == "true" {
                self.output = OutputFormat::Json;
            }
        }
        Ok(self)
    }

    /// Build a validated simulator from this configuration
    pub fn simulator(&self) -> SimResult<Simulator> {
        Simulator::builder()
            .with_time_quantum(self.time_quantum)
            .with_age_increment(self.age_increment)
            .with_idle_advance(self.idle_advance)
            .with_policies(self.policies.iter().copied())
            .build()
    }
}

fn parse_policies(value: &str) -> SimResult<Vec<SchedulingPolicy>> {
    if value.trim().eq_ignore_ascii_case("all") {
        return Ok(SchedulingPolicy::ALL.to_vec());
    }
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

fn parse_int(key: &str, value: &str) -> SimResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| SimError::InvalidConfig(format!("{key} must be an integer, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_full_config_file() {
        let config = SimConfig::from_json(
            r#"{
                "processes": [{"arrival_time": 0, "burst_time": 3, "priority": 2}],
                "time_quantum": 4,
                "policies": ["rr", "srtf"],
                "idle_advance": "jump"
            }"#,
        )
        .unwrap();

        assert_eq!(config.processes, vec![ProcessSpec::new(0, 3).with_priority(2)]);
        assert_eq!(config.time_quantum, 4);
        assert_eq!(config.age_increment, DEFAULT_AGE_INCREMENT);
        assert_eq!(config.idle_advance, IdleAdvance::Jump);
        assert_eq!(
            config.policies,
            vec![SchedulingPolicy::RoundRobin, SchedulingPolicy::Srtf]
        );
    }

    #[test]
    fn test_bare_process_array() {
        let config =
            SimConfig::from_json(r#"[{"arrival_time": 1, "burst_time": 2}]"#).unwrap();
        assert_eq!(config.processes, vec![ProcessSpec::new(1, 2)]);
        assert_eq!(config.policies.len(), 5);
    }

    #[test]
    fn test_malformed_file() {
        assert!(matches!(
            SimConfig::from_json("{not json"),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SIM_POLICY", "fcfs, sjf"),
            ("SIM_TIME_QUANTUM", "3"),
            ("SIM_OUTPUT_JSON", "1"),
        ]
        .into_iter()
        .collect();

        let config = SimConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.policies, vec![SchedulingPolicy::Fcfs, SchedulingPolicy::Sjf]);
        assert_eq!(config.time_quantum, 3);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_overrides() {
        let bad_policy = SimConfig::default().with_overrides(|key| {
            (key == "SIM_POLICY").then(|| "lottery".to_string())
        });
        assert_eq!(bad_policy.unwrap_err(), SimError::InvalidPolicy("lottery".into()));

        let bad_quantum = SimConfig::default()
            .with_overrides(|key| (key == "SIM_TIME_QUANTUM").then(|| "x".to_string()));
        assert!(matches!(bad_quantum, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_quantum_rejected_at_build() {
        let config = SimConfig {
            time_quantum: 0,
            ..SimConfig::default()
        };
        assert_eq!(config.simulator().unwrap_err(), SimError::InvalidQuantum(0));
    }
}

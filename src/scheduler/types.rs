/*!
 * Scheduler Types
 * Policy selection and validated policy parameters
 */

use crate::core::errors::SimError;
use crate::core::limits::{DEFAULT_AGE_INCREMENT, DEFAULT_TIME_QUANTUM};
use crate::core::types::{SimResult, Time};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-Come-First-Served (non-preemptive, arrival order)
    Fcfs,
    /// Shortest-Job-First (non-preemptive, shortest total burst)
    Sjf,
    /// Priority with aging (non-preemptive, highest priority + age)
    Priority,
    /// Round-Robin (preemptive, fixed quantum, cyclic queue)
    RoundRobin,
    /// Shortest-Remaining-Time-First (preemptive, least remaining work)
    Srtf,
}

impl SchedulingPolicy {
    /// Every policy, in presentation order
    pub const ALL: [SchedulingPolicy; 5] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Priority,
        Self::RoundRobin,
        Self::Srtf,
    ];

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
            Self::Srtf => "srtf",
        }
    }

    /// Whether a running process can be interrupted before its burst ends
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin | Self::Srtf)
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "priority" | "prio" | "ps" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "srtf" | "srf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            _ => Err(SimError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Time quantum for preemptive policies (at least one tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Time);

impl TimeQuantum {
    pub fn new(ticks: i64) -> SimResult<Self> {
        match u64::try_from(ticks) {
            Ok(t) if t > 0 => Ok(Self(t)),
            _ => Err(SimError::InvalidQuantum(ticks)),
        }
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Time {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_TIME_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Priority boost applied to each waiting process per decision round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AgeIncrement(i64);

impl AgeIncrement {
    pub fn new(step: i64) -> SimResult<Self> {
        if step < 0 {
            return Err(SimError::InvalidAgeIncrement(step));
        }
        Ok(Self(step))
    }

    #[inline(always)]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl Default for AgeIncrement {
    fn default() -> Self {
        Self(DEFAULT_AGE_INCREMENT)
    }
}

impl<'de> Deserialize<'de> for AgeIncrement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let step = i64::deserialize(deserializer)?;
        Self::new(step).map_err(serde::de::Error::custom)
    }
}

/// How non-preemptive policies move the clock when nothing is ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleAdvance {
    /// Advance one tick and re-check
    Tick,
    /// Jump straight to the next arrival
    #[default]
    Jump,
}

impl FromStr for IdleAdvance {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tick" | "unit" => Ok(Self::Tick),
            "jump" => Ok(Self::Jump),
            _ => Err(SimError::InvalidIdleAdvance(s.to_string())),
        }
    }
}

/// Validated parameters shared by every policy run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyParams {
    #[serde(default)]
    pub time_quantum: TimeQuantum,
    #[serde(default)]
    pub age_increment: AgeIncrement,
    #[serde(default)]
    pub idle_advance: IdleAdvance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("fcfs".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Fcfs);
        assert_eq!("SJF".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Sjf);
        assert_eq!("rr".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::RoundRobin);
        assert_eq!("srf".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Srtf);
        assert!("lottery".parse::<SchedulingPolicy>().is_err());
    }

    #[test]
    fn test_policy_round_trips_through_str() {
        for policy in SchedulingPolicy::ALL {
            assert_eq!(policy.as_str().parse::<SchedulingPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_quantum_validation() {
        assert_eq!(TimeQuantum::new(0), Err(SimError::InvalidQuantum(0)));
        assert_eq!(TimeQuantum::new(-3), Err(SimError::InvalidQuantum(-3)));
        assert_eq!(TimeQuantum::new(4).unwrap().ticks(), 4);
        assert!(serde_json::from_str::<TimeQuantum>("0").is_err());
    }

    #[test]
    fn test_age_increment_validation() {
        assert!(AgeIncrement::new(-1).is_err());
        assert_eq!(AgeIncrement::new(0).unwrap().get(), 0);
    }

    #[test]
    fn test_params_defaults_from_json() {
        let params: PolicyParams = serde_json::from_str(r#"{"time_quantum": 3}"#).unwrap();
        assert_eq!(params.time_quantum.ticks(), 3);
        assert_eq!(params.age_increment, AgeIncrement::default());
        assert_eq!(params.idle_advance, IdleAdvance::Jump);
    }
}

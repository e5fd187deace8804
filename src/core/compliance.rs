//! Break-time compliance for agents.

use crate::models::agent::{AgentActivity, ComplianceStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum seconds allowed per break kind over the reported period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakLimits {
    pub lunch_secs: i64,
    pub rest_secs: i64,
    pub bathroom_secs: i64,
}

impl Default for BreakLimits {
    fn default() -> Self {
        Self {
            lunch_secs: 3600,
            rest_secs: 600,
            bathroom_secs: 900,
        }
    }
}

impl BreakLimits {
    /// Limits of every rule whose keyword appears in the break name
    /// (case-insensitive), in lunch, rest, bathroom order. Empty when the
    /// break is unregulated.
    pub fn limits_for(&self, break_name: &str) -> Vec<i64> {
        let name = break_name.to_lowercase();
        [
            ("almuerzo", self.lunch_secs),
            ("descanso", self.rest_secs),
            ("ba", self.bathroom_secs),
        ]
        .into_iter()
        .filter(|(keyword, _)| name.contains(*keyword))
        .map(|(_, limit)| limit)
        .collect()
    }

    /// A break is non-compliant as soon as any matching rule is exceeded.
    pub fn classify(&self, break_name: Option<&str>, break_secs: i64) -> ComplianceStatus {
        match break_name {
            None => ComplianceStatus::Work,
            Some(name) if self.limits_for(name).iter().any(|limit| break_secs > *limit) => {
                ComplianceStatus::NonCompliant
            }
            Some(_) => ComplianceStatus::Compliant,
        }
    }
}

/// Status counts shown under the agent sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub agents: usize,
    pub working: usize,
    pub compliant: usize,
    pub non_compliant: usize,
}

impl ComplianceSummary {
    pub fn from_rows(rows: &[AgentActivity]) -> Self {
        let agents: BTreeSet<&str> = rows.iter().map(|r| r.agent.as_str()).collect();
        let count = |s: ComplianceStatus| rows.iter().filter(|r| r.status == s).count();
        Self {
            agents: agents.len(),
            working: count(ComplianceStatus::Work),
            compliant: count(ComplianceStatus::Compliant),
            non_compliant: count(ComplianceStatus::NonCompliant),
        }
    }
}

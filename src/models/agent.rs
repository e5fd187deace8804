//! Agent login/break activity, one row per (agent, break type).

use serde::Serialize;
use std::fmt;

/// Label used for time logged outside any break.
pub const NO_BREAK: &str = "SIN PAUSA";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplianceStatus {
    #[serde(rename = "TRABAJO")]
    Work,
    #[serde(rename = "CUMPLE")]
    Compliant,
    #[serde(rename = "INCUMPLE")]
    NonCompliant,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Work => "TRABAJO",
            ComplianceStatus::Compliant => "CUMPLE",
            ComplianceStatus::NonCompliant => "INCUMPLE",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AgentActivity {
    #[serde(rename = "agente")]
    pub agent: String,
    #[serde(rename = "tiempo_logueado")]
    pub logged_secs: i64,
    #[serde(rename = "tiempo_activo")]
    pub active_secs: i64,
    #[serde(rename = "tipo_pausa")]
    pub break_type: String,
    #[serde(rename = "tiempo_pausa")]
    pub break_secs: i64,
    #[serde(rename = "estado")]
    pub status: ComplianceStatus,
}

impl AgentActivity {
    pub fn has_break(&self) -> bool {
        self.break_type != NO_BREAK
    }
}

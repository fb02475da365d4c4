use std::fmt;

/// Protocol risk tier assigned to a patient.
///
/// Tiers are totally ordered by severity (`Low < Intermediate < High`) so
/// escalation comparisons read naturally, although the protocol rules only
/// ever branch on "is high".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RiskLevel {
    Low,
    Intermediate,
    High,
}

impl RiskLevel {
    /// Display name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low risk",
            RiskLevel::Intermediate => "intermediate risk",
            RiskLevel::High => "high risk",
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

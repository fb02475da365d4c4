// Risk classification rules.
//
// The protocol is an ordered rule list, first match wins. The WBC rules are
// checked before the marker rules: a hyperleukocytic presentation overrides
// the marker-implied tier entirely, and with WBC below threshold a high-risk
// marker outranks a co-occurring low-risk one.

use amlpath_model::{MarkerLookup, PatientRecord, RiskLevel};

/// WBC count at or above this (10^9/L) triggers the hyperleukocytosis rules.
pub const WBC_HIGH_RISK_THRESHOLD: f64 = 100.0;

/// MRD after Induction I at or above this percentage is an inadequate
/// response and escalates the Induction II regimen.
pub const MRD1_POOR_RESPONSE_THRESHOLD: f64 = 1.0;

/// MRD after Induction II at or above this percentage is MRD-positive and
/// forces the final risk tier to high.
pub const MRD2_POSITIVE_THRESHOLD: f64 = 0.1;

fn has_marker_with_risk(record: &PatientRecord, lookup: &dyn MarkerLookup, risk: RiskLevel) -> bool {
    record
        .markers
        .iter()
        .any(|id| lookup.marker(id).is_some_and(|m| m.default_risk == risk))
}

/// Risk tier at diagnosis, before any MRD results.
///
/// Marker ids not present in `lookup` match no rule and fall through to the
/// default bucket; the function is total over any record.
pub fn classify_initial_risk(record: &PatientRecord, lookup: &dyn MarkerLookup) -> RiskLevel {
    let has_high = has_marker_with_risk(record, lookup, RiskLevel::High);
    let has_low = has_marker_with_risk(record, lookup, RiskLevel::Low);

    if record.wbc >= WBC_HIGH_RISK_THRESHOLD {
        if has_low {
            log::debug!(
                "wbc {} >= {} with low-risk marker: intermediate",
                record.wbc,
                WBC_HIGH_RISK_THRESHOLD
            );
            return RiskLevel::Intermediate;
        }
        log::debug!(
            "wbc {} >= {} without low-risk marker: high",
            record.wbc,
            WBC_HIGH_RISK_THRESHOLD
        );
        return RiskLevel::High;
    }

    if has_high {
        log::debug!("high-risk marker selected: high");
        RiskLevel::High
    } else if has_low {
        log::debug!("low-risk marker selected: low");
        RiskLevel::Low
    } else {
        log::debug!("no tier-defining marker: intermediate (others)");
        RiskLevel::Intermediate
    }
}

/// Final risk tier after Induction II.
///
/// An MRD-positive result (>= 0.1%) overrides the initial tier to high; an
/// absent or negative result leaves it unchanged. `mrd1` never feeds into
/// the tier, only into the Induction II narrative.
pub fn classify_final_risk(initial: RiskLevel, mrd2: Option<f64>) -> RiskLevel {
    match mrd2 {
        Some(v) if v >= MRD2_POSITIVE_THRESHOLD => {
            log::debug!("mrd2 {v}% >= {MRD2_POSITIVE_THRESHOLD}%: escalating to high");
            RiskLevel::High
        }
        _ => initial,
    }
}

/// Response assessment after Induction I.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InductionResponse {
    /// MRD < 1%.
    Good,
    /// MRD >= 1%; the Induction II regimen is escalated.
    Inadequate,
}

impl InductionResponse {
    pub fn label(&self) -> &'static str {
        match self {
            InductionResponse::Good => "response: < 1% (good)",
            InductionResponse::Inadequate => "response: >= 1% (inadequate)",
        }
    }
}

/// MRD status after Induction II.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MrdStatus {
    /// MRD < 0.1%.
    Negative,
    /// MRD >= 0.1%; final risk escalates to high.
    Positive,
}

impl MrdStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MrdStatus::Negative => "result: MRD negative",
            MrdStatus::Positive => "result: MRD positive (risk escalates to high)",
        }
    }
}

pub fn assess_induction_i(mrd1: f64) -> InductionResponse {
    if mrd1 >= MRD1_POOR_RESPONSE_THRESHOLD {
        InductionResponse::Inadequate
    } else {
        InductionResponse::Good
    }
}

pub fn assess_induction_ii(mrd2: f64) -> MrdStatus {
    if mrd2 >= MRD2_POSITIVE_THRESHOLD {
        MrdStatus::Positive
    } else {
        MrdStatus::Negative
    }
}

// Treatment-pathway selection: induction regimens, consolidation plan, and
// targeted-inhibitor advisories. Pure functions over the record snapshot;
// outputs are display labels for the enclosing shell.

use std::fmt;

use amlpath_model::{PatientRecord, RiskLevel};

use crate::classify::MRD1_POOR_RESPONSE_THRESHOLD;

/// Markers that route Induction I onto the HHT-based HAE regimen.
const HAE_MARKERS: [&str; 3] = ["cbfb_myh11", "kmt2a_mllt11", "kmt2a_mllt3"];

/// Induction regimen family chosen from the diagnostic markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegimenFamily {
    /// Standard-dose cytarabine backbone.
    Dae,
    /// Homoharringtonine-based backbone.
    Hae,
    /// Low-dose backbone with venetoclax.
    MagIdag,
}

impl RegimenFamily {
    /// Short family name, used when composing the Induction II label.
    pub fn family_label(&self) -> &'static str {
        match self {
            RegimenFamily::Dae => "DAE",
            RegimenFamily::Hae => "HAE",
            RegimenFamily::MagIdag => "MAG/IdAG",
        }
    }

    /// Full Induction I display label.
    pub fn label(&self) -> &'static str {
        match self {
            RegimenFamily::Dae => "DAE (standard-dose SDC)",
            RegimenFamily::Hae => "HAE (HHT-based)",
            RegimenFamily::MagIdag => "MAG/IdAG + venetoclax (low-dose LDC)",
        }
    }
}

impl fmt::Display for RegimenFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Induction I regimen from the diagnostic markers, first match wins.
pub fn select_induction_i(record: &PatientRecord) -> RegimenFamily {
    if record.has_marker("runx1_runx1t1") {
        return RegimenFamily::Dae;
    }
    if HAE_MARKERS.iter().any(|id| record.has_marker(id)) {
        return RegimenFamily::Hae;
    }
    RegimenFamily::MagIdag
}

/// Induction II plan: the Induction I family, repeated or escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InductionTwoPlan {
    pub family: RegimenFamily,
    /// True when induction-I MRD was >= 1% and venetoclax is added.
    pub escalated: bool,
}

impl InductionTwoPlan {
    pub fn label(&self) -> String {
        if self.escalated {
            format!("{} + venetoclax (escalated)", self.family.family_label())
        } else {
            format!("{} (standard repeat)", self.family.family_label())
        }
    }

    pub fn note(&self) -> &'static str {
        if self.escalated {
            "targeted agent added because induction-I MRD >= 1%"
        } else {
            "continue as planned"
        }
    }
}

/// Induction II from the induction-I MRD result and regimen family.
pub fn select_induction_ii(mrd1: Option<f64>, family: RegimenFamily) -> InductionTwoPlan {
    let escalated = matches!(mrd1, Some(v) if v >= MRD1_POOR_RESPONSE_THRESHOLD);
    if escalated {
        log::debug!(
            "induction-I MRD >= {MRD1_POOR_RESPONSE_THRESHOLD}%: escalating {} with venetoclax",
            family.family_label()
        );
    }
    InductionTwoPlan { family, escalated }
}

/// Consolidation plan label for a risk tier.
pub fn select_consolidation(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "HA, EA, LA (3 cycles of high-dose cytarabine)",
        RiskLevel::Intermediate => {
            "HA, EA, LA + hematopoietic stem cell transplant (if a suitable donor exists)"
        }
        RiskLevel::High => {
            "HA, EA, LA + mandatory hematopoietic stem cell transplant (FLAG/CLAG salvage if transplant unavailable)"
        }
    }
}

/// Advisory line shown under the consolidation plan.
pub fn consolidation_note(risk: RiskLevel) -> &'static str {
    if risk.is_high() {
        "monitor closely and start transplant planning early"
    } else {
        "continue standard high-dose cytarabine consolidation"
    }
}

/// Targeted-inhibitor advisory raised by a specific marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InhibitorAlert {
    /// FLT3-ITD present.
    Flt3Inhibitor,
    /// KIT exon 17 mutation present.
    KitInhibitor,
}

impl InhibitorAlert {
    pub fn label(&self) -> &'static str {
        match self {
            InhibitorAlert::Flt3Inhibitor => {
                "FLT3-ITD detected: add sorafenib or gilteritinib during induction and consolidation"
            }
            InhibitorAlert::KitInhibitor => {
                "KIT exon 17 mutation detected: consider early addition of avapritinib"
            }
        }
    }
}

impl fmt::Display for InhibitorAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inhibitor advisories for the selected markers. The two alerts are
/// independent and may both fire.
pub fn inhibitor_alerts(record: &PatientRecord) -> Vec<InhibitorAlert> {
    let mut alerts = Vec::new();
    if record.has_marker("flt3_itd") {
        alerts.push(InhibitorAlert::Flt3Inhibitor);
    }
    if record.has_marker("kit_exon_17") {
        alerts.push(InhibitorAlert::KitInhibitor);
    }
    alerts
}

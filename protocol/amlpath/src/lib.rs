use std::fmt::Write as _;

use amlpath_catalog::catalog;
use amlpath_engine::{
    assess_induction_i, assess_induction_ii, classify_final_risk, classify_initial_risk,
    consolidation_note, inhibitor_alerts, select_consolidation, select_induction_i,
    select_induction_ii,
};
use amlpath_model::{PatientRecord, RiskLevel, Validatable, ValidationError};
use serde::Serialize;

/// One recorded MRD percentage with its protocol assessment line.
#[derive(Debug, Clone, Serialize)]
pub struct MrdReading {
    pub percent: f64,
    pub assessment: String,
}

/// A treatment-phase entry: the regimen label plus an advisory note.
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentStep {
    pub regimen: String,
    pub note: String,
}

/// Full stratification and treatment-pathway report for one patient.
///
/// This is the single output surface: the CLI renders it as text or JSON,
/// and any other shell can do the same.
#[derive(Debug, Clone, Serialize)]
pub struct PathwayReport {
    pub age: u32,
    pub weight: f64,
    pub wbc: f64,
    /// Display labels of the selected markers, in selection order.
    pub markers: Vec<String>,
    pub initial_risk: RiskLevel,
    pub final_risk: RiskLevel,
    pub induction_i: String,
    pub induction_ii: TreatmentStep,
    pub induction_ii_escalated: bool,
    pub consolidation: TreatmentStep,
    pub alerts: Vec<String>,
    pub mrd1: Option<MrdReading>,
    pub mrd2: Option<MrdReading>,
}

/// Validate a patient record against the marker catalog and run the full
/// protocol over it: initial and final risk, induction I/II, consolidation,
/// and inhibitor advisories.
pub fn evaluate(record: &PatientRecord) -> Result<PathwayReport, ValidationError> {
    record.validate_against(catalog())?;

    let initial_risk = classify_initial_risk(record, catalog());
    let final_risk = classify_final_risk(initial_risk, record.mrd2);

    let family = select_induction_i(record);
    let induction_ii = select_induction_ii(record.mrd1, family);

    let markers = record
        .markers
        .iter()
        .filter_map(|id| catalog().get(id))
        .map(|m| m.label.to_string())
        .collect();

    Ok(PathwayReport {
        age: record.age,
        weight: record.weight,
        wbc: record.wbc,
        markers,
        initial_risk,
        final_risk,
        induction_i: family.label().to_string(),
        induction_ii: TreatmentStep {
            regimen: induction_ii.label(),
            note: induction_ii.note().to_string(),
        },
        induction_ii_escalated: induction_ii.escalated,
        consolidation: TreatmentStep {
            regimen: select_consolidation(final_risk).to_string(),
            note: consolidation_note(final_risk).to_string(),
        },
        alerts: inhibitor_alerts(record)
            .into_iter()
            .map(|a| a.label().to_string())
            .collect(),
        mrd1: record.mrd1.map(|v| MrdReading {
            percent: v,
            assessment: assess_induction_i(v).label().to_string(),
        }),
        mrd2: record.mrd2.map(|v| MrdReading {
            percent: v,
            assessment: assess_induction_ii(v).label().to_string(),
        }),
    })
}

impl PathwayReport {
    /// Plain-text rendering of the report for terminal display.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Patient: age {} y, weight {} kg", self.age, self.weight);
        let _ = writeln!(out, "WBC at diagnosis: {} x10^9/L", self.wbc);
        if self.markers.is_empty() {
            let _ = writeln!(out, "Markers: none selected");
        } else {
            let _ = writeln!(out, "Markers: {}", self.markers.join("; "));
        }
        let _ = writeln!(out, "Initial risk: {}", self.initial_risk);
        let _ = writeln!(out, "Final risk:   {}", self.final_risk);
        let _ = writeln!(out);
        let _ = writeln!(out, "Induction I:  {}", self.induction_i);
        if let Some(mrd1) = &self.mrd1 {
            let _ = writeln!(out, "  MRD: {}% ({})", mrd1.percent, mrd1.assessment);
        }
        let _ = writeln!(out, "Induction II: {}", self.induction_ii.regimen);
        let _ = writeln!(out, "  note: {}", self.induction_ii.note);
        if let Some(mrd2) = &self.mrd2 {
            let _ = writeln!(out, "  MRD: {}% ({})", mrd2.percent, mrd2.assessment);
        }
        let _ = writeln!(out, "Consolidation: {}", self.consolidation.regimen);
        let _ = writeln!(out, "  note: {}", self.consolidation.note);
        for alert in &self.alerts {
            let _ = writeln!(out, "ALERT: {alert}");
        }
        out
    }
}

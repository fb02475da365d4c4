// Patient-facing domain types for the GMCAII stratification protocol.

use std::fmt;

use crate::risk::RiskLevel;
use crate::traits::{MarkerLookup, Validatable, ValidationError};

/// Category of a genetic marker in the protocol's reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MarkerCategory {
    FusionGene,
    GeneMutation,
    KaryotypeAbnormality,
}

impl MarkerCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MarkerCategory::FusionGene => "fusion gene",
            MarkerCategory::GeneMutation => "gene mutation",
            MarkerCategory::KaryotypeAbnormality => "karyotype abnormality",
        }
    }
}

impl fmt::Display for MarkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the static genetic-marker reference table.
///
/// Entries are immutable reference data constructed once at startup; patient
/// records refer to them by `id` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneticMarker {
    /// Stable identifier, unique within the catalog (e.g. `flt3_itd`).
    pub id: &'static str,
    /// Human-readable label (e.g. `FLT3-ITD`).
    pub label: &'static str,
    pub category: MarkerCategory,
    /// Risk tier this marker implies at diagnosis, before WBC and MRD rules.
    pub default_risk: RiskLevel,
}

/// A single patient's inputs to the stratification rules.
///
/// Owned and mutated field-by-field by the enclosing shell; the classifier
/// and selector functions take it by shared reference and never store it.
/// `None` MRD values mean "not yet measured", which is distinct from `0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatientRecord {
    /// Age in years.
    pub age: u32,
    /// Body weight in kilograms.
    pub weight: f64,
    /// White blood cell count at diagnosis, in units of 10^9/L.
    pub wbc: f64,
    /// Selected marker ids, in selection order. Must reference catalog entries.
    pub markers: Vec<String>,
    /// Measurable residual disease after Induction I, in percent.
    pub mrd1: Option<f64>,
    /// Measurable residual disease after Induction II, in percent.
    pub mrd2: Option<f64>,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            age: 10,
            weight: 30.0,
            wbc: 5.0,
            markers: Vec::new(),
            mrd1: None,
            mrd2: None,
        }
    }
}

impl PatientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_marker(&self, id: &str) -> bool {
        self.markers.iter().any(|m| m == id)
    }

    /// Select `id` if absent, deselect it if present. Selection order of the
    /// remaining markers is preserved.
    pub fn toggle_marker(&mut self, id: &str) {
        if let Some(pos) = self.markers.iter().position(|m| m == id) {
            self.markers.remove(pos);
        } else {
            self.markers.push(id.to_string());
        }
    }
}

impl Validatable for PatientRecord {
    fn validate_against(&self, lookup: &dyn MarkerLookup) -> Result<(), ValidationError> {
        for (i, id) in self.markers.iter().enumerate() {
            if !lookup.contains(id) {
                return Err(ValidationError::UnknownMarker { id: id.clone() });
            }
            if self.markers[..i].contains(id) {
                return Err(ValidationError::DuplicateMarker { id: id.clone() });
            }
        }
        Ok(())
    }
}

//! Shared fixtures for the amlpath integration tests.

use amlpath_model::PatientRecord;

/// Record with the given WBC and markers, other fields at protocol defaults.
pub fn patient(wbc: f64, markers: &[&str]) -> PatientRecord {
    PatientRecord {
        wbc,
        markers: markers.iter().map(|s| s.to_string()).collect(),
        ..PatientRecord::default()
    }
}

/// Same as [`patient`], with MRD results recorded.
pub fn patient_with_mrd(
    wbc: f64,
    markers: &[&str],
    mrd1: Option<f64>,
    mrd2: Option<f64>,
) -> PatientRecord {
    PatientRecord {
        mrd1,
        mrd2,
        ..patient(wbc, markers)
    }
}

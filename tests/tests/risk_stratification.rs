// End-to-end checks of the stratification rules through the public
// classifier surface, using the real catalog.

use amlpath_catalog::catalog;
use amlpath_engine::{classify_final_risk, classify_initial_risk};
use amlpath_model::RiskLevel;
use pretty_assertions::assert_eq;
use tests::{patient, patient_with_mrd};

#[test]
fn default_form_classifies_as_intermediate() {
    let p = patient(5.0, &[]);
    assert_eq!(p.age, 10);
    assert_eq!(p.weight, 30.0);
    assert_eq!(classify_initial_risk(&p, catalog()), RiskLevel::Intermediate);
}

#[test]
fn every_low_marker_alone_classifies_low_below_wbc_threshold() {
    for id in ["runx1_runx1t1", "cbfb_myh11", "kmt2a_mllt11", "npm1_mut", "cebpa_bzip"] {
        let p = patient(50.0, &[id]);
        assert_eq!(
            classify_initial_risk(&p, catalog()),
            RiskLevel::Low,
            "marker {id} should classify low"
        );
    }
}

#[test]
fn every_high_marker_alone_classifies_high_below_wbc_threshold() {
    for id in [
        "kit_exon_17",
        "flt3_itd",
        "tp53",
        "complex_karyotype",
        "minus_5_7",
        "nup98_re",
        "mecom_re",
        "bcr_abl1",
        "ubtf_itd",
    ] {
        let p = patient(50.0, &[id]);
        assert_eq!(
            classify_initial_risk(&p, catalog()),
            RiskLevel::High,
            "marker {id} should classify high"
        );
    }
}

#[test]
fn wbc_threshold_is_inclusive() {
    assert_eq!(
        classify_initial_risk(&patient(100.0, &[]), catalog()),
        RiskLevel::High
    );
    assert_eq!(
        classify_initial_risk(&patient(99.9, &[]), catalog()),
        RiskLevel::Intermediate
    );
}

#[test]
fn wbc_rule_overrides_marker_tiers_in_both_directions() {
    // Low marker pulls a hyperleukocytic patient up only to intermediate.
    assert_eq!(
        classify_initial_risk(&patient(150.0, &["cbfb_myh11"]), catalog()),
        RiskLevel::Intermediate
    );
    // Even with a high marker alongside, the low marker keeps it intermediate.
    assert_eq!(
        classify_initial_risk(&patient(150.0, &["cbfb_myh11", "tp53"]), catalog()),
        RiskLevel::Intermediate
    );
    // Without a low marker the threshold alone means high.
    assert_eq!(
        classify_initial_risk(&patient(150.0, &["kit_non_17"]), catalog()),
        RiskLevel::High
    );
}

#[test]
fn high_marker_takes_precedence_over_low_below_threshold() {
    let p = patient(20.0, &["npm1_mut", "flt3_itd"]);
    assert_eq!(classify_initial_risk(&p, catalog()), RiskLevel::High);
}

#[test]
fn negative_wbc_flows_through_the_rules_unchecked() {
    // Advisory tool: nonsensical inputs are accepted and classified as given.
    let p = patient(-3.0, &[]);
    assert_eq!(classify_initial_risk(&p, catalog()), RiskLevel::Intermediate);
}

#[test]
fn mrd2_escalation_overrides_even_a_low_initial_tier() {
    let p = patient_with_mrd(50.0, &["runx1_runx1t1"], None, Some(0.15));
    let initial = classify_initial_risk(&p, catalog());
    assert_eq!(initial, RiskLevel::Low);
    assert_eq!(classify_final_risk(initial, p.mrd2), RiskLevel::High);
}

#[test]
fn zero_mrd2_is_a_measurement_not_missing() {
    // Some(0.0) is a negative measurement; None means not yet measured.
    assert_eq!(
        classify_final_risk(RiskLevel::Intermediate, Some(0.0)),
        RiskLevel::Intermediate
    );
    assert_eq!(
        classify_final_risk(RiskLevel::Intermediate, None),
        RiskLevel::Intermediate
    );
}

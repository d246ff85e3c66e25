use ct_injector_roi::roi::{EngineConstants, InvestmentVerdict, VolumePeriod};
use ct_injector_roi::session::{
    compare, lookup, ComparisonInputs, DeviceRole, Session, SessionError,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn default_inputs_match_reference_scenario() {
    let inputs = ComparisonInputs::default();
    assert_eq!(inputs.base_device_id, "Ulrich-CTMotion");
    assert_eq!(inputs.target_device_id, "Bayer-Centargo");
    assert_eq!(inputs.patient_volume, 50.0);
    assert_eq!(inputs.volume_period, VolumePeriod::Daily);
    assert_eq!(inputs.ct_device_count, 1);
    assert_eq!(inputs.enhancement_rate_percent, 60.0);
}

#[test]
fn compare_builds_full_outcome() {
    let outcome = compare(&ComparisonInputs::default(), &EngineConstants::default())
        .expect("valid inputs");
    assert_eq!(outcome.base.id, "Ulrich-CTMotion");
    assert_eq!(outcome.target.id, "Bayer-Centargo");
    assert_close(outcome.result.delta_p, 1464.048, 1e-6);
    assert_close(outcome.revenue.revenue, outcome.result.additional_revenue, 1e-9);
    assert_eq!(outcome.summary.verdict, InvestmentVerdict::Worthwhile);
    assert_eq!(outcome.radar.len(), 6);
    assert_eq!(outcome.parameters.len(), 8);
}

#[test]
fn saved_hours_convert_to_target_exams() {
    let outcome = compare(&ComparisonInputs::default(), &EngineConstants::default())
        .expect("valid inputs");
    assert_close(outcome.summary.monthly_hours_saved, 24.4008, 1e-6);
    // Centargo 검사 5분 기준
    assert_close(outcome.extra_exams, 292.8096, 1e-6);
}

#[test]
fn no_extra_exams_when_target_is_slower() {
    let inputs = ComparisonInputs {
        base_device_id: "Bayer-Centargo".into(),
        target_device_id: "Ulrich-CTMotion".into(),
        ..ComparisonInputs::default()
    };
    let outcome = compare(&inputs, &EngineConstants::default()).expect("valid inputs");
    assert_eq!(outcome.extra_exams, 0.0);
}

#[test]
fn lookup_finds_catalog_device() {
    assert_eq!(
        lookup(DeviceRole::Base, "Bayer-Centargo").unwrap().id,
        "Bayer-Centargo"
    );
    assert_eq!(
        lookup(DeviceRole::Base, "nope").unwrap_err(),
        SessionError::UnknownDevice {
            role: DeviceRole::Base,
            id: "nope".into()
        }
    );
}

#[test]
fn unknown_device_reports_role() {
    let inputs = ComparisonInputs {
        target_device_id: "Acme-Nothing".into(),
        ..ComparisonInputs::default()
    };
    let err = compare(&inputs, &EngineConstants::default()).unwrap_err();
    assert_eq!(
        err,
        SessionError::UnknownDevice {
            role: DeviceRole::Target,
            id: "Acme-Nothing".into()
        }
    );

    let inputs = ComparisonInputs {
        base_device_id: "Acme-Nothing".into(),
        ..ComparisonInputs::default()
    };
    assert!(matches!(
        compare(&inputs, &EngineConstants::default()),
        Err(SessionError::UnknownDevice { role: DeviceRole::Base, .. })
    ));
}

#[test]
fn invalid_inputs_are_rejected() {
    let c = EngineConstants::default();
    let zero = ComparisonInputs {
        patient_volume: 0.0,
        ..ComparisonInputs::default()
    };
    assert_eq!(compare(&zero, &c).unwrap_err(), SessionError::NonPositiveVolume(0.0));

    let nan = ComparisonInputs {
        patient_volume: f64::NAN,
        ..ComparisonInputs::default()
    };
    assert!(matches!(compare(&nan, &c), Err(SessionError::NonPositiveVolume(_))));

    let rate = ComparisonInputs {
        enhancement_rate_percent: 120.0,
        ..ComparisonInputs::default()
    };
    assert_eq!(
        compare(&rate, &c).unwrap_err(),
        SessionError::EnhancementRateOutOfRange(120.0)
    );

    let no_ct = ComparisonInputs {
        ct_device_count: 0,
        ..ComparisonInputs::default()
    };
    assert_eq!(compare(&no_ct, &c).unwrap_err(), SessionError::NoCtDevices);
}

#[test]
fn session_replaces_then_clears_outcome() {
    let mut session = Session::new(ComparisonInputs::default(), EngineConstants::default());
    assert!(session.outcome().is_none());

    let first = session.calculate().expect("first").result;
    session.inputs.patient_volume = 100.0;
    let second = session.calculate().expect("second").result;
    assert_close(second.delta_p, first.delta_p * 2.0, 1e-6);
    assert_eq!(session.outcome().map(|o| o.inputs.patient_volume), Some(100.0));

    session.inputs.target_device_id = "missing".into();
    assert!(session.calculate().is_err());
    assert!(session.outcome().is_none());
}

#[test]
fn session_clear_drops_outcome() {
    let mut session = Session::default();
    session.calculate().expect("defaults are valid");
    session.clear();
    assert!(session.outcome().is_none());
}

#[test]
fn outcome_serializes_to_json() {
    let outcome = compare(&ComparisonInputs::default(), &EngineConstants::default()).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["target"]["id"], "Bayer-Centargo");
    assert_eq!(json["inputs"]["volume_period"], "daily");
    assert_eq!(json["summary"]["verdict"], "worthwhile");
    assert_eq!(json["radar"][0]["subject"], "clinical_accuracy");
}

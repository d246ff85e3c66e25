use ct_injector_roi::device_db::{
    base_device_id, brand_models, device_options, devices, find_device, validate_catalog,
    validate_devices, CatalogError, Device,
};
use ct_injector_roi::roi::parameter_comparison::{compare_parameters, SpecParameter, Trend};
use ct_injector_roi::roi::{build_radar_data, RadarMetric};

#[test]
fn builtin_catalog_is_valid() {
    assert_eq!(devices().len(), 6);
    validate_catalog().expect("catalog valid");
}

#[test]
fn lookup_is_exact_then_case_insensitive() {
    let d = find_device("Bayer-Centargo").expect("exact");
    assert_eq!(d.display_name(), "Bayer Centargo");
    assert_eq!(find_device("bayer-centargo").map(|d| d.id), Some("Bayer-Centargo"));
    assert!(find_device("Unknown-Device").is_none());
    assert!(find_device("").is_none());
}

#[test]
fn base_device_is_first_candidate() {
    assert_eq!(base_device_id(), "Ulrich-CTMotion");
}

#[test]
fn options_and_brands_cover_catalog() {
    let options = device_options();
    assert_eq!(options.len(), devices().len());
    assert!(options
        .iter()
        .any(|o| o.id == "Bayer-Stellant" && o.name == "Bayer Stellant DCE"));

    let brands = brand_models();
    assert_eq!(
        brands.get("Bayer").cloned(),
        Some(vec!["Bayer-Centargo", "Bayer-Stellant"])
    );
    assert_eq!(brands.values().map(Vec::len).sum::<usize>(), 6);
}

#[test]
fn purchase_cost_is_in_whole_units() {
    let d = find_device("Bayer-Centargo").unwrap();
    assert_eq!(d.spec.purchase_cost(), 330_000.0);
}

#[test]
fn validation_rejects_duplicates_and_bad_values() {
    let d = find_device("Bayer-Centargo").unwrap().clone();
    let dup = vec![d.clone(), d.clone()];
    assert_eq!(
        validate_devices(&dup),
        Err(CatalogError::DuplicateId("Bayer-Centargo"))
    );

    let mut bad: Device = d.clone();
    bad.spec.usability = 11.0;
    assert!(matches!(
        validate_devices(&[bad]),
        Err(CatalogError::OutOfRange { field: "usability", .. })
    ));

    let mut free = d;
    free.spec.consumable_cost_per_exam = 0.0;
    assert!(matches!(
        validate_devices(&[free]),
        Err(CatalogError::NonPositive { field: "consumable_cost_per_exam", .. })
    ));
}

#[test]
fn radar_follows_fixed_metric_order() {
    let base = &find_device("Ulrich-CTMotion").unwrap().spec;
    let target = &find_device("Bayer-Centargo").unwrap().spec;
    let radar = build_radar_data(base, target);
    let subjects: Vec<_> = radar.iter().map(|d| d.subject).collect();
    assert_eq!(subjects, RadarMetric::ALL.to_vec());
    assert_eq!(radar[0].target_value, 9.0);
    assert_eq!(radar[0].comparison_value, 7.0);
    assert_eq!(radar[5].target_value, 9.0);
    assert_eq!(radar[5].comparison_value, 7.5);
}

#[test]
fn parameter_rows_mark_better_and_worse() {
    let base = &find_device("Ulrich-CTMotion").unwrap().spec;
    let target = &find_device("Bayer-Centargo").unwrap().spec;
    let rows = compare_parameters(base, target);
    assert_eq!(rows.len(), SpecParameter::ALL.len());

    let row = |p: SpecParameter| rows.iter().find(|r| r.parameter == p).unwrap();
    assert_eq!(row(SpecParameter::ExamDuration).trend, Trend::Better);
    assert_eq!(row(SpecParameter::ExamDuration).difference(), Some(2.0));
    assert_eq!(row(SpecParameter::Depreciation).trend, Trend::Better);
    assert_eq!(row(SpecParameter::ClinicalAccuracy).trend, Trend::Better);
    assert_eq!(row(SpecParameter::InformationSystem).trend, Trend::Equal);
    assert_eq!(row(SpecParameter::SmartProtocol).trend, Trend::Better);
    assert_eq!(row(SpecParameter::SmartProtocol).difference(), None);

    let reversed = compare_parameters(target, base);
    let smart = reversed
        .iter()
        .find(|r| r.parameter == SpecParameter::SmartProtocol)
        .unwrap();
    assert_eq!(smart.trend, Trend::Worse);
}

use ct_injector_roi::device_db::{find_device, DeviceSpecification};
use ct_injector_roi::roi::{
    additional_revenue_breakdown, compute_additional_revenue, compute_comparison,
    compute_contrast_savings, compute_cost_savings, compute_time_savings, extra_ct_exams,
    investment_difference, minutes_saved_per_patient, summarize, ComparisonRequest,
    EngineConstants, InvestmentVerdict, VolumePeriod,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

fn spec(id: &str) -> DeviceSpecification {
    find_device(id).expect("catalog device").spec
}

fn request<'a>(
    base: &'a DeviceSpecification,
    target: &'a DeviceSpecification,
    volume: f64,
    rate: f64,
) -> ComparisonRequest<'a> {
    ComparisonRequest {
        base,
        target,
        patient_volume: volume,
        volume_period: VolumePeriod::Daily,
        ct_device_count: 1,
        enhancement_rate_percent: rate,
    }
}

#[test]
fn minutes_saved_includes_amortized_consumable_change() {
    let c = EngineConstants::default();
    let saved = minutes_saved_per_patient(&spec("Ulrich-CTMotion"), &spec("Bayer-Centargo"), &c);
    assert_close(saved, 2.0 + 1.67 / 50.0, 1e-12);
}

#[test]
fn time_savings_ctmotion_to_centargo() {
    let c = EngineConstants::default();
    let dp = compute_time_savings(
        &spec("Ulrich-CTMotion"),
        &spec("Bayer-Centargo"),
        50.0,
        VolumePeriod::Daily,
        60.0,
        &c,
    );
    assert_close(dp, 1464.048, 1e-6);
}

#[test]
fn time_savings_scale_with_time_value() {
    let c = EngineConstants {
        time_value_per_minute: 2.0,
        ..EngineConstants::default()
    };
    let dp = compute_time_savings(
        &spec("Ulrich-CTMotion"),
        &spec("Bayer-Centargo"),
        50.0,
        VolumePeriod::Daily,
        60.0,
        &c,
    );
    assert_close(dp, 2928.096, 1e-6);
}

#[test]
#[allow(deprecated)]
fn legacy_constants_reproduce_previous_revision() {
    let c = EngineConstants::legacy();
    assert_eq!(c.working_days_per_month, 22);
    let dp = compute_time_savings(
        &spec("Ulrich-CTMotion"),
        &spec("Bayer-Centargo"),
        50.0,
        VolumePeriod::Daily,
        100.0,
        &c,
    );
    assert_close(dp, 4473.48, 1e-6);
}

#[test]
fn slower_target_gives_negative_time_savings() {
    let c = EngineConstants::default();
    let dp = compute_time_savings(
        &spec("Bayer-Centargo"),
        &spec("Medtron-Accutron"),
        30.0,
        VolumePeriod::Daily,
        50.0,
        &c,
    );
    assert!(dp < 0.0);
}

#[test]
fn contrast_savings_for_smart_protocol_target() {
    let c = EngineConstants::default();
    let ml = compute_contrast_savings(
        &spec("Ulrich-CTMotion"),
        &spec("Bayer-Centargo"),
        50.0,
        VolumePeriod::Daily,
        &c,
    );
    assert_close(ml, 16554.0, 1e-6);
}

#[test]
fn contrast_savings_clamped_at_zero() {
    let c = EngineConstants::default();
    let ml = compute_contrast_savings(
        &spec("Bayer-Centargo"),
        &spec("Medtron-Accutron"),
        50.0,
        VolumePeriod::Daily,
        &c,
    );
    assert_eq!(ml, 0.0);
}

#[test]
fn cost_savings_combines_consumables_and_contrast() {
    let c = EngineConstants::default();
    let dv = compute_cost_savings(
        &spec("Ulrich-CTMotion"),
        &spec("Bayer-Centargo"),
        50.0,
        VolumePeriod::Daily,
        16554.0,
        &c,
    );
    assert_close(dv, 12000.0 + 33108.0, 1e-6);
}

#[test]
fn additional_revenue_splits_by_enhancement_rate() {
    let c = EngineConstants::default();
    let b = additional_revenue_breakdown(
        &spec("Ulrich-CTMotion"),
        &spec("Bayer-Centargo"),
        50.0,
        VolumePeriod::Daily,
        60.0,
        &c,
    );
    assert_close(b.total_minutes_saved, 1464.048, 1e-6);
    assert_close(b.additional_enhanced_exams, 878.4288 / 7.0, 1e-9);
    assert_close(b.additional_plain_exams, 292.8096, 1e-9);
    assert_close(b.revenue, 100580.0976, 1e-4);
}

#[test]
fn additional_revenue_is_zero_when_target_slower() {
    let c = EngineConstants::default();
    let revenue = compute_additional_revenue(
        &spec("Bayer-Centargo"),
        &spec("Bayer-Stellant"),
        50.0,
        VolumePeriod::Daily,
        60.0,
        &c,
    );
    assert_eq!(revenue, 0.0);
}

#[test]
fn extra_exams_from_saved_hours() {
    assert_close(extra_ct_exams(2.0, 5.0), 24.0, 1e-12);
    assert_close(extra_ct_exams(1.5, 7.0), 90.0 / 7.0, 1e-12);
}

#[test]
fn comparison_scenario_matches_hand_calculation() {
    let c = EngineConstants::default();
    let base = spec("Ulrich-CTMotion");
    let target = spec("Bayer-Centargo");
    let r = compute_comparison(&request(&base, &target, 50.0, 60.0), &c);

    assert_close(r.delta_p, 1464.048, 1e-6);
    assert_close(r.delta_v, 45108.0, 1e-6);
    assert_close(r.monthly_savings, 46572.048, 1e-6);
    assert_close(r.annual_savings, 558864.576, 1e-5);
    assert_close(r.contrast_savings, 16554.0, 1e-6);
    assert_close(r.additional_revenue, 100580.0976, 1e-4);
    assert_close(investment_difference(&base, &target), 80000.0, 1e-9);
    assert_close(r.roi, 558864.576 / 80000.0 * 100.0, 1e-6);
}

#[test]
fn roi_guard_uses_unit_denominator_for_cheaper_target() {
    let c = EngineConstants::default();
    let base = spec("Bayer-Centargo");
    let target = spec("Medtron-Accutron");
    assert!(investment_difference(&base, &target) < 0.0);
    let r = compute_comparison(&request(&base, &target, 50.0, 60.0), &c);
    assert_close(r.roi, r.annual_savings * 100.0, 1e-6);
}

#[test]
fn ct_device_count_does_not_change_results() {
    let c = EngineConstants::default();
    let base = spec("Ulrich-CTMotion");
    let target = spec("Bayer-Centargo");
    let one = compute_comparison(&request(&base, &target, 50.0, 60.0), &c);
    let mut many = request(&base, &target, 50.0, 60.0);
    many.ct_device_count = 8;
    assert_eq!(compute_comparison(&many, &c), one);
}

#[test]
fn summary_reports_hours_and_verdict() {
    let c = EngineConstants::default();
    let base = spec("Ulrich-CTMotion");
    let target = spec("Bayer-Centargo");
    let r = compute_comparison(&request(&base, &target, 50.0, 60.0), &c);
    let s = summarize(&r, &target, &c);

    assert_close(s.monthly_hours_saved, 24.4008, 1e-9);
    let expected = (260.0 / (260.0 - 24.4008) - 1.0) * 100.0;
    assert_close(s.efficiency_improvement_percent.unwrap(), expected, 1e-9);
    assert_close(s.contrast_savings_value, 33108.0, 1e-6);
    assert_eq!(s.verdict, InvestmentVerdict::Worthwhile);
    assert!(s.target_has_smart_protocol);
}

#[test]
fn summary_is_cautious_for_low_roi() {
    let c = EngineConstants::default();
    let base = spec("Ulrich-CTMotion");
    let target = spec("Ulrich-CTMotion");
    let r = compute_comparison(&request(&base, &target, 50.0, 60.0), &c);
    let s = summarize(&r, &target, &c);
    assert_eq!(s.verdict, InvestmentVerdict::Cautious);
    assert_eq!(s.monthly_hours_saved, 0.0);
    assert_eq!(s.efficiency_improvement_percent, Some(0.0));
}

#[test]
fn summary_has_no_efficiency_when_saved_exceeds_available_hours() {
    let c = EngineConstants::default();
    let base = spec("Bayer-Stellant");
    let target = spec("Bayer-Centargo");
    let r = compute_comparison(&request(&base, &target, 500.0, 100.0), &c);
    let s = summarize(&r, &target, &c);
    assert!(s.monthly_hours_saved > c.monthly_working_hours);
    assert_eq!(s.efficiency_improvement_percent, None);
}

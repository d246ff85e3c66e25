use ct_injector_roi::device_db::{devices, find_device};
use ct_injector_roi::roi::{
    build_radar_data, compute_additional_revenue, compute_comparison, compute_contrast_savings,
    compute_time_savings, ComparisonRequest, EngineConstants, VolumePeriod, RADAR_SCALE_MAX,
};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

fn device_index() -> impl Strategy<Value = usize> {
    0..devices().len()
}

proptest! {
    #[test]
    fn comparison_is_deterministic(
        b in device_index(),
        t in device_index(),
        volume in 1.0f64..2000.0,
        rate in 0.0f64..=100.0,
    ) {
        let c = EngineConstants::default();
        let req = ComparisonRequest {
            base: &devices()[b].spec,
            target: &devices()[t].spec,
            patient_volume: volume,
            volume_period: VolumePeriod::Daily,
            ct_device_count: 1,
            enhancement_rate_percent: rate,
        };
        prop_assert_eq!(compute_comparison(&req, &c), compute_comparison(&req, &c));
    }

    #[test]
    fn contrast_savings_never_negative(
        b in device_index(),
        t in device_index(),
        volume in 0.0f64..5000.0,
        monthly in any::<bool>(),
    ) {
        let period = if monthly { VolumePeriod::Monthly } else { VolumePeriod::Daily };
        let ml = compute_contrast_savings(
            &devices()[b].spec,
            &devices()[t].spec,
            volume,
            period,
            &EngineConstants::default(),
        );
        prop_assert!(ml >= 0.0);
    }

    #[test]
    fn monthly_savings_is_sum_and_annual_is_twelve_months(
        b in device_index(),
        t in device_index(),
        volume in 1.0f64..2000.0,
        rate in 0.0f64..=100.0,
    ) {
        let c = EngineConstants::default();
        let r = compute_comparison(
            &ComparisonRequest {
                base: &devices()[b].spec,
                target: &devices()[t].spec,
                patient_volume: volume,
                volume_period: VolumePeriod::Daily,
                ct_device_count: 1,
                enhancement_rate_percent: rate,
            },
            &c,
        );
        prop_assert_eq!(r.monthly_savings, r.delta_p + r.delta_v);
        prop_assert_eq!(r.annual_savings, r.monthly_savings * 12.0);
        prop_assert!(r.additional_revenue >= 0.0);
    }

    #[test]
    fn same_durations_give_no_time_savings(
        volume in 1.0f64..2000.0,
        rate in 0.0f64..=100.0,
        monthly in any::<bool>(),
    ) {
        let c = EngineConstants::default();
        let period = if monthly { VolumePeriod::Monthly } else { VolumePeriod::Daily };
        let stellant = &find_device("Bayer-Stellant").unwrap().spec;
        let accutron = &find_device("Medtron-Accutron").unwrap().spec;
        for (base, target) in [(stellant, accutron), (accutron, stellant)] {
            prop_assert_eq!(compute_time_savings(base, target, volume, period, rate, &c), 0.0);
            prop_assert_eq!(
                compute_additional_revenue(base, target, volume, period, rate, &c),
                0.0
            );
        }
    }

    #[test]
    fn daily_volume_equals_scaled_monthly_volume(
        b in device_index(),
        t in device_index(),
        volume in 1.0f64..500.0,
        rate in 0.0f64..=100.0,
    ) {
        let c = EngineConstants::default();
        let base = &devices()[b].spec;
        let target = &devices()[t].spec;
        let daily = compute_comparison(
            &ComparisonRequest {
                base,
                target,
                patient_volume: volume,
                volume_period: VolumePeriod::Daily,
                ct_device_count: 1,
                enhancement_rate_percent: rate,
            },
            &c,
        );
        let monthly = compute_comparison(
            &ComparisonRequest {
                base,
                target,
                patient_volume: volume * f64::from(c.working_days_per_month),
                volume_period: VolumePeriod::Monthly,
                ct_device_count: 1,
                enhancement_rate_percent: rate,
            },
            &c,
        );
        prop_assert!(close(daily.delta_p, monthly.delta_p));
        prop_assert!(close(daily.delta_v, monthly.delta_v));
        prop_assert!(close(daily.roi, monthly.roi));
        prop_assert!(close(daily.additional_revenue, monthly.additional_revenue));
    }

    #[test]
    fn identical_devices_produce_zero_result(
        d in device_index(),
        volume in 1.0f64..2000.0,
        rate in 0.0f64..=100.0,
    ) {
        let spec = &devices()[d].spec;
        let r = compute_comparison(
            &ComparisonRequest {
                base: spec,
                target: spec,
                patient_volume: volume,
                volume_period: VolumePeriod::Daily,
                ct_device_count: 1,
                enhancement_rate_percent: rate,
            },
            &EngineConstants::default(),
        );
        prop_assert_eq!(r.delta_p, 0.0);
        prop_assert_eq!(r.delta_v, 0.0);
        prop_assert_eq!(r.contrast_savings, 0.0);
        prop_assert_eq!(r.additional_revenue, 0.0);
        prop_assert_eq!(r.roi, 0.0);
    }

    #[test]
    fn radar_has_six_axes_in_range(b in device_index(), t in device_index()) {
        let radar = build_radar_data(&devices()[b].spec, &devices()[t].spec);
        prop_assert_eq!(radar.len(), 6);
        for d in &radar {
            prop_assert_eq!(d.scale_max, RADAR_SCALE_MAX);
            prop_assert!((0.0..=RADAR_SCALE_MAX).contains(&d.target_value));
            prop_assert!((0.0..=RADAR_SCALE_MAX).contains(&d.comparison_value));
        }
    }
}

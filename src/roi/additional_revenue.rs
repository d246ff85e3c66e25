use serde::Serialize;

use crate::device_db::DeviceSpecification;

use super::constants::{EngineConstants, VolumePeriod};
use super::time_efficiency::minutes_saved_per_patient;

/// 절약 시간을 추가 검사로 돌렸을 때의 내역.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueBreakdown {
    /// 월간 절약 시간 [분]. 대상 장비가 느리면 음수.
    pub total_minutes_saved: f64,
    /// 추가 가능한 조영증강 검사 수 [건/월]
    pub additional_enhanced_exams: f64,
    /// 추가 가능한 평스캔 검사 수 [건/월]
    pub additional_plain_exams: f64,
    /// 추가 수익 [원/월]
    pub revenue: f64,
}

/// 추가 수익 계산 내역을 반환한다.
///
/// 절약 시간을 병원의 증강률대로 증강/평스캔 검사에 배분한다. 증강 검사 1건은
/// 기준 장비 검사시간, 평스캔 1건은 고정 시간이 걸린다고 본다.
/// 절약 시간이 0 이하이면 검사 수와 수익을 0으로 둔다.
pub fn additional_revenue_breakdown(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
    patient_volume: f64,
    period: VolumePeriod,
    enhancement_rate_percent: f64,
    constants: &EngineConstants,
) -> RevenueBreakdown {
    let rate = enhancement_rate_percent / 100.0;
    let monthly_volume = constants.monthly_volume(patient_volume, period);
    let total_minutes_saved =
        minutes_saved_per_patient(base, target, constants) * monthly_volume * rate;

    if total_minutes_saved <= 0.0 {
        return RevenueBreakdown {
            total_minutes_saved,
            additional_enhanced_exams: 0.0,
            additional_plain_exams: 0.0,
            revenue: 0.0,
        };
    }

    let enhanced_minutes = total_minutes_saved * rate;
    let plain_minutes = total_minutes_saved * (1.0 - rate);
    let additional_enhanced_exams = if base.exam_duration_minutes > 0.0 {
        enhanced_minutes / base.exam_duration_minutes
    } else {
        0.0
    };
    let additional_plain_exams = plain_minutes / constants.plain_exam_duration_minutes;

    let revenue = additional_enhanced_exams * constants.enhanced_exam_fee
        + additional_plain_exams * constants.plain_exam_fee;

    RevenueBreakdown {
        total_minutes_saved,
        additional_enhanced_exams,
        additional_plain_exams,
        revenue,
    }
}

/// 추가 수익 [원/월]. 항상 0 이상이다.
pub fn compute_additional_revenue(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
    patient_volume: f64,
    period: VolumePeriod,
    enhancement_rate_percent: f64,
    constants: &EngineConstants,
) -> f64 {
    additional_revenue_breakdown(
        base,
        target,
        patient_volume,
        period,
        enhancement_rate_percent,
        constants,
    )
    .revenue
}

/// 절약한 근무시간으로 추가할 수 있는 CT 검사 건수.
pub fn extra_ct_exams(saved_hours: f64, exam_duration_minutes: f64) -> f64 {
    let saved_minutes = saved_hours * 60.0;
    saved_minutes / exam_duration_minutes
}

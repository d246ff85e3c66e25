use serde::Serialize;

use crate::device_db::DeviceSpecification;

use super::additional_revenue::compute_additional_revenue;
use super::constants::{EngineConstants, VolumePeriod};
use super::contrast_savings::compute_contrast_savings;
use super::cost_efficiency::compute_cost_savings;
use super::time_efficiency::compute_time_savings;

/// ROI 비교 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonRequest<'a> {
    /// 기존(기준) 장비
    pub base: &'a DeviceSpecification,
    /// 도입 검토 대상 장비
    pub target: &'a DeviceSpecification,
    /// 환자 수(기간 단위는 `volume_period`)
    pub patient_volume: f64,
    pub volume_period: VolumePeriod,
    /// CT 장비 대수. 현재 산정식에는 반영되지 않는다.
    pub ct_device_count: u32,
    /// 전체 검사 중 조영증강 검사 비율 [%] (0~100)
    pub enhancement_rate_percent: f64,
}

/// ROI 비교 계산 결과. 금액은 원, 조영제는 ml, ROI는 % 단위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// 시간 효익 ΔP [원/월]
    pub delta_p: f64,
    /// 비용 효익 ΔV [원/월]
    pub delta_v: f64,
    /// 투자수익률 [%]
    pub roi: f64,
    /// 월간 총 절감액 [원]
    pub monthly_savings: f64,
    /// 연간 총 절감액 [원]
    pub annual_savings: f64,
    /// 월간 조영제 절감량 [ml]
    pub contrast_savings: f64,
    /// 추가 검사로 얻을 수 있는 월간 수익 [원]
    pub additional_revenue: f64,
}

/// 대상 장비 도입에 필요한 추가 투자액 [원]. 음수면 대상 장비가 더 저렴하다.
pub fn investment_difference(base: &DeviceSpecification, target: &DeviceSpecification) -> f64 {
    target.purchase_cost() - base.purchase_cost()
}

/// 조영제 → ΔP → ΔV → 추가수익 순으로 계산해 결과를 묶는다.
///
/// ROI = 연간 절감액 / 추가 투자액 × 100. 추가 투자액이 0 이하이면 분모를 1로 둔다.
pub fn compute_comparison(
    request: &ComparisonRequest<'_>,
    constants: &EngineConstants,
) -> ComparisonResult {
    let ComparisonRequest {
        base,
        target,
        patient_volume,
        volume_period,
        enhancement_rate_percent,
        ..
    } = *request;

    let contrast_savings =
        compute_contrast_savings(base, target, patient_volume, volume_period, constants);
    let delta_p = compute_time_savings(
        base,
        target,
        patient_volume,
        volume_period,
        enhancement_rate_percent,
        constants,
    );
    let delta_v = compute_cost_savings(
        base,
        target,
        patient_volume,
        volume_period,
        contrast_savings,
        constants,
    );
    let additional_revenue = compute_additional_revenue(
        base,
        target,
        patient_volume,
        volume_period,
        enhancement_rate_percent,
        constants,
    );

    let monthly_savings = delta_p + delta_v;
    let annual_savings = monthly_savings * f64::from(constants.working_months_per_year);

    let difference = investment_difference(base, target);
    let denominator = if difference > 0.0 { difference } else { 1.0 };
    let roi = annual_savings / denominator * 100.0;

    log::trace!(
        "ROI 계산: ΔP={delta_p:.2} ΔV={delta_v:.2} 투자차={difference:.0} ROI={roi:.2}%"
    );

    ComparisonResult {
        delta_p,
        delta_v,
        roi,
        monthly_savings,
        annual_savings,
        contrast_savings,
        additional_revenue,
    }
}

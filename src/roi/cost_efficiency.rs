use crate::device_db::DeviceSpecification;

use super::constants::{EngineConstants, VolumePeriod};

/// 비용 효익(ΔV) [원/월]을 계산한다.
///
/// 소모품 비용 차이 × 월 환자 수에 조영제 절감량의 금액 환산분을 더한다.
/// `contrast_savings_ml`은 [`super::contrast_savings::compute_contrast_savings`]의 결과를 받는다.
/// 대상 장비 소모품이 더 비싸면 음수가 될 수 있다.
pub fn compute_cost_savings(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
    patient_volume: f64,
    period: VolumePeriod,
    contrast_savings_ml: f64,
    constants: &EngineConstants,
) -> f64 {
    let per_patient = base.consumable_cost_per_exam - target.consumable_cost_per_exam;
    let monthly_volume = constants.monthly_volume(patient_volume, period);
    let consumables_saving = per_patient * monthly_volume;
    let contrast_saving_value = contrast_savings_ml * constants.contrast_price_per_ml;
    consumables_saving + contrast_saving_value
}

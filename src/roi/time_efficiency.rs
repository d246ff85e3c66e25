use crate::device_db::DeviceSpecification;

use super::constants::{EngineConstants, VolumePeriod};

/// 환자 1인당 절약되는 시간 [분].
///
/// 검사시간 차이에 소모품 교체시간 차이를 교체 주기(환자 수)로 나눠 더한다.
/// 대상 장비가 더 느리면 음수가 된다.
pub fn minutes_saved_per_patient(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
    constants: &EngineConstants,
) -> f64 {
    let exam_saving = base.exam_duration_minutes - target.exam_duration_minutes;
    let consumable_saving = (base.consumable_change_minutes - target.consumable_change_minutes)
        / f64::from(constants.consumable_change_amortization_patients);
    exam_saving + consumable_saving
}

/// 시간 효익(ΔP) [원/월]을 계산한다.
///
/// 조영증강 검사만 주입기 시간 절감 효과를 받으므로 증강률을 곱한다.
/// 음수 결과는 그대로 반환한다.
pub fn compute_time_savings(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
    patient_volume: f64,
    period: VolumePeriod,
    enhancement_rate_percent: f64,
    constants: &EngineConstants,
) -> f64 {
    let per_patient = minutes_saved_per_patient(base, target, constants);
    if per_patient == 0.0 {
        return 0.0;
    }
    let monthly_volume = constants.monthly_volume(patient_volume, period);
    per_patient
        * monthly_volume
        * (enhancement_rate_percent / 100.0)
        * constants.time_value_per_minute
}

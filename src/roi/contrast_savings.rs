use crate::device_db::DeviceSpecification;

use super::constants::{EngineConstants, VolumePeriod};

fn protocol_saving_rate(spec: &DeviceSpecification, constants: &EngineConstants) -> f64 {
    if spec.supports_smart_protocol {
        constants.smart_protocol_saving_rate
    } else {
        0.0
    }
}

/// 월간 조영제 절감량 [ml]을 계산한다. 결과는 항상 0 이상이다.
///
/// 1. 스마트 프로토콜 지원 장비는 기본 절감률을 적용한다.
/// 2. 대상 장비의 조영제 절감 점수가 더 높으면 점수 차(0~1 정규화)에 비례해 추가 절감한다.
/// 3. 기준 사용량 - 대상 사용량을 0 아래로 내리지 않는다.
pub fn compute_contrast_savings(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
    patient_volume: f64,
    period: VolumePeriod,
    constants: &EngineConstants,
) -> f64 {
    let monthly_volume = constants.monthly_volume(patient_volume, period);
    let base_rate = protocol_saving_rate(base, constants);
    let target_rate = protocol_saving_rate(target, constants);

    let efficiency_factor =
        ((target.contrast_saving_score - base.contrast_saving_score) / 10.0).max(0.0);

    let full_usage = monthly_volume * constants.base_contrast_volume_ml;
    let base_usage = full_usage * (1.0 - base_rate);
    let target_usage =
        full_usage * (1.0 - target_rate - efficiency_factor * constants.score_gap_saving_rate);

    (base_usage - target_usage).max(0.0)
}

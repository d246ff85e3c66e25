//! 입력 검증, 장비 조회, 계산 결과 보관을 담당한다.
//! 계산 엔진은 순수 함수로 두고 상태는 여기서만 가진다.

use serde::Serialize;
use thiserror::Error;

use crate::config::DefaultInputs;
use crate::device_db::{self, Device};
use crate::i18n::keys;
use crate::roi::parameter_comparison::{compare_parameters, ParameterRow};
use crate::roi::{
    additional_revenue_breakdown, build_radar_data, compute_comparison, extra_ct_exams, summarize,
    ComparisonRequest, ComparisonResult, ComparisonSummary, EngineConstants, RadarDatum,
    RevenueBreakdown, VolumePeriod,
};

/// 사용자 입력 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonInputs {
    pub base_device_id: String,
    pub target_device_id: String,
    pub patient_volume: f64,
    pub volume_period: VolumePeriod,
    pub ct_device_count: u32,
    /// [%]
    pub enhancement_rate_percent: f64,
}

impl Default for ComparisonInputs {
    fn default() -> Self {
        Self::from(&DefaultInputs::default())
    }
}

impl From<&DefaultInputs> for ComparisonInputs {
    fn from(d: &DefaultInputs) -> Self {
        Self {
            base_device_id: d.base_device_id.clone(),
            target_device_id: d.target_device_id.clone(),
            patient_volume: d.patient_volume,
            volume_period: d.volume_period,
            ct_device_count: d.ct_device_count,
            enhancement_rate_percent: d.enhancement_rate_percent,
        }
    }
}

/// 조회 실패 시 어느 쪽 장비였는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRole {
    Base,
    Target,
}

impl std::fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceRole::Base => write!(f, "base"),
            DeviceRole::Target => write!(f, "target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("unknown {role} device: {id}")]
    UnknownDevice { role: DeviceRole, id: String },
    #[error("patient volume must be positive (got {0})")]
    NonPositiveVolume(f64),
    #[error("enhancement rate must be within 0..=100 (got {0})")]
    EnhancementRateOutOfRange(f64),
    #[error("at least one CT device is required")]
    NoCtDevices,
}

impl SessionError {
    /// 화면 표시용 번역 키. `{id}` 자리표시자를 가질 수 있다.
    pub fn label_key(&self) -> &'static str {
        match self {
            SessionError::UnknownDevice { .. } => keys::ERROR_UNKNOWN_DEVICE,
            SessionError::NonPositiveVolume(_) => keys::ERROR_NON_POSITIVE_VOLUME,
            SessionError::EnhancementRateOutOfRange(_) => keys::ERROR_RATE_OUT_OF_RANGE,
            SessionError::NoCtDevices => keys::ERROR_NO_CT_DEVICES,
        }
    }

    /// 번역 템플릿에 넣을 값.
    pub fn template_vars(&self) -> Vec<(&'static str, String)> {
        match self {
            SessionError::UnknownDevice { id, .. } => vec![("id", id.clone())],
            _ => Vec::new(),
        }
    }
}

/// 한 번의 비교 계산으로 얻은 결과 전체.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonOutcome {
    pub base: &'static Device,
    pub target: &'static Device,
    pub inputs: ComparisonInputs,
    pub result: ComparisonResult,
    pub revenue: RevenueBreakdown,
    pub summary: ComparisonSummary,
    /// 절약 시간으로 대상 장비에서 더 할 수 있는 검사 수 [건/월]
    pub extra_exams: f64,
    pub radar: Vec<RadarDatum>,
    pub parameters: Vec<ParameterRow>,
}

fn validate(inputs: &ComparisonInputs) -> Result<(), SessionError> {
    let volume = inputs.patient_volume;
    if !(volume.is_finite() && volume > 0.0) {
        return Err(SessionError::NonPositiveVolume(volume));
    }
    let rate = inputs.enhancement_rate_percent;
    if !(0.0..=100.0).contains(&rate) {
        return Err(SessionError::EnhancementRateOutOfRange(rate));
    }
    if inputs.ct_device_count == 0 {
        return Err(SessionError::NoCtDevices);
    }
    Ok(())
}

/// ID로 장비를 찾는다. 없으면 어느 쪽 장비였는지 담아 돌려준다.
pub fn lookup(role: DeviceRole, id: &str) -> Result<&'static Device, SessionError> {
    device_db::find_device(id).ok_or_else(|| {
        log::debug!("장비 조회 실패 ({role}): {id}");
        SessionError::UnknownDevice {
            role,
            id: id.to_string(),
        }
    })
}

/// 입력을 검증하고 두 장비를 찾아 전체 비교 결과를 만든다.
pub fn compare(
    inputs: &ComparisonInputs,
    constants: &EngineConstants,
) -> Result<ComparisonOutcome, SessionError> {
    validate(inputs)?;
    let base = lookup(DeviceRole::Base, &inputs.base_device_id)?;
    let target = lookup(DeviceRole::Target, &inputs.target_device_id)?;

    let request = ComparisonRequest {
        base: &base.spec,
        target: &target.spec,
        patient_volume: inputs.patient_volume,
        volume_period: inputs.volume_period,
        ct_device_count: inputs.ct_device_count,
        enhancement_rate_percent: inputs.enhancement_rate_percent,
    };
    let result = compute_comparison(&request, constants);
    let revenue = additional_revenue_breakdown(
        &base.spec,
        &target.spec,
        inputs.patient_volume,
        inputs.volume_period,
        inputs.enhancement_rate_percent,
        constants,
    );
    log::debug!(
        "비교 완료: {} → {} ROI={:.1}%",
        base.id,
        target.id,
        result.roi
    );

    let summary = summarize(&result, &target.spec, constants);
    let extra_exams = extra_ct_exams(
        summary.monthly_hours_saved.max(0.0),
        target.spec.exam_duration_minutes,
    );

    Ok(ComparisonOutcome {
        base,
        target,
        inputs: inputs.clone(),
        summary,
        extra_exams,
        radar: build_radar_data(&base.spec, &target.spec),
        parameters: compare_parameters(&base.spec, &target.spec),
        result,
        revenue,
    })
}

/// 입력과 마지막 계산 결과를 보관한다.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub inputs: ComparisonInputs,
    pub constants: EngineConstants,
    outcome: Option<ComparisonOutcome>,
}

impl Session {
    pub fn new(inputs: ComparisonInputs, constants: EngineConstants) -> Self {
        Self {
            inputs,
            constants,
            outcome: None,
        }
    }

    /// 현재 입력으로 다시 계산한다. 실패하면 이전 결과를 지우고 오류를 돌려준다.
    pub fn calculate(&mut self) -> Result<&ComparisonOutcome, SessionError> {
        match compare(&self.inputs, &self.constants) {
            Ok(outcome) => Ok(&*self.outcome.insert(outcome)),
            Err(e) => {
                log::warn!("계산 실패: {e}");
                self.outcome = None;
                Err(e)
            }
        }
    }

    pub fn outcome(&self) -> Option<&ComparisonOutcome> {
        self.outcome.as_ref()
    }

    pub fn clear(&mut self) {
        self.outcome = None;
    }
}

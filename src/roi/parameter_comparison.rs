use serde::Serialize;

use crate::device_db::DeviceSpecification;
use crate::i18n::keys;

/// 사양표에 나란히 표시하는 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecParameter {
    ConsumableChangeTime,
    ExamDuration,
    Depreciation,
    ClinicalAccuracy,
    ResearchValue,
    ContrastSaving,
    InformationSystem,
    SmartProtocol,
}

/// 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterUnit {
    Minutes,
    Percent,
    Score,
    None,
}

impl SpecParameter {
    pub const ALL: [SpecParameter; 8] = [
        SpecParameter::ConsumableChangeTime,
        SpecParameter::ExamDuration,
        SpecParameter::Depreciation,
        SpecParameter::ClinicalAccuracy,
        SpecParameter::ResearchValue,
        SpecParameter::ContrastSaving,
        SpecParameter::InformationSystem,
        SpecParameter::SmartProtocol,
    ];

    /// 값이 작을수록 유리한 항목인지.
    pub fn lower_is_better(self) -> bool {
        matches!(
            self,
            SpecParameter::ConsumableChangeTime
                | SpecParameter::ExamDuration
                | SpecParameter::Depreciation
        )
    }

    pub fn unit(self) -> ParameterUnit {
        match self {
            SpecParameter::ConsumableChangeTime | SpecParameter::ExamDuration => {
                ParameterUnit::Minutes
            }
            SpecParameter::Depreciation => ParameterUnit::Percent,
            SpecParameter::ClinicalAccuracy
            | SpecParameter::ResearchValue
            | SpecParameter::ContrastSaving => ParameterUnit::Score,
            SpecParameter::InformationSystem | SpecParameter::SmartProtocol => ParameterUnit::None,
        }
    }

    pub fn value(self, spec: &DeviceSpecification) -> ParameterValue {
        match self {
            SpecParameter::ConsumableChangeTime => {
                ParameterValue::Number(spec.consumable_change_minutes)
            }
            SpecParameter::ExamDuration => ParameterValue::Number(spec.exam_duration_minutes),
            SpecParameter::Depreciation => {
                ParameterValue::Number(spec.ten_year_depreciation_percent)
            }
            SpecParameter::ClinicalAccuracy => ParameterValue::Number(spec.clinical_accuracy),
            SpecParameter::ResearchValue => ParameterValue::Number(spec.research_value),
            SpecParameter::ContrastSaving => ParameterValue::Number(spec.contrast_saving_score),
            SpecParameter::InformationSystem => {
                ParameterValue::Flag(spec.supports_information_system)
            }
            SpecParameter::SmartProtocol => ParameterValue::Flag(spec.supports_smart_protocol),
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            SpecParameter::ConsumableChangeTime => keys::SPEC_CONSUMABLE_CHANGE_TIME,
            SpecParameter::ExamDuration => keys::SPEC_EXAM_TIME,
            SpecParameter::Depreciation => keys::SPEC_DEPRECIATION,
            SpecParameter::ClinicalAccuracy => keys::METRIC_CLINICAL_ACCURACY,
            SpecParameter::ResearchValue => keys::METRIC_RESEARCH_VALUE,
            SpecParameter::ContrastSaving => keys::METRIC_CONTRAST_SAVING,
            SpecParameter::InformationSystem => keys::SPEC_INFORMATION_SYSTEM,
            SpecParameter::SmartProtocol => keys::SPEC_SMART_PROTOCOL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterValue {
    Number(f64),
    Flag(bool),
}

/// 대상 장비가 기준 장비보다 나은지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Better,
    Worse,
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRow {
    pub parameter: SpecParameter,
    pub target: ParameterValue,
    pub base: ParameterValue,
    pub trend: Trend,
}

impl ParameterRow {
    /// 수치 항목의 차이 절대값. 플래그 항목은 `None`.
    pub fn difference(&self) -> Option<f64> {
        match (self.target, self.base) {
            (ParameterValue::Number(t), ParameterValue::Number(b)) => Some((t - b).abs()),
            _ => None,
        }
    }
}

fn trend_of(parameter: SpecParameter, target: ParameterValue, base: ParameterValue) -> Trend {
    match (target, base) {
        (ParameterValue::Number(t), ParameterValue::Number(b)) => {
            let diff = t - b;
            if diff == 0.0 {
                Trend::Equal
            } else if (parameter.lower_is_better() && diff < 0.0)
                || (!parameter.lower_is_better() && diff > 0.0)
            {
                Trend::Better
            } else {
                Trend::Worse
            }
        }
        (ParameterValue::Flag(t), ParameterValue::Flag(b)) => match (t, b) {
            _ if t == b => Trend::Equal,
            (true, false) => Trend::Better,
            _ => Trend::Worse,
        },
        _ => Trend::Equal,
    }
}

/// 두 장비의 주요 사양을 항목별로 비교한다.
pub fn compare_parameters(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
) -> Vec<ParameterRow> {
    SpecParameter::ALL
        .iter()
        .map(|&parameter| {
            let t = parameter.value(target);
            let b = parameter.value(base);
            ParameterRow {
                parameter,
                target: t,
                base: b,
                trend: trend_of(parameter, t, b),
            }
        })
        .collect()
}

use serde::Serialize;

use crate::device_db::DeviceSpecification;

use super::aggregator::ComparisonResult;
use super::constants::EngineConstants;

/// 투자 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentVerdict {
    /// ROI가 기준치를 넘음
    Worthwhile,
    /// 신중한 검토 필요
    Cautious,
}

impl InvestmentVerdict {
    pub fn label_key(self) -> &'static str {
        match self {
            InvestmentVerdict::Worthwhile => crate::i18n::keys::VERDICT_WORTHWHILE,
            InvestmentVerdict::Cautious => crate::i18n::keys::VERDICT_CAUTIOUS,
        }
    }
}

/// 결과 화면 요약 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// 월간 절약 근무시간 [h]
    pub monthly_hours_saved: f64,
    /// 업무 효율 향상률 [%]. 절약 시간이 월 가용시간 이상이면 `None`.
    pub efficiency_improvement_percent: Option<f64>,
    /// 조영제 절감분의 금액 [원/월]
    pub contrast_savings_value: f64,
    pub verdict: InvestmentVerdict,
    /// 대상 장비의 스마트 프로토콜 지원 여부(결론 문구용)
    pub target_has_smart_protocol: bool,
}

/// 시간 효익을 근무시간으로 되돌리고 효율 향상률과 투자 판정을 구한다.
pub fn summarize(
    result: &ComparisonResult,
    target: &DeviceSpecification,
    constants: &EngineConstants,
) -> ComparisonSummary {
    let monthly_hours_saved = if constants.time_value_per_minute > 0.0 {
        result.delta_p / constants.time_value_per_minute / 60.0
    } else {
        0.0
    };

    let available = constants.monthly_working_hours;
    let remaining = available - monthly_hours_saved;
    let efficiency_improvement_percent = if remaining > 0.0 {
        Some((available / remaining - 1.0) * 100.0)
    } else {
        None
    };

    let verdict = if result.roi > constants.worthwhile_roi_threshold_percent {
        InvestmentVerdict::Worthwhile
    } else {
        InvestmentVerdict::Cautious
    };

    ComparisonSummary {
        monthly_hours_saved,
        efficiency_improvement_percent,
        contrast_savings_value: result.contrast_savings * constants.contrast_price_per_ml,
        verdict,
        target_has_smart_protocol: target.supports_smart_protocol,
    }
}

use serde::Serialize;

use crate::device_db::DeviceSpecification;

/// 레이더 차트 축 최대값.
pub const RADAR_SCALE_MAX: f64 = 10.0;

/// 레이더 차트에 표시하는 평가 항목. 순서가 차트 범례 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RadarMetric {
    ClinicalAccuracy,
    WorkEfficiency,
    Usability,
    ResearchValue,
    MaintenanceConvenience,
    ContrastSaving,
}

impl RadarMetric {
    pub const ALL: [RadarMetric; 6] = [
        RadarMetric::ClinicalAccuracy,
        RadarMetric::WorkEfficiency,
        RadarMetric::Usability,
        RadarMetric::ResearchValue,
        RadarMetric::MaintenanceConvenience,
        RadarMetric::ContrastSaving,
    ];

    pub fn score(self, spec: &DeviceSpecification) -> f64 {
        match self {
            RadarMetric::ClinicalAccuracy => spec.clinical_accuracy,
            RadarMetric::WorkEfficiency => spec.work_efficiency,
            RadarMetric::Usability => spec.usability,
            RadarMetric::ResearchValue => spec.research_value,
            RadarMetric::MaintenanceConvenience => spec.maintenance_convenience,
            RadarMetric::ContrastSaving => spec.contrast_saving_score,
        }
    }

    /// 번역 키.
    pub fn label_key(self) -> &'static str {
        use crate::i18n::keys::*;
        match self {
            RadarMetric::ClinicalAccuracy => METRIC_CLINICAL_ACCURACY,
            RadarMetric::WorkEfficiency => METRIC_WORK_EFFICIENCY,
            RadarMetric::Usability => METRIC_USABILITY,
            RadarMetric::ResearchValue => METRIC_RESEARCH_VALUE,
            RadarMetric::MaintenanceConvenience => METRIC_MAINTENANCE,
            RadarMetric::ContrastSaving => METRIC_CONTRAST_SAVING,
        }
    }
}

/// 레이더 차트 한 축의 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarDatum {
    pub subject: RadarMetric,
    /// 대상 장비 점수
    pub target_value: f64,
    /// 기준 장비 점수
    pub comparison_value: f64,
    pub scale_max: f64,
}

/// 두 장비의 평가 점수를 고정 순서의 레이더 데이터로 변환한다.
pub fn build_radar_data(
    base: &DeviceSpecification,
    target: &DeviceSpecification,
) -> Vec<RadarDatum> {
    RadarMetric::ALL
        .iter()
        .map(|&metric| RadarDatum {
            subject: metric,
            target_value: metric.score(target),
            comparison_value: metric.score(base),
            scale_max: RADAR_SCALE_MAX,
        })
        .collect()
}

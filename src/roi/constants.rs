use serde::{Deserialize, Serialize};

/// 계산기 전반에 주입되는 상수 묶음.
///
/// 기본값은 최신 산정식(증강률·추가수익·기준/대상 차등 조영제 모델) 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConstants {
    /// 기사 시간가치 [원/분]
    pub time_value_per_minute: f64,
    /// 월 근무일수
    pub working_days_per_month: u32,
    /// 연간 근무 개월 수
    pub working_months_per_year: u32,
    /// 조영제 단가 [원/ml]
    pub contrast_price_per_ml: f64,
    /// 환자 1인당 기본 조영제 사용량 [ml]
    pub base_contrast_volume_ml: f64,
    /// 스마트 프로토콜 지원 시 조영제 절감 비율(0~1)
    pub smart_protocol_saving_rate: f64,
    /// 조영제 절감 점수 차(0~1 정규화)당 추가 절감 비율
    pub score_gap_saving_rate: f64,
    /// CT 조영증강 검사 수가 [원]
    pub enhanced_exam_fee: f64,
    /// CT 평스캔 검사 수가 [원]
    pub plain_exam_fee: f64,
    /// 평스캔 1건 소요시간 [분]
    pub plain_exam_duration_minutes: f64,
    /// 소모품 1회 교체당 환자 수
    pub consumable_change_amortization_patients: u32,
    /// 월 가용 근무시간 [h] (26일 × 10시간)
    pub monthly_working_hours: f64,
    /// 투자 가치 판정 ROI 기준 [%]
    pub worthwhile_roi_threshold_percent: f64,
}

impl Default for EngineConstants {
    fn default() -> Self {
        Self {
            time_value_per_minute: 1.0,
            working_days_per_month: 24,
            working_months_per_year: 12,
            contrast_price_per_ml: 2.0,
            base_contrast_volume_ml: 62.0,
            smart_protocol_saving_rate: 0.20,
            score_gap_saving_rate: 0.15,
            enhanced_exam_fee: 269.5,
            plain_exam_fee: 228.0,
            plain_exam_duration_minutes: 2.0,
            consumable_change_amortization_patients: 50,
            monthly_working_hours: 260.0,
            worthwhile_roi_threshold_percent: 15.0,
        }
    }
}

impl EngineConstants {
    /// 이전 산정식 개정판의 상수(월 22일, 시간가치 2원/분).
    ///
    /// 과거 보고서와 수치를 맞춰 볼 때만 사용한다. 신규 계산에는 `default()`를 쓴다.
    #[deprecated(note = "이전 개정판 상수. EngineConstants::default()를 사용할 것")]
    pub fn legacy() -> Self {
        Self {
            time_value_per_minute: 2.0,
            working_days_per_month: 22,
            ..Self::default()
        }
    }

    /// 기간 구분에 따라 월 환자 수로 환산한다.
    pub fn monthly_volume(&self, patient_volume: f64, period: VolumePeriod) -> f64 {
        match period {
            VolumePeriod::Daily => patient_volume * f64::from(self.working_days_per_month),
            VolumePeriod::Monthly => patient_volume,
        }
    }

    /// 나눗셈 분모로 쓰이는 값이 0 이하인지 검사한다.
    pub fn invalid_field(&self) -> Option<&'static str> {
        if self.working_days_per_month == 0 {
            return Some("working_days_per_month");
        }
        if self.working_months_per_year == 0 {
            return Some("working_months_per_year");
        }
        if self.consumable_change_amortization_patients == 0 {
            return Some("consumable_change_amortization_patients");
        }
        if !(self.plain_exam_duration_minutes > 0.0) {
            return Some("plain_exam_duration_minutes");
        }
        let non_negative = [
            ("time_value_per_minute", self.time_value_per_minute),
            ("contrast_price_per_ml", self.contrast_price_per_ml),
            ("base_contrast_volume_ml", self.base_contrast_volume_ml),
            ("smart_protocol_saving_rate", self.smart_protocol_saving_rate),
            ("score_gap_saving_rate", self.score_gap_saving_rate),
            ("enhanced_exam_fee", self.enhanced_exam_fee),
            ("plain_exam_fee", self.plain_exam_fee),
            ("monthly_working_hours", self.monthly_working_hours),
        ];
        non_negative
            .into_iter()
            .find(|(_, v)| !(*v >= 0.0))
            .map(|(name, _)| name)
    }
}

/// 환자 수 입력이 일 단위인지 월 단위인지 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumePeriod {
    #[default]
    Daily,
    Monthly,
}

impl VolumePeriod {
    pub fn is_daily(self) -> bool {
        matches!(self, VolumePeriod::Daily)
    }
}

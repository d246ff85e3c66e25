//! 고압 조영제 주입기 사양 카탈로그.
//! 값은 비교 검토용 참고치이며 구매 전 제조사 최신 자료로 확인해야 한다.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// 카탈로그 데이터 버전.
pub const VERSION: &str = "1.0.1";
/// 카탈로그 최종 갱신 시각(UTC).
pub const LAST_UPDATED: &str = "2025-05-07T22:00:00Z";
/// 기준 후보가 하나도 없을 때 사용하는 기본 기준 장비.
pub const FALLBACK_BASE_ID: &str = "Ulrich-CTMotion";
/// 구매가 저장 단위(만 원)를 원 단위로 바꾸는 배율.
pub const PURCHASE_COST_UNIT: f64 = 10_000.0;

/// 주입 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionTechnology {
    Piston,
    Peristaltic,
}

/// 튜브(실린지) 구성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TubeType {
    Double,
    Triple,
}

/// 의료기기 규제 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegulatoryClass {
    #[serde(rename = "class_ii")]
    ClassII,
    #[serde(rename = "class_iii")]
    ClassIII,
}

/// 장비 1대의 운용 사양. 평가 항목은 0~10 점수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceSpecification {
    /// 소모품 교체 시간 [분]
    pub consumable_change_minutes: f64,
    /// 조영증강 검사 1건 총 소요시간 [분]
    pub exam_duration_minutes: f64,
    /// 병원정보시스템 연동 지원
    pub supports_information_system: bool,
    /// 스마트 프로토콜(개인화 주입) 지원
    pub supports_smart_protocol: bool,
    /// 검사 1건당 소모품 비용 [원]
    pub consumable_cost_per_exam: f64,
    /// 구매가 [만 원]
    pub purchase_cost_10k: f64,
    /// 10년 감가상각률 [%]
    pub ten_year_depreciation_percent: f64,
    pub clinical_accuracy: f64,
    pub research_value: f64,
    pub work_efficiency: f64,
    pub usability: f64,
    pub maintenance_convenience: f64,
    pub contrast_saving_score: f64,
    pub injection_technology: InjectionTechnology,
    pub tube_type: TubeType,
    pub regulatory_class: RegulatoryClass,
}

impl DeviceSpecification {
    /// 구매가 [원]
    pub fn purchase_cost(&self) -> f64 {
        self.purchase_cost_10k * PURCHASE_COST_UNIT
    }

    fn ratings(&self) -> [(&'static str, f64); 6] {
        [
            ("clinical_accuracy", self.clinical_accuracy),
            ("research_value", self.research_value),
            ("work_efficiency", self.work_efficiency),
            ("usability", self.usability),
            ("maintenance_convenience", self.maintenance_convenience),
            ("contrast_saving_score", self.contrast_saving_score),
        ]
    }
}

/// 카탈로그에 등록된 장비.
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    /// "브랜드-모델" 조회 키
    pub id: &'static str,
    pub brand: &'static str,
    pub model: &'static str,
    pub category: &'static str,
    /// 기존(기준) 장비 후보 여부
    pub is_base_candidate: bool,
    pub image_reference: &'static str,
    pub spec: DeviceSpecification,
}

impl Device {
    /// "브랜드 모델" 표시명.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// 선택 목록용 항목.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceOption {
    pub id: &'static str,
    pub name: String,
}

/// 카탈로그 무결성 검사 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate device id: {0}")]
    DuplicateId(&'static str),
    #[error("{id}: {field} must be positive (got {value})")]
    NonPositive {
        id: &'static str,
        field: &'static str,
        value: f64,
    },
    #[error("{id}: {field} out of range (got {value})")]
    OutOfRange {
        id: &'static str,
        field: &'static str,
        value: f64,
    },
}

pub fn devices() -> &'static [Device] {
    DEVICES
}

/// ID로 장비를 찾는다. 정확히 일치하지 않으면 대소문자를 무시하고 다시 찾는다.
pub fn find_device(id: &str) -> Option<&'static Device> {
    let id = id.trim();
    DEVICES
        .iter()
        .find(|d| d.id == id)
        .or_else(|| DEVICES.iter().find(|d| d.id.eq_ignore_ascii_case(id)))
}

/// 첫 번째 기준 후보 장비의 ID.
pub fn base_device_id() -> &'static str {
    DEVICES
        .iter()
        .find(|d| d.is_base_candidate)
        .map(|d| d.id)
        .unwrap_or(FALLBACK_BASE_ID)
}

pub fn device_options() -> Vec<DeviceOption> {
    DEVICES
        .iter()
        .map(|d| DeviceOption {
            id: d.id,
            name: d.display_name(),
        })
        .collect()
}

/// 브랜드별 장비 ID 목록.
pub fn brand_models() -> BTreeMap<&'static str, Vec<&'static str>> {
    let mut brands: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for d in DEVICES {
        brands.entry(d.brand).or_default().push(d.id);
    }
    brands
}

/// 카탈로그 전체의 수치 범위와 ID 중복을 검사한다.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_devices(DEVICES)
}

pub fn validate_devices(devices: &[Device]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for d in devices {
        if !seen.insert(d.id) {
            return Err(CatalogError::DuplicateId(d.id));
        }
        let s = &d.spec;
        let positive = [
            ("consumable_change_minutes", s.consumable_change_minutes),
            ("exam_duration_minutes", s.exam_duration_minutes),
            ("consumable_cost_per_exam", s.consumable_cost_per_exam),
            ("purchase_cost_10k", s.purchase_cost_10k),
        ];
        if let Some((field, value)) = positive.into_iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(CatalogError::NonPositive {
                id: d.id,
                field,
                value,
            });
        }
        let depreciation = s.ten_year_depreciation_percent;
        if !(0.0..=100.0).contains(&depreciation) {
            return Err(CatalogError::OutOfRange {
                id: d.id,
                field: "ten_year_depreciation_percent",
                value: depreciation,
            });
        }
        if let Some((field, value)) = s
            .ratings()
            .into_iter()
            .find(|(_, v)| !(0.0..=10.0).contains(v))
        {
            return Err(CatalogError::OutOfRange {
                id: d.id,
                field,
                value,
            });
        }
    }
    Ok(())
}

const CATEGORY: &str = "高压注射器";

static DEVICES: &[Device] = &[
    Device {
        id: "Bayer-Centargo",
        brand: "Bayer",
        model: "Centargo",
        category: CATEGORY,
        is_base_candidate: false,
        image_reference: "images/devices/bayer-centargo.png",
        spec: DeviceSpecification {
            consumable_change_minutes: 0.33,
            exam_duration_minutes: 5.0,
            supports_information_system: true,
            supports_smart_protocol: true,
            consumable_cost_per_exam: 100.0,
            purchase_cost_10k: 33.0,
            ten_year_depreciation_percent: 8.0,
            clinical_accuracy: 9.0,
            research_value: 9.0,
            work_efficiency: 8.0,
            usability: 8.0,
            maintenance_convenience: 8.5,
            contrast_saving_score: 9.0,
            injection_technology: InjectionTechnology::Piston,
            tube_type: TubeType::Triple,
            regulatory_class: RegulatoryClass::ClassIII,
        },
    },
    Device {
        id: "Ulrich-CTMotion",
        brand: "Ulrich",
        model: "CTMotion",
        category: CATEGORY,
        is_base_candidate: true,
        image_reference: "images/devices/ulrich-ctmotion.png",
        spec: DeviceSpecification {
            consumable_change_minutes: 2.0,
            exam_duration_minutes: 7.0,
            supports_information_system: true,
            supports_smart_protocol: false,
            consumable_cost_per_exam: 110.0,
            purchase_cost_10k: 25.0,
            ten_year_depreciation_percent: 10.0,
            clinical_accuracy: 7.0,
            research_value: 7.0,
            work_efficiency: 7.0,
            usability: 7.5,
            maintenance_convenience: 7.0,
            contrast_saving_score: 7.5,
            injection_technology: InjectionTechnology::Peristaltic,
            tube_type: TubeType::Triple,
            regulatory_class: RegulatoryClass::ClassII,
        },
    },
    Device {
        id: "Guerbet-OptiVantage",
        brand: "Guerbet",
        model: "OptiVantage",
        category: CATEGORY,
        is_base_candidate: false,
        image_reference: "images/devices/guerbet-optivantage.png",
        spec: DeviceSpecification {
            consumable_change_minutes: 3.0,
            exam_duration_minutes: 8.0,
            supports_information_system: true,
            supports_smart_protocol: false,
            consumable_cost_per_exam: 125.0,
            purchase_cost_10k: 24.0,
            ten_year_depreciation_percent: 9.0,
            clinical_accuracy: 7.0,
            research_value: 6.0,
            work_efficiency: 7.5,
            usability: 7.0,
            maintenance_convenience: 7.5,
            contrast_saving_score: 8.0,
            injection_technology: InjectionTechnology::Peristaltic,
            tube_type: TubeType::Double,
            regulatory_class: RegulatoryClass::ClassII,
        },
    },
    Device {
        id: "Bayer-Stellant",
        brand: "Bayer",
        model: "Stellant DCE",
        category: CATEGORY,
        is_base_candidate: true,
        image_reference: "images/devices/bayer-stellant.png",
        spec: DeviceSpecification {
            consumable_change_minutes: 3.0,
            exam_duration_minutes: 10.0,
            supports_information_system: true,
            supports_smart_protocol: false,
            consumable_cost_per_exam: 110.0,
            purchase_cost_10k: 20.0,
            ten_year_depreciation_percent: 8.0,
            clinical_accuracy: 8.5,
            research_value: 8.0,
            work_efficiency: 7.0,
            usability: 7.5,
            maintenance_convenience: 7.0,
            contrast_saving_score: 7.0,
            injection_technology: InjectionTechnology::Piston,
            tube_type: TubeType::Double,
            regulatory_class: RegulatoryClass::ClassII,
        },
    },
    Device {
        id: "CLear-Edot",
        brand: "Clear",
        model: "Edot",
        category: CATEGORY,
        is_base_candidate: true,
        image_reference: "images/devices/clear-edot.png",
        spec: DeviceSpecification {
            consumable_change_minutes: 2.0,
            exam_duration_minutes: 8.0,
            supports_information_system: true,
            supports_smart_protocol: false,
            consumable_cost_per_exam: 120.0,
            purchase_cost_10k: 15.0,
            ten_year_depreciation_percent: 12.0,
            clinical_accuracy: 6.0,
            research_value: 6.0,
            work_efficiency: 7.0,
            usability: 7.0,
            maintenance_convenience: 6.0,
            contrast_saving_score: 7.0,
            injection_technology: InjectionTechnology::Peristaltic,
            tube_type: TubeType::Triple,
            regulatory_class: RegulatoryClass::ClassII,
        },
    },
    Device {
        id: "Medtron-Accutron",
        brand: "Medtron",
        model: "Accutron",
        category: CATEGORY,
        is_base_candidate: false,
        image_reference: "images/devices/medtron-accutron.png",
        spec: DeviceSpecification {
            consumable_change_minutes: 3.0,
            exam_duration_minutes: 10.0,
            supports_information_system: false,
            supports_smart_protocol: false,
            consumable_cost_per_exam: 88.0,
            purchase_cost_10k: 15.0,
            ten_year_depreciation_percent: 10.0,
            clinical_accuracy: 7.0,
            research_value: 7.0,
            work_efficiency: 6.0,
            usability: 7.0,
            maintenance_convenience: 6.0,
            contrast_saving_score: 6.0,
            injection_technology: InjectionTechnology::Peristaltic,
            tube_type: TubeType::Double,
            regulatory_class: RegulatoryClass::ClassII,
        },
    },
];

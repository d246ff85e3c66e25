//! 주입기 교체 ROI 계산 모듈 모음.
//! 시간 효익(ΔP), 조영제 절감, 비용 효익(ΔV), 추가 수익, 종합 ROI, 레이더/사양 비교로 구성한다.

pub mod additional_revenue;
pub mod aggregator;
pub mod constants;
pub mod contrast_savings;
pub mod cost_efficiency;
pub mod parameter_comparison;
pub mod radar;
pub mod summary;
pub mod time_efficiency;

pub use additional_revenue::*;
pub use aggregator::*;
pub use constants::*;
pub use contrast_savings::*;
pub use cost_efficiency::*;
pub use radar::*;
pub use summary::*;
pub use time_efficiency::*;

//! CT 조영제 고압 주입기 교체 검토용 ROI 계산 라이브러리.
//! 계산 엔진은 순수 함수로 두고 CLI와 GUI가 같은 로직을 공유한다.

pub mod app;
pub mod config;
pub mod device_db;
pub mod format;
pub mod i18n;
pub mod roi;
pub mod session;
pub mod ui_cli;

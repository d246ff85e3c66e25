use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::device_db;
use crate::roi::{EngineConstants, VolumePeriod};

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 입력 화면을 처음 열었을 때 채워지는 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultInputs {
    pub patient_volume: f64,
    pub volume_period: VolumePeriod,
    pub ct_device_count: u32,
    /// CT 조영증강 비율 [%]
    pub enhancement_rate_percent: f64,
    pub base_device_id: String,
    pub target_device_id: String,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            patient_volume: 50.0,
            volume_period: VolumePeriod::Daily,
            ct_device_count: 1,
            enhancement_rate_percent: 60.0,
            base_device_id: device_db::base_device_id().to_string(),
            target_device_id: "Bayer-Centargo".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto", "zh-cn", "en-us" 등
    pub language: String,
    /// 언어팩(TOML) 디렉터리
    pub language_pack_dir: Option<String>,
    pub constants: EngineConstants,
    pub defaults: DefaultInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            constants: EngineConstants::default(),
            defaults: DefaultInputs::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid engine constant: {0}")]
    InvalidConstant(&'static str),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        log::debug!("{CONFIG_FILE} 없음, 기본 설정 생성");
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

/// 지정 경로의 설정을 읽고 상수 값을 검사한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    if let Err(e) = cfg.validate() {
        log::warn!("설정 검사 실패 ({}): {e}", path.display());
        return Err(e);
    }
    log::debug!("설정 로드: {}", path.display());
    Ok(cfg)
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        log::debug!("설정 저장: {}", path.display());
        Ok(())
    }

    /// 분모로 쓰이는 상수가 0 이하이거나 음수 단가가 들어 있으면 거부한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.constants.invalid_field() {
            Some(field) => Err(ConfigError::InvalidConstant(field)),
            None => Ok(()),
        }
    }
}

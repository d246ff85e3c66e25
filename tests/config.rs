use std::fs;

use ct_injector_roi::config::{load_from, Config, ConfigError};
use ct_injector_roi::i18n::{keys, Translator};
use ct_injector_roi::roi::{EngineConstants, VolumePeriod};
use tempfile::tempdir;

#[test]
fn config_round_trips_through_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut cfg = Config::default();
    cfg.language = "en-us".into();
    cfg.defaults.enhancement_rate_percent = 45.0;
    cfg.defaults.volume_period = VolumePeriod::Monthly;
    cfg.constants.time_value_per_minute = 2.0;
    cfg.save_to(&path).unwrap();

    let loaded = load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "language = \"zh\"\n[constants]\nworking_days_per_month = 22\n",
    )
    .unwrap();

    let cfg = load_from(&path).unwrap();
    assert_eq!(cfg.language, "zh");
    assert_eq!(cfg.constants.working_days_per_month, 22);
    assert_eq!(
        cfg.constants.contrast_price_per_ml,
        EngineConstants::default().contrast_price_per_ml
    );
    assert_eq!(cfg.defaults.target_device_id, "Bayer-Centargo");
}

#[test]
fn zero_divisor_constant_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[constants]\nconsumable_change_amortization_patients = 0\n").unwrap();

    assert!(matches!(
        load_from(&path),
        Err(ConfigError::InvalidConstant("consumable_change_amortization_patients"))
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").unwrap();
    assert!(matches!(load_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        load_from(&dir.path().join("absent.toml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("en.toml"),
        "[results]\nroi = \"Payback\"\n",
    )
    .unwrap();
    let pack = dir.path().to_str().unwrap();

    let tr = Translator::new_with_pack("en-us", Some(pack));
    assert_eq!(tr.t(keys::RESULT_ROI), "Payback");
    assert_eq!(tr.t(keys::RESULT_ANNUAL_SAVINGS), "Total Annual Savings");
}

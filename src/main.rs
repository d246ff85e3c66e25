use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use ct_injector_roi::app::{self, AppError};
use ct_injector_roi::config::{self, Config};
use ct_injector_roi::device_db;
use ct_injector_roi::i18n::{self, keys, Translator};
use ct_injector_roi::roi::{build_radar_data, VolumePeriod};
use ct_injector_roi::session::{self, ComparisonInputs, DeviceRole};
use ct_injector_roi::ui_cli;

/// CT 조영제 주입기 교체 ROI 계산기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "ct_injector_roi_cli", version, about)]
struct Cli {
    /// 표시 언어: auto, zh, zh-cn, en, en-us
    #[arg(long, global = true, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 장비 카탈로그 목록
    Devices,
    /// 두 장비의 ROI 비교
    Compare {
        #[arg(long)]
        base: String,
        #[arg(long)]
        target: String,
        /// 환자 수 (기간 단위는 --period)
        #[arg(long)]
        volume: Option<f64>,
        #[arg(long, value_enum)]
        period: Option<PeriodArg>,
        /// 조영증강 비율 [%]
        #[arg(long)]
        enhancement_rate: Option<f64>,
        #[arg(long)]
        ct_devices: Option<u32>,
        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 레이더 차트 데이터
    Radar {
        #[arg(long)]
        base: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        json: bool,
    },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeriodArg {
    Daily,
    Monthly,
}

impl From<PeriodArg> for VolumePeriod {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Daily => VolumePeriod::Daily,
            PeriodArg::Monthly => VolumePeriod::Monthly,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut cfg = match load_config(cli.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match try_run(cli.command, &mut cfg, &mut tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Session(e)) => {
            eprintln!(
                "{}: {}",
                tr.t(keys::ERROR_PREFIX),
                tr.fill(e.label_key(), &e.template_vars())
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, AppError> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_default()?,
    };
    if let Err(e) = device_db::validate_catalog() {
        log::warn!("장비 카탈로그 검사 실패: {e}");
    }
    Ok(cfg)
}

fn try_run(
    command: Option<Command>,
    cfg: &mut Config,
    tr: &mut Translator,
) -> Result<(), AppError> {
    match command.unwrap_or(Command::Interactive) {
        Command::Devices => ui_cli::handle_devices(tr),
        Command::Compare {
            base,
            target,
            volume,
            period,
            enhancement_rate,
            ct_devices,
            json,
        } => {
            let defaults = ComparisonInputs::from(&cfg.defaults);
            let inputs = ComparisonInputs {
                base_device_id: base,
                target_device_id: target,
                patient_volume: volume.unwrap_or(defaults.patient_volume),
                volume_period: period.map(Into::into).unwrap_or(defaults.volume_period),
                ct_device_count: ct_devices.unwrap_or(defaults.ct_device_count),
                enhancement_rate_percent: enhancement_rate
                    .unwrap_or(defaults.enhancement_rate_percent),
            };
            let outcome = session::compare(&inputs, &cfg.constants)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                ui_cli::print_outcome(tr, &outcome);
            }
        }
        Command::Radar { base, target, json } => {
            let base = session::lookup(DeviceRole::Base, &base)?;
            let target = session::lookup(DeviceRole::Target, &target)?;
            let radar = build_radar_data(&base.spec, &target.spec);
            if json {
                println!("{}", serde_json::to_string_pretty(&radar)?);
            } else {
                ui_cli::print_radar(tr, base, target, &radar);
            }
        }
        Command::Interactive => app::run(cfg, tr)?,
    }
    Ok(())
}

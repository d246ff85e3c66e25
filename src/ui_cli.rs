use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::device_db::{self, Device};
use crate::format::{format_currency, format_number, format_percent, format_volume};
use crate::i18n::{keys, Translator};
use crate::roi::parameter_comparison::{ParameterRow, ParameterUnit, ParameterValue, Trend};
use crate::roi::{RadarDatum, VolumePeriod};
use crate::session::{self, ComparisonInputs, ComparisonOutcome};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compare,
    Devices,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// 입력이 끝나면(EOF) 종료로 간주한다.
pub fn main_menu_from<R: BufRead>(
    tr: &Translator,
    input: &mut R,
) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPARE));
    println!("{}", tr.t(keys::MAIN_MENU_DEVICES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line_from(input, &tr.t(keys::PROMPT_MENU_SELECT)) {
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            other => other?,
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compare),
            "2" => return Ok(MenuChoice::Devices),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 비교 계산 메뉴. 입력값을 묻고 결과 보고서를 출력한다.
pub fn handle_compare(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INPUT_HEADING));
    let defaults = ComparisonInputs::from(&cfg.defaults);
    print_device_table(tr);

    let base = read_device(tr, keys::INPUT_BASE_DEVICE, &defaults.base_device_id)?;
    let target = read_device(tr, keys::INPUT_TARGET_DEVICE, &defaults.target_device_id)?;

    let period_default = if defaults.volume_period.is_daily() { 1 } else { 2 };
    let volume_period = match read_u32_or(tr, &tr.t(keys::INPUT_PERIOD_OPTIONS), period_default)? {
        2 => VolumePeriod::Monthly,
        _ => VolumePeriod::Daily,
    };
    let volume_label = if volume_period.is_daily() {
        keys::INPUT_VOLUME_DAILY
    } else {
        keys::INPUT_VOLUME_MONTHLY
    };
    let patient_volume = read_f64_or(tr, &tr.t(volume_label), defaults.patient_volume)?;
    let ct_device_count = read_u32_or(tr, &tr.t(keys::INPUT_CT_COUNT), defaults.ct_device_count)?;
    let enhancement_rate_percent = read_f64_or(
        tr,
        &tr.t(keys::INPUT_ENHANCEMENT_RATE),
        defaults.enhancement_rate_percent,
    )?;

    let inputs = ComparisonInputs {
        base_device_id: base,
        target_device_id: target,
        patient_volume,
        volume_period,
        ct_device_count,
        enhancement_rate_percent,
    };
    match session::compare(&inputs, &cfg.constants) {
        Ok(outcome) => print_outcome(tr, &outcome),
        Err(e) => println!(
            "{}: {}",
            tr.t(keys::ERROR_PREFIX),
            tr.fill(e.label_key(), &e.template_vars())
        ),
    }
    Ok(())
}

/// 장비 목록 메뉴.
pub fn handle_devices(tr: &Translator) {
    println!("{}", tr.t(keys::DEVICES_HEADING));
    println!(
        "{}",
        tr.fill(
            keys::DEVICES_CATALOG_VERSION,
            &[
                ("version", device_db::VERSION.to_string()),
                ("updated", device_db::LAST_UPDATED.to_string()),
            ],
        )
    );
    print_device_table(tr);
}

/// 설정 메뉴. 언어가 바뀌면 새 언어 코드를 돌려준다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<Option<String>, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), tr.language_code());
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => None,
        "1" => Some("zh-cn".to_string()),
        "2" => Some("en-us".to_string()),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            None
        }
    };
    if let Some(code) = &changed {
        cfg.language = code.clone();
    }

    let rate = read_f64_or(
        tr,
        &tr.t(keys::SETTINGS_DEFAULT_RATE),
        cfg.defaults.enhancement_rate_percent,
    )?;
    if (0.0..=100.0).contains(&rate) {
        cfg.defaults.enhancement_rate_percent = rate;
    } else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(changed)
}

/// 장비 번호 목록(1부터)을 출력한다.
pub fn print_device_table(tr: &Translator) {
    for (i, d) in device_db::devices().iter().enumerate() {
        let mark = if d.is_base_candidate {
            tr.t(keys::DEVICES_BASE_MARK)
        } else {
            "".into()
        };
        println!("{:>2}) {:<22} {:<22} {}", i + 1, d.id, d.display_name(), mark);
    }
}

/// 비교 결과 보고서를 출력한다.
pub fn print_outcome(tr: &Translator, outcome: &ComparisonOutcome) {
    let r = &outcome.result;
    let s = &outcome.summary;
    println!("{}", tr.t(keys::RESULTS_HEADING));
    println!(
        "{}",
        tr.fill(
            keys::RESULT_COMPARED_WITH,
            &[("device", outcome.base.display_name())]
        )
    );
    let rows = [
        (keys::RESULT_TIME_EFFICIENCY, format_currency(r.delta_p)),
        (keys::RESULT_COST_EFFICIENCY, format_currency(r.delta_v)),
        (keys::RESULT_MONTHLY_SAVINGS, format_currency(r.monthly_savings)),
        (keys::RESULT_ANNUAL_SAVINGS, format_currency(r.annual_savings)),
        (keys::RESULT_ROI, format_percent(r.roi)),
        (keys::RESULT_CONTRAST_SAVINGS, format_volume(r.contrast_savings)),
        (
            keys::RESULT_ADDITIONAL_REVENUE,
            format!("{}{}", format_currency(r.additional_revenue), tr.t(keys::UNIT_PER_MONTH)),
        ),
        (
            keys::RESULT_EFFICIENCY_IMPROVEMENT,
            s.efficiency_improvement_percent
                .map(format_percent)
                .unwrap_or_else(|| tr.t(keys::RESULT_NOT_AVAILABLE).into_owned()),
        ),
    ];
    for (key, value) in rows {
        println!("  {:<28} {value}", tr.t(key));
    }
    println!(
        "  {}",
        tr.fill(
            keys::RESULT_HOURS_SAVED,
            &[("hours", format_number(s.monthly_hours_saved, 1))]
        )
    );
    println!(
        "  {} {}",
        tr.t(keys::RESULT_EXTRA_EXAMS),
        format_number(outcome.extra_exams, 1)
    );
    println!(
        "  {}",
        tr.fill(
            keys::RESULT_CONTRAST_VALUE,
            &[("value", format_currency(s.contrast_savings_value))]
        )
    );

    println!("\n{}", tr.t(keys::RESULT_PERFORMANCE_COMPARISON));
    print_radar(tr, outcome.base, outcome.target, &outcome.radar);

    println!("\n{}", tr.t(keys::RESULT_PARAMETER_COMPARISON));
    print_parameters(tr, outcome.base, outcome.target, &outcome.parameters);

    println!("\n{}", tr.t(keys::RESULT_CONCLUSION_HEADING));
    println!("{}", conclusion_text(tr, outcome));
}

/// 결론 문단. 스마트 프로토콜 지원 장비면 안내 문장을 덧붙인다.
pub fn conclusion_text(tr: &Translator, outcome: &ComparisonOutcome) -> String {
    let mut text = tr.fill(
        keys::RESULT_CONCLUSION,
        &[
            ("target", outcome.target.display_name()),
            ("base", outcome.base.display_name()),
            ("hours", format_number(outcome.summary.monthly_hours_saved, 1)),
            ("roi", format_percent(outcome.result.roi)),
        ],
    );
    if outcome.summary.target_has_smart_protocol {
        text.push(' ');
        text.push_str(&tr.t(keys::RESULT_SMART_PROTOCOL_NOTE));
    }
    format!("{text} [{}]", tr.t(outcome.summary.verdict.label_key()))
}

pub fn print_radar(tr: &Translator, base: &Device, target: &Device, radar: &[RadarDatum]) {
    println!(
        "  {:<24} {:>14} {:>14}",
        "",
        target.model,
        base.model
    );
    for d in radar {
        println!(
            "  {:<24} {:>14} {:>14}",
            tr.t(d.subject.label_key()),
            format_number(d.target_value, 1),
            format_number(d.comparison_value, 1)
        );
    }
}

fn print_parameters(tr: &Translator, base: &Device, target: &Device, rows: &[ParameterRow]) {
    println!(
        "  {:<24} {:>14} {:>14}   {}",
        tr.t(keys::SPEC_PARAMETER),
        target.model,
        base.model,
        tr.t(keys::SPEC_DIFFERENCE)
    );
    for row in rows {
        let unit = unit_suffix(tr, row.parameter.unit());
        let trend = match row.trend {
            Trend::Better => tr.t(keys::TREND_BETTER),
            Trend::Worse => tr.t(keys::TREND_WORSE),
            Trend::Equal => tr.t(keys::TREND_EQUAL),
        };
        let diff = row
            .difference()
            .filter(|d| *d > 0.0)
            .map(|d| format!("{}{unit} ", format_number(d, 2)))
            .unwrap_or_default();
        println!(
            "  {:<24} {:>14} {:>14}   {diff}{trend}",
            tr.t(row.parameter.label_key()),
            value_text(tr, row.target, &unit),
            value_text(tr, row.base, &unit)
        );
    }
}

fn unit_suffix(tr: &Translator, unit: ParameterUnit) -> String {
    match unit {
        ParameterUnit::Minutes => format!(" {}", tr.t(keys::UNIT_MINUTES)),
        ParameterUnit::Percent => tr.t(keys::UNIT_PERCENT).into_owned(),
        ParameterUnit::Score => format!(" {}", tr.t(keys::UNIT_SCORE)),
        ParameterUnit::None => String::new(),
    }
}

fn value_text(tr: &Translator, value: ParameterValue, unit: &str) -> String {
    match value {
        ParameterValue::Number(v) => format!("{}{unit}", format_number(v, 2)),
        ParameterValue::Flag(true) => tr.t(keys::VALUE_YES).into_owned(),
        ParameterValue::Flag(false) => tr.t(keys::VALUE_NO).into_owned(),
    }
}

/// 장비 번호 또는 ID를 입력받는다. 빈 입력은 기본값.
fn read_device(tr: &Translator, label_key: &str, default_id: &str) -> Result<String, AppError> {
    let prompt = format!(
        "{} - {} {}: ",
        tr.t(label_key),
        tr.t(keys::INPUT_DEVICE_NUMBER),
        tr.fill(keys::PROMPT_KEEP_DEFAULT, &[("value", default_id.to_string())])
    );
    let sel = read_line(&prompt)?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(default_id.to_string());
    }
    let id = sel
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| device_db::devices().get(i))
        .map(|d| d.id.to_string())
        .unwrap_or_else(|| sel.to_string());
    Ok(id)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 한 줄을 읽는다. 읽은 바이트가 0이면 `UnexpectedEof` 오류.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64_or(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    let prompt = format!(
        "{label} {}: ",
        tr.fill(keys::PROMPT_KEEP_DEFAULT, &[("value", format_number(default, 2))])
    );
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, label: &str, default: u32) -> Result<u32, AppError> {
    let prompt = format!(
        "{label} {}: ",
        tr.fill(keys::PROMPT_KEEP_DEFAULT, &[("value", default.to_string())])
    );
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn closed_input_exits_menu() {
        let tr = Translator::new("en");
        let choice = main_menu_from(&tr, &mut Cursor::new("")).unwrap();
        assert_eq!(choice, MenuChoice::Exit);
    }

    #[test]
    fn invalid_selection_then_eof_exits() {
        let tr = Translator::new("en");
        let choice = main_menu_from(&tr, &mut Cursor::new("9\n")).unwrap();
        assert_eq!(choice, MenuChoice::Exit);
    }

    #[test]
    fn menu_reads_selection() {
        let tr = Translator::new("zh");
        let choice = main_menu_from(&tr, &mut Cursor::new("x\n2\n")).unwrap();
        assert_eq!(choice, MenuChoice::Devices);
    }

    #[test]
    fn read_line_reports_eof() {
        let err = read_line_from(&mut Cursor::new(""), "> ").unwrap_err();
        assert!(matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
        assert_eq!(read_line_from(&mut Cursor::new("1\n"), "> ").unwrap(), "1\n");
    }
}

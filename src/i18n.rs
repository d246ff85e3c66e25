use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_DEVICES: &str = "main_menu.devices";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const NAV_PARAMETERS: &str = "nav.parameters";
    pub const NAV_RESULTS: &str = "nav.results";
    pub const NAV_BACK_TO_PARAMETERS: &str = "nav.back_to_parameters";
    pub const LANGUAGE_TOGGLE: &str = "nav.language_toggle";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const INPUT_BASE_DEVICE: &str = "input.base_device";
    pub const INPUT_TARGET_DEVICE: &str = "input.target_device";
    pub const INPUT_PATIENT_VOLUME: &str = "input.patient_volume";
    pub const INPUT_VOLUME_DAILY: &str = "input.volume_daily";
    pub const INPUT_VOLUME_MONTHLY: &str = "input.volume_monthly";
    pub const INPUT_PERIOD_OPTIONS: &str = "input.period_options";
    pub const INPUT_CT_COUNT: &str = "input.ct_count";
    pub const INPUT_ENHANCEMENT_RATE: &str = "input.enhancement_rate";
    pub const INPUT_CALCULATE: &str = "input.calculate";
    pub const INPUT_DEVICE_NUMBER: &str = "input.device_number";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULT_TIME_EFFICIENCY: &str = "results.time_efficiency";
    pub const RESULT_COST_EFFICIENCY: &str = "results.cost_efficiency";
    pub const RESULT_MONTHLY_SAVINGS: &str = "results.monthly_savings";
    pub const RESULT_ANNUAL_SAVINGS: &str = "results.annual_savings";
    pub const RESULT_ROI: &str = "results.roi";
    pub const RESULT_CONTRAST_SAVINGS: &str = "results.contrast_savings";
    pub const RESULT_ADDITIONAL_REVENUE: &str = "results.additional_revenue";
    pub const RESULT_EFFICIENCY_IMPROVEMENT: &str = "results.efficiency_improvement";
    pub const RESULT_HOURS_SAVED: &str = "results.hours_saved";
    pub const RESULT_CONTRAST_VALUE: &str = "results.contrast_value";
    pub const RESULT_EXTRA_EXAMS: &str = "results.extra_exams";
    pub const RESULT_COMPARED_WITH: &str = "results.compared_with";
    pub const RESULT_SAVINGS_CHART: &str = "results.savings_chart";
    pub const RESULT_PERFORMANCE_COMPARISON: &str = "results.performance_comparison";
    pub const RESULT_PARAMETER_COMPARISON: &str = "results.parameter_comparison";
    pub const RESULT_CONCLUSION_HEADING: &str = "results.conclusion_heading";
    pub const RESULT_CONCLUSION: &str = "results.conclusion";
    pub const RESULT_SMART_PROTOCOL_NOTE: &str = "results.smart_protocol_note";
    pub const RESULT_NO_RESULT: &str = "results.no_result";
    pub const RESULT_NOT_AVAILABLE: &str = "results.not_available";

    pub const METRIC_CLINICAL_ACCURACY: &str = "metric.clinical_accuracy";
    pub const METRIC_WORK_EFFICIENCY: &str = "metric.work_efficiency";
    pub const METRIC_USABILITY: &str = "metric.usability";
    pub const METRIC_RESEARCH_VALUE: &str = "metric.research_value";
    pub const METRIC_MAINTENANCE: &str = "metric.maintenance_convenience";
    pub const METRIC_CONTRAST_SAVING: &str = "metric.contrast_saving";

    pub const SPEC_PARAMETER: &str = "spec.parameter";
    pub const SPEC_DIFFERENCE: &str = "spec.difference";
    pub const SPEC_CONSUMABLE_CHANGE_TIME: &str = "spec.consumable_change_time";
    pub const SPEC_EXAM_TIME: &str = "spec.exam_time";
    pub const SPEC_DEPRECIATION: &str = "spec.depreciation";
    pub const SPEC_INFORMATION_SYSTEM: &str = "spec.information_system";
    pub const SPEC_SMART_PROTOCOL: &str = "spec.smart_protocol";

    pub const TREND_BETTER: &str = "trend.better";
    pub const TREND_WORSE: &str = "trend.worse";
    pub const TREND_EQUAL: &str = "trend.equal";

    pub const VERDICT_WORTHWHILE: &str = "verdict.worthwhile";
    pub const VERDICT_CAUTIOUS: &str = "verdict.cautious";

    pub const UNIT_MINUTES: &str = "unit.minutes";
    pub const UNIT_PERCENT: &str = "unit.percent";
    pub const UNIT_SCORE: &str = "unit.score";
    pub const UNIT_PER_MONTH: &str = "unit.per_month";
    pub const VALUE_YES: &str = "value.yes";
    pub const VALUE_NO: &str = "value.no";

    pub const DEVICES_HEADING: &str = "devices.heading";
    pub const DEVICES_BASE_MARK: &str = "devices.base_mark";
    pub const DEVICES_CATALOG_VERSION: &str = "devices.catalog_version";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_DEFAULT_RATE: &str = "settings.default_rate";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_UNKNOWN_DEVICE: &str = "error.unknown_device";
    pub const ERROR_NON_POSITIVE_VOLUME: &str = "error.non_positive_volume";
    pub const ERROR_RATE_OUT_OF_RANGE: &str = "error.rate_out_of_range";
    pub const ERROR_NO_CT_DEVICES: &str = "error.no_ct_devices";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Zh,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Zh
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Zh => "zh-cn",
            Language::En => "en-us",
        }
    }

    /// 중/영 전환 대상 언어.
    pub fn toggled(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(zh/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 zh로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 지정 디렉터리, `locales/` 순으로 찾고 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            log::debug!("언어팩 적용: {lang_code}");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key).map(String::as_str))
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며 영어 번역이 없으면 중국어를 쓴다.
    /// 어디에도 없으면 키 자체를 돌려준다.
    pub fn t(&self, key: &str) -> Cow<'_, str> {
        if let Some(v) = self.lookup(key) {
            return Cow::Borrowed(v);
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| zh(key)),
            Language::Zh => zh(key),
        };
        match builtin {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(key.to_string()),
        }
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// 템플릿의 `{key}`를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "zh-cn".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "zh" | "zh-cn" | "cn" => Some("zh-cn".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        other if other.starts_with("zh") => Some("zh-cn".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "zh" => Some("zh-cn".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LANG", "LC_ALL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 플랫 맵 또는 [section] 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            log::warn!("언어팩을 해석할 수 없음: {}", path.display());
        }
        map
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn zh(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "错误",
        APP_EXIT => "程序已退出。",
        APP_TITLE => "CT增强造影投资回报率计算器",
        APP_SUBTITLE => "数据可视化分析工具",
        MAIN_MENU_TITLE => "\n=== CT增强造影投资回报率计算器 ===",
        MAIN_MENU_COMPARE => "1) 设备对比计算",
        MAIN_MENU_DEVICES => "2) 设备列表",
        MAIN_MENU_SETTINGS => "3) 设置",
        MAIN_MENU_EXIT => "0) 退出",
        PROMPT_MENU_SELECT => "请选择菜单: ",
        INVALID_SELECTION_RETRY => "输入无效，请重新选择。",
        ERROR_INVALID_NUMBER => "请输入数字。",
        NAV_PARAMETERS => "参数设置",
        NAV_RESULTS => "结果分析",
        NAV_BACK_TO_PARAMETERS => "返回参数设置",
        LANGUAGE_TOGGLE => "English",
        INPUT_HEADING => "\n-- 参数配置 --",
        INPUT_BASE_DEVICE => "基准设备",
        INPUT_TARGET_DEVICE => "目标设备",
        INPUT_PATIENT_VOLUME => "患者量",
        INPUT_VOLUME_DAILY => "日患者量",
        INPUT_VOLUME_MONTHLY => "月患者量",
        INPUT_PERIOD_OPTIONS => "患者量类型: 1=日 2=月",
        INPUT_CT_COUNT => "CT设备数量",
        INPUT_ENHANCEMENT_RATE => "CT增强率 (%)",
        INPUT_CALCULATE => "计算投资回报",
        INPUT_DEVICE_NUMBER => "请输入设备编号",
        PROMPT_KEEP_DEFAULT => "(回车保持 {value})",
        RESULTS_HEADING => "\n-- 投资回报分析结果 --",
        RESULT_TIME_EFFICIENCY => "时间效益 (∆P)",
        RESULT_COST_EFFICIENCY => "成本效益 (∆V)",
        RESULT_MONTHLY_SAVINGS => "月度总节省",
        RESULT_ANNUAL_SAVINGS => "年度节省",
        RESULT_ROI => "投资回报率",
        RESULT_CONTRAST_SAVINGS => "月造影剂节省",
        RESULT_ADDITIONAL_REVENUE => "潜在额外收益",
        RESULT_EFFICIENCY_IMPROVEMENT => "工作效率提升",
        RESULT_HOURS_SAVED => "每月节省 {hours} 工作小时",
        RESULT_CONTRAST_VALUE => "价值约 {value}",
        RESULT_EXTRA_EXAMS => "可增加检查数量",
        RESULT_COMPARED_WITH => "相比 {device}",
        RESULT_SAVINGS_CHART => "经济效益对比",
        RESULT_PERFORMANCE_COMPARISON => "设备性能对比",
        RESULT_PARAMETER_COMPARISON => "参数对比",
        RESULT_CONCLUSION_HEADING => "分析结论",
        RESULT_CONCLUSION => {
            "使用 {target} 相比 {base}，每月可节省 {hours} 个工作小时，投资回报率为 {roi}。"
        }
        RESULT_SMART_PROTOCOL_NOTE => {
            "其智能协议可带来高价值的对比剂节省，直接转化为经济效益和患者安全性提升。"
        }
        RESULT_NO_RESULT => "暂无计算结果。",
        RESULT_NOT_AVAILABLE => "不适用",
        METRIC_CLINICAL_ACCURACY => "临床精准度",
        METRIC_WORK_EFFICIENCY => "工作效率",
        METRIC_USABILITY => "易用性",
        METRIC_RESEARCH_VALUE => "科研附加值",
        METRIC_MAINTENANCE => "维护便捷性",
        METRIC_CONTRAST_SAVING => "造影剂节省量",
        SPEC_PARAMETER => "参数",
        SPEC_DIFFERENCE => "对比",
        SPEC_CONSUMABLE_CHANGE_TIME => "耗材更换时间",
        SPEC_EXAM_TIME => "单次检查总耗时",
        SPEC_DEPRECIATION => "10年折旧率",
        SPEC_INFORMATION_SYSTEM => "信息化支持",
        SPEC_SMART_PROTOCOL => "智能协议支持",
        TREND_BETTER => "更优",
        TREND_WORSE => "较差",
        TREND_EQUAL => "相同",
        VERDICT_WORTHWHILE => "高投资价值",
        VERDICT_CAUTIOUS => "投资谨慎",
        UNIT_MINUTES => "分钟",
        UNIT_PERCENT => "%",
        UNIT_SCORE => "分",
        UNIT_PER_MONTH => "/月",
        VALUE_YES => "是",
        VALUE_NO => "否",
        DEVICES_HEADING => "\n-- 设备列表 --",
        DEVICES_BASE_MARK => "(基准候选)",
        DEVICES_CATALOG_VERSION => "数据版本 {version} (更新于 {updated})",
        SETTINGS_HEADING => "\n-- 设置 --",
        SETTINGS_CURRENT_LANGUAGE => "当前语言:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 中文  2) English",
        SETTINGS_PROMPT_CHANGE => "输入编号修改 (回车取消): ",
        SETTINGS_DEFAULT_RATE => "默认CT增强率 (%)",
        SETTINGS_INVALID => "输入无效，未修改。",
        SETTINGS_SAVED => "设置已保存。",
        ERROR_UNKNOWN_DEVICE => "找不到设备: {id}",
        ERROR_NON_POSITIVE_VOLUME => "患者量必须大于0。",
        ERROR_RATE_OUT_OF_RANGE => "CT增强率必须在0到100之间。",
        ERROR_NO_CT_DEVICES => "CT设备数量至少为1。",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        APP_TITLE => "CT Contrast Enhancement ROI Calculator",
        APP_SUBTITLE => "Data Visualization Analysis Tool",
        MAIN_MENU_TITLE => "\n=== CT Contrast Enhancement ROI Calculator ===",
        MAIN_MENU_COMPARE => "1) Compare devices",
        MAIN_MENU_DEVICES => "2) Device list",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        NAV_PARAMETERS => "Parameter Settings",
        NAV_RESULTS => "Results Analysis",
        NAV_BACK_TO_PARAMETERS => "Back to Settings",
        LANGUAGE_TOGGLE => "中文",
        INPUT_HEADING => "\n-- Parameter Configuration --",
        INPUT_BASE_DEVICE => "Baseline Device",
        INPUT_TARGET_DEVICE => "Target Device",
        INPUT_PATIENT_VOLUME => "Patient Volume",
        INPUT_VOLUME_DAILY => "Daily Patient Volume",
        INPUT_VOLUME_MONTHLY => "Monthly Patient Volume",
        INPUT_PERIOD_OPTIONS => "Volume type: 1=daily 2=monthly",
        INPUT_CT_COUNT => "CT Device Count",
        INPUT_ENHANCEMENT_RATE => "CT Enhancement Rate (%)",
        INPUT_CALCULATE => "Calculate ROI",
        INPUT_DEVICE_NUMBER => "Enter device number",
        PROMPT_KEEP_DEFAULT => "(Enter keeps {value})",
        RESULTS_HEADING => "\n-- Return on Investment Analysis Results --",
        RESULT_TIME_EFFICIENCY => "Time Efficiency (ΔP)",
        RESULT_COST_EFFICIENCY => "Cost Efficiency (ΔV)",
        RESULT_MONTHLY_SAVINGS => "Total Monthly Savings",
        RESULT_ANNUAL_SAVINGS => "Total Annual Savings",
        RESULT_ROI => "Return on Investment",
        RESULT_CONTRAST_SAVINGS => "Monthly Contrast Agent Savings",
        RESULT_ADDITIONAL_REVENUE => "Potential Additional Revenue",
        RESULT_EFFICIENCY_IMPROVEMENT => "Work Efficiency Improvement",
        RESULT_HOURS_SAVED => "{hours} work hours saved per month",
        RESULT_CONTRAST_VALUE => "Worth about {value}",
        RESULT_EXTRA_EXAMS => "Additional Exams Possible",
        RESULT_COMPARED_WITH => "Compared with {device}",
        RESULT_SAVINGS_CHART => "Economic Benefit Comparison",
        RESULT_PERFORMANCE_COMPARISON => "Device Performance Comparison",
        RESULT_PARAMETER_COMPARISON => "Parameter Comparison",
        RESULT_CONCLUSION_HEADING => "Conclusion",
        RESULT_CONCLUSION => {
            "Using {target} instead of {base} saves {hours} work hours per month with an ROI of {roi}."
        }
        RESULT_SMART_PROTOCOL_NOTE => {
            "Its smart protocol delivers valuable contrast savings that translate into economic benefit and patient safety."
        }
        RESULT_NO_RESULT => "No calculation result yet.",
        RESULT_NOT_AVAILABLE => "N/A",
        METRIC_CLINICAL_ACCURACY => "Clinical Accuracy",
        METRIC_WORK_EFFICIENCY => "Work Efficiency",
        METRIC_USABILITY => "Usability",
        METRIC_RESEARCH_VALUE => "Research Value",
        METRIC_MAINTENANCE => "Maintenance Convenience",
        METRIC_CONTRAST_SAVING => "Contrast Savings",
        SPEC_PARAMETER => "Parameter",
        SPEC_DIFFERENCE => "Difference",
        SPEC_CONSUMABLE_CHANGE_TIME => "Consumable Change Time",
        SPEC_EXAM_TIME => "Total Exam Time",
        SPEC_DEPRECIATION => "10-Year Depreciation Rate",
        SPEC_INFORMATION_SYSTEM => "Information Support",
        SPEC_SMART_PROTOCOL => "Smart Protocol Support",
        TREND_BETTER => "better",
        TREND_WORSE => "worse",
        TREND_EQUAL => "same",
        VERDICT_WORTHWHILE => "High investment value",
        VERDICT_CAUTIOUS => "Invest with caution",
        UNIT_MINUTES => "min",
        UNIT_PERCENT => "%",
        UNIT_SCORE => "pts",
        UNIT_PER_MONTH => "/month",
        VALUE_YES => "Yes",
        VALUE_NO => "No",
        DEVICES_HEADING => "\n-- Device List --",
        DEVICES_BASE_MARK => "(baseline candidate)",
        DEVICES_CATALOG_VERSION => "Catalog version {version} (updated {updated})",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 中文  2) English",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_DEFAULT_RATE => "Default CT enhancement rate (%)",
        SETTINGS_INVALID => "Invalid input, nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_UNKNOWN_DEVICE => "Device not found: {id}",
        ERROR_NON_POSITIVE_VOLUME => "Patient volume must be greater than 0.",
        ERROR_RATE_OUT_OF_RANGE => "Enhancement rate must be between 0 and 100.",
        ERROR_NO_CT_DEVICES => "At least one CT device is required.",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_falls_back_to_chinese() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::Zh);
        assert_eq!(tr.t(keys::RESULT_ROI), "投资回报率");
    }

    #[test]
    fn english_bundle_resolves() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.t(keys::METRIC_USABILITY), "Usability");
    }

    #[test]
    fn device_prompt_and_extra_exam_labels_resolve() {
        for code in ["zh", "en"] {
            let tr = Translator::new(code);
            for key in [keys::INPUT_DEVICE_NUMBER, keys::RESULT_EXTRA_EXAMS] {
                assert_ne!(tr.t(key), key, "{code}");
            }
        }
        assert_eq!(
            Translator::new("en").t(keys::RESULT_EXTRA_EXAMS),
            "Additional Exams Possible"
        );
    }

    #[test]
    fn missing_key_returns_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn normalize_accepts_aliases() {
        assert_eq!(normalize_lang("EN-GB").as_deref(), Some("en-us"));
        assert_eq!(normalize_lang("zh_TW").as_deref(), Some("zh-cn"));
        assert_eq!(normalize_lang("auto"), None);
        assert_eq!(resolve_language("en", Some("zh")), "en-us");
        assert_eq!(resolve_language("auto", Some("zh")), "zh-cn");
    }

    #[test]
    fn nested_pack_flattens_keys() {
        let map = parse_toml_to_map("[results]\nroi = \"ROI\"\n").unwrap();
        assert_eq!(map.get("results.roi").map(String::as_str), Some("ROI"));
    }

    #[test]
    fn template_fills_placeholders() {
        let out = fill_template("{a} vs {b}", &[("a", "X".into()), ("b", "Y".into())]);
        assert_eq!(out, "X vs Y");
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{env, fs, path::Path};

use ct_injector_roi::{
    config::{self, Config},
    device_db,
    format::{format_currency, format_number, format_percent, format_volume},
    i18n::{self, keys, Translator},
    roi::parameter_comparison::{ParameterUnit, ParameterValue, Trend},
    roi::{RadarDatum, VolumePeriod},
    session::{ComparisonInputs, ComparisonOutcome, Session, SessionError},
    ui_cli,
};

const TARGET_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const BASE_COLOR: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
const POSITIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
const NEGATIVE_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let cli_lang = parse_lang_arg(&args);

    let mut app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용: {e}");
            Config::default()
        }
    };
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    if let Err(e) = device_db::validate_catalog() {
        log::warn!("장비 카탈로그 검사 실패: {e}");
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1180.0, 820.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "CT Injector ROI",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                log::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

/// `--lang xx`, `--lang=xx`, `-L xx` 중 마지막 값을 찾는다.
fn parse_lang_arg(args: &[String]) -> Option<String> {
    let mut lang = None;
    let mut iter = args.iter().skip(1);
    while let Some(a) = iter.next() {
        if let Some(val) = a.strip_prefix("--lang=") {
            lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if let Some(val) = iter.next() {
                lang = Some(val.clone());
            }
        }
    }
    lang
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 기본 폰트 앞에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 중국어 표시용 폰트를 찾는다.
/// 1) assets/fonts 2) Windows 시스템 폰트 3) 리눅스/맥 공용 경로 순.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = [
        "assets/fonts/NotoSansSC-Regular.ttf",
        "assets/fonts/msyh.ttc",
    ]
    .into_iter()
    .map(std::path::PathBuf::from)
    .collect();
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["msyh.ttc", "msyh.ttf", "simhei.ttf", "simsun.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    candidates.extend(
        [
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
            "/System/Library/Fonts/PingFang.ttc",
            "/System/Library/Fonts/STHeiti Light.ttc",
        ]
        .into_iter()
        .map(std::path::PathBuf::from),
    );

    for p in candidates.iter().filter(|p| p.exists()) {
        let bytes = fs::read(p)
            .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
        apply_font_bytes(ctx, bytes, "cjk_font");
        log::debug!("폰트 적용: {}", p.display());
        return Ok(());
    }
    Err("CJK font not found; Chinese labels may not render.".into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Parameters,
    Results,
}

struct GuiApp {
    config: Config,
    tr: Translator,
    tab: Tab,
    session: Session,
    /// 마지막 계산 실패
    error: Option<SessionError>,
}

impl GuiApp {
    fn new(config: Config) -> Self {
        let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
        let session = Session::new(ComparisonInputs::from(&config.defaults), config.constants);
        Self {
            config,
            tr,
            tab: Tab::Parameters,
            session,
            error: None,
        }
    }

    fn t(&self, key: &str) -> String {
        self.tr.t(key).into_owned()
    }

    /// 중/영 전환. 설정 값도 함께 바꾼다.
    fn toggle_language(&mut self) {
        let next = self.tr.language().toggled().as_code();
        self.tr = Translator::new_with_pack(next, self.config.language_pack_dir.as_deref());
        self.config.language = next.to_string();
    }

    fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            log::warn!("설정 저장 실패: {e}");
        }
    }

    /// 현재 입력으로 계산한다. 성공하면 결과 탭으로 이동한다.
    fn calculate(&mut self) {
        match self.session.calculate() {
            Ok(_) => {
                self.error = None;
                self.tab = Tab::Results;
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn ui_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.t(keys::APP_TITLE));
            ui.label(self.t(keys::APP_SUBTITLE));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(self.t(keys::LANGUAGE_TOGGLE)).clicked() {
                    self.toggle_language();
                    self.persist_config();
                }
            });
        });
        ui.horizontal(|ui| {
            for (tab, key) in [
                (Tab::Parameters, keys::NAV_PARAMETERS),
                (Tab::Results, keys::NAV_RESULTS),
            ] {
                let label = self.t(key);
                ui.selectable_value(&mut self.tab, tab, label);
            }
        });
    }

    fn device_combo(ui: &mut egui::Ui, id_source: &str, selected: &mut String) {
        let selected_text = device_db::find_device(selected)
            .map(|d| d.display_name())
            .unwrap_or_else(|| selected.clone());
        egui::ComboBox::from_id_source(id_source)
            .selected_text(selected_text)
            .width(220.0)
            .show_ui(ui, |ui| {
                for opt in device_db::device_options() {
                    ui.selectable_value(selected, opt.id.to_string(), opt.name);
                }
            });
    }

    fn ui_parameters(&mut self, ui: &mut egui::Ui) {
        let labels = [
            self.t(keys::INPUT_BASE_DEVICE),
            self.t(keys::INPUT_TARGET_DEVICE),
            self.t(keys::INPUT_PATIENT_VOLUME),
            self.t(keys::INPUT_CT_COUNT),
            self.t(keys::INPUT_ENHANCEMENT_RATE),
        ];
        let daily = self.t(keys::INPUT_VOLUME_DAILY);
        let monthly = self.t(keys::INPUT_VOLUME_MONTHLY);
        let inputs = &mut self.session.inputs;

        egui::Grid::new("param_grid")
            .num_columns(2)
            .spacing([24.0, 12.0])
            .show(ui, |ui| {
                ui.label(&labels[0]);
                Self::device_combo(ui, "base_device", &mut inputs.base_device_id);
                ui.end_row();

                ui.label(&labels[1]);
                Self::device_combo(ui, "target_device", &mut inputs.target_device_id);
                ui.end_row();

                ui.label(&labels[2]);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::DragValue::new(&mut inputs.patient_volume)
                            .clamp_range(1.0..=100_000.0)
                            .speed(1.0),
                    );
                    ui.selectable_value(&mut inputs.volume_period, VolumePeriod::Daily, daily);
                    ui.selectable_value(&mut inputs.volume_period, VolumePeriod::Monthly, monthly);
                });
                ui.end_row();

                ui.label(&labels[3]);
                ui.add(
                    egui::DragValue::new(&mut inputs.ct_device_count)
                        .clamp_range(1..=50)
                        .speed(0.1),
                );
                ui.end_row();

                ui.label(&labels[4]);
                ui.add(
                    egui::Slider::new(&mut inputs.enhancement_rate_percent, 0.0..=100.0)
                        .suffix("%"),
                );
                ui.end_row();
            });

        ui.add_space(16.0);
        let calc = egui::Button::new(self.t(keys::INPUT_CALCULATE)).min_size(egui::vec2(200.0, 36.0));
        if ui.add(calc).clicked() {
            self.calculate();
        }
        if let Some(err) = &self.error {
            ui.add_space(8.0);
            ui.colored_label(
                NEGATIVE_COLOR,
                format!(
                    "{}: {}",
                    self.tr.t(keys::ERROR_PREFIX),
                    self.tr.fill(err.label_key(), &err.template_vars())
                ),
            );
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let Some(outcome) = self.session.outcome().cloned() else {
            ui.label(self.t(keys::RESULT_NO_RESULT));
            if ui.button(self.t(keys::NAV_BACK_TO_PARAMETERS)).clicked() {
                self.tab = Tab::Parameters;
            }
            return;
        };
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(self.tr.fill(
                keys::RESULT_COMPARED_WITH,
                &[("device", outcome.base.display_name())],
            ));
            ui.add_space(8.0);
            self.ui_metric_cards(ui, &outcome);

            ui.add_space(16.0);
            ui.heading(self.t(keys::RESULT_SAVINGS_CHART));
            self.draw_savings_bars(ui, &outcome);

            ui.add_space(16.0);
            ui.heading(self.t(keys::RESULT_PERFORMANCE_COMPARISON));
            self.draw_radar(ui, &outcome);

            ui.add_space(16.0);
            ui.heading(self.t(keys::RESULT_PARAMETER_COMPARISON));
            self.ui_parameter_table(ui, &outcome);

            ui.add_space(16.0);
            ui.heading(self.t(keys::RESULT_CONCLUSION_HEADING));
            ui.label(ui_cli::conclusion_text(&self.tr, &outcome));

            ui.add_space(12.0);
            if ui.button(self.t(keys::NAV_BACK_TO_PARAMETERS)).clicked() {
                self.tab = Tab::Parameters;
            }
        });
    }

    fn ui_metric_cards(&self, ui: &mut egui::Ui, outcome: &ComparisonOutcome) {
        let r = &outcome.result;
        let s = &outcome.summary;
        let efficiency = s
            .efficiency_improvement_percent
            .map(format_percent)
            .unwrap_or_else(|| self.t(keys::RESULT_NOT_AVAILABLE));
        let cards = [
            (
                keys::RESULT_TIME_EFFICIENCY,
                format_currency(r.delta_p),
                self.tr.fill(
                    keys::RESULT_HOURS_SAVED,
                    &[("hours", format_number(s.monthly_hours_saved, 1))],
                ),
            ),
            (
                keys::RESULT_EXTRA_EXAMS,
                format_number(outcome.extra_exams, 1),
                String::new(),
            ),
            (keys::RESULT_COST_EFFICIENCY, format_currency(r.delta_v), String::new()),
            (
                keys::RESULT_ROI,
                format_percent(r.roi),
                self.t(s.verdict.label_key()),
            ),
            (
                keys::RESULT_MONTHLY_SAVINGS,
                format_currency(r.monthly_savings),
                format!("{}: {}", self.t(keys::RESULT_ANNUAL_SAVINGS), format_currency(r.annual_savings)),
            ),
            (
                keys::RESULT_CONTRAST_SAVINGS,
                format_volume(r.contrast_savings),
                self.tr.fill(
                    keys::RESULT_CONTRAST_VALUE,
                    &[("value", format_currency(s.contrast_savings_value))],
                ),
            ),
            (
                keys::RESULT_ADDITIONAL_REVENUE,
                format!("{}{}", format_currency(r.additional_revenue), self.t(keys::UNIT_PER_MONTH)),
                String::new(),
            ),
            (keys::RESULT_EFFICIENCY_IMPROVEMENT, efficiency, String::new()),
        ];
        ui.horizontal_wrapped(|ui| {
            for (key, value, note) in cards {
                egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
                    ui.set_min_width(150.0);
                    ui.vertical(|ui| {
                        ui.small(self.t(key));
                        ui.heading(value);
                        if !note.is_empty() {
                            ui.small(note);
                        }
                    });
                });
            }
        });
    }

    /// 월간 절감 항목을 가로 막대로 그린다. 음수는 붉은색.
    fn draw_savings_bars(&self, ui: &mut egui::Ui, outcome: &ComparisonOutcome) {
        let r = &outcome.result;
        let bars = [
            (keys::RESULT_TIME_EFFICIENCY, r.delta_p),
            (keys::RESULT_COST_EFFICIENCY, r.delta_v),
            (keys::RESULT_MONTHLY_SAVINGS, r.monthly_savings),
            (keys::RESULT_ADDITIONAL_REVENUE, r.additional_revenue),
        ];
        let max = bars
            .iter()
            .map(|(_, v)| v.abs())
            .fold(0.0_f64, f64::max)
            .max(1.0);
        let row_h = 28.0;
        let width = ui.available_width().min(760.0);
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(width, row_h * bars.len() as f32),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        let label_w = 200.0;
        let bar_w = (width - label_w - 110.0).max(40.0);
        let text_color = ui.visuals().text_color();
        for (i, (key, value)) in bars.iter().enumerate() {
            let y = rect.top() + row_h * i as f32;
            painter.text(
                egui::pos2(rect.left(), y + row_h / 2.0),
                egui::Align2::LEFT_CENTER,
                self.t(key),
                egui::FontId::proportional(13.0),
                text_color,
            );
            let len = (value.abs() / max) as f32 * bar_w;
            let bar = egui::Rect::from_min_size(
                egui::pos2(rect.left() + label_w, y + 5.0),
                egui::vec2(len, row_h - 10.0),
            );
            let color = if *value < 0.0 { NEGATIVE_COLOR } else { POSITIVE_COLOR };
            painter.rect_filled(bar, 3.0, color);
            painter.text(
                egui::pos2(bar.right() + 6.0, y + row_h / 2.0),
                egui::Align2::LEFT_CENTER,
                format_currency(*value),
                egui::FontId::proportional(12.0),
                text_color,
            );
        }
    }

    fn draw_radar(&self, ui: &mut egui::Ui, outcome: &ComparisonOutcome) {
        let size = egui::vec2(460.0, 360.0);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = 120.0;
        let grid_stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
        let text_color = ui.visuals().text_color();

        for level in 1..=5 {
            let r = radius * level as f32 / 5.0;
            let ring = radar_points(center, r, &[1.0; 6][..outcome.radar.len().min(6)], 1.0);
            painter.add(egui::Shape::closed_line(ring, grid_stroke));
        }
        for (i, d) in outcome.radar.iter().enumerate() {
            let angle = axis_angle(i, outcome.radar.len());
            let tip = center + egui::vec2(angle.cos(), angle.sin()) * radius;
            painter.line_segment([center, tip], grid_stroke);
            let label_pos = center + egui::vec2(angle.cos(), angle.sin()) * (radius + 24.0);
            painter.text(
                label_pos,
                egui::Align2::CENTER_CENTER,
                self.t(d.subject.label_key()),
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        let series = |f: fn(&RadarDatum) -> f64| -> Vec<f64> { outcome.radar.iter().map(f).collect() };
        let scale = outcome.radar.first().map(|d| d.scale_max).unwrap_or(10.0);
        for (values, color) in [
            (series(|d| d.comparison_value), BASE_COLOR),
            (series(|d| d.target_value), TARGET_COLOR),
        ] {
            let pts = radar_points(center, radius, &values, scale);
            painter.add(egui::Shape::convex_polygon(
                pts.clone(),
                color.gamma_multiply(0.25),
                egui::Stroke::NONE,
            ));
            painter.add(egui::Shape::closed_line(pts, egui::Stroke::new(2.0, color)));
        }

        let legend_y = rect.bottom() - 12.0;
        for (i, (name, color)) in [
            (outcome.target.display_name(), TARGET_COLOR),
            (outcome.base.display_name(), BASE_COLOR),
        ]
        .into_iter()
        .enumerate()
        {
            let x = rect.left() + 20.0 + 200.0 * i as f32;
            painter.circle_filled(egui::pos2(x, legend_y), 5.0, color);
            painter.text(
                egui::pos2(x + 10.0, legend_y),
                egui::Align2::LEFT_CENTER,
                name,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }
    }

    fn ui_parameter_table(&self, ui: &mut egui::Ui, outcome: &ComparisonOutcome) {
        egui::Grid::new("spec_grid")
            .striped(true)
            .num_columns(4)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                ui.strong(self.t(keys::SPEC_PARAMETER));
                ui.strong(outcome.target.display_name());
                ui.strong(outcome.base.display_name());
                ui.strong(self.t(keys::SPEC_DIFFERENCE));
                ui.end_row();
                for row in &outcome.parameters {
                    let unit = self.unit_suffix(row.parameter.unit());
                    ui.label(self.t(row.parameter.label_key()));
                    ui.label(self.value_text(row.target, &unit));
                    ui.label(self.value_text(row.base, &unit));
                    let (key, color) = match row.trend {
                        Trend::Better => (keys::TREND_BETTER, POSITIVE_COLOR),
                        Trend::Worse => (keys::TREND_WORSE, NEGATIVE_COLOR),
                        Trend::Equal => (keys::TREND_EQUAL, ui.visuals().weak_text_color()),
                    };
                    let diff = row
                        .difference()
                        .filter(|d| *d > 0.0)
                        .map(|d| format!("{}{unit} ", format_number(d, 2)))
                        .unwrap_or_default();
                    ui.colored_label(color, format!("{diff}{}", self.t(key)));
                    ui.end_row();
                }
            });
    }

    fn unit_suffix(&self, unit: ParameterUnit) -> String {
        match unit {
            ParameterUnit::Minutes => format!(" {}", self.t(keys::UNIT_MINUTES)),
            ParameterUnit::Percent => self.t(keys::UNIT_PERCENT),
            ParameterUnit::Score => format!(" {}", self.t(keys::UNIT_SCORE)),
            ParameterUnit::None => String::new(),
        }
    }

    fn value_text(&self, value: ParameterValue, unit: &str) -> String {
        match value {
            ParameterValue::Number(v) => format!("{}{unit}", format_number(v, 2)),
            ParameterValue::Flag(true) => self.t(keys::VALUE_YES),
            ParameterValue::Flag(false) => self.t(keys::VALUE_NO),
        }
    }
}

/// i번째 축의 각도. 첫 축이 위쪽을 향한다.
fn axis_angle(i: usize, n: usize) -> f32 {
    -std::f32::consts::FRAC_PI_2 + std::f32::consts::TAU * i as f32 / n.max(1) as f32
}

fn radar_points(center: egui::Pos2, radius: f32, values: &[f64], scale: f64) -> Vec<egui::Pos2> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let angle = axis_angle(i, values.len());
            let r = radius * (v / scale).clamp(0.0, 1.0) as f32;
            center + egui::vec2(angle.cos(), angle.sin()) * r
        })
        .collect()
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.ui_top_bar(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Parameters => self.ui_parameters(ui),
            Tab::Results => self.ui_results(ui),
        });
    }
}

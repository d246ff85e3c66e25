use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::session::SessionError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI 대화형 모드의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Compare => ui_cli::handle_compare(tr, config)?,
            MenuChoice::Devices => ui_cli::handle_devices(tr),
            MenuChoice::Settings => {
                if let Some(code) = ui_cli::handle_settings(tr, config)? {
                    *tr = Translator::new_with_pack(&code, config.language_pack_dir.as_deref());
                }
                config.save()?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

use crate::config::{Config, ConfigError};
use crate::engine;
use crate::i18n::{self, Translator};
use crate::input::InputParameters;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// 표준 입력이 닫혀 더 읽을 수 없는 경우.
    pub fn is_eof(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }

    /// 사용자에게 보여줄 메시지. 접두어까지 UI 언어로 맞춘다.
    pub fn localized(&self, tr: &Translator) -> String {
        let body = match self {
            AppError::Io(e) => format!("{}: {e}", tr.t(i18n::keys::ERROR_IO)),
            AppError::Config(e) => e.localized(tr),
            AppError::Json(e) => format!("{}: {e}", tr.t(i18n::keys::ERROR_JSON)),
        };
        format!("{}: {body}", tr.t(i18n::keys::ERROR_PREFIX))
    }
}

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 한 번의 분석을 수행하고 출력할 문자열을 돌려준다.
///
/// 비어 있는 감가상각률/신뢰도는 설정 파일의 기본값으로 채운다.
pub fn run_once(
    mut inputs: InputParameters,
    config: &Config,
    tr: &Translator,
    format: OutputFormat,
) -> Result<String, AppError> {
    inputs.depreciation_rate = inputs
        .depreciation_rate
        .or(Some(config.defaults.depreciation_rate));
    inputs.reliability_score = inputs
        .reliability_score
        .or(Some(config.defaults.reliability_score));

    let engine_cfg = config.engine_config().map_err(ConfigError::from)?;
    let analysis = engine::analyze(&inputs, &engine_cfg);
    tracing::info!(
        variant = ?config.variant,
        recommended = analysis.recommendation.is_some(),
        "analysis complete"
    );
    match format {
        OutputFormat::Text => Ok(ui_cli::render_report(tr, &analysis)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&analysis)? + "\n"),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu(tr)? {
            MenuChoice::Analyze => ui_cli::handle_analyze(tr, config),
            MenuChoice::Settings => ui_cli::handle_settings(tr, config).and_then(|()| {
                config.save()?;
                Ok(())
            }),
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            // 입력 도중 EOF: 더 물을 수 없으므로 종료 처리로 넘어간다
            Err(err) if err.is_eof() => {
                tracing::debug!("stdin closed, leaving menu loop");
                println!();
                break;
            }
            Err(err) => return Err(err),
        }
    }
    config.save()?;
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    Ok(())
}

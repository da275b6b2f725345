use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{EngineConfig, EngineError, TierBoundaries};
use crate::i18n::{keys, Translator};
use crate::input::{DEFAULT_DEPRECIATION_RATE, DEFAULT_RELIABILITY_SCORE};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 엔진 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineVariant {
    /// 감가상각/신뢰도 반영, 5년 기간, 경계 8/15/25/40
    Advanced,
    /// 시간×단가만 반영, 4년 기간, 경계 10/25/50/100
    Basic,
}

impl EngineVariant {
    pub fn preset(&self) -> EngineConfig {
        match self {
            EngineVariant::Advanced => EngineConfig::advanced(),
            EngineVariant::Basic => EngineConfig::basic(),
        }
    }
}

/// 입력이 비었을 때 쓰는 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    pub depreciation_rate: f64,
    pub reliability_score: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            depreciation_rate: DEFAULT_DEPRECIATION_RATE,
            reliability_score: DEFAULT_RELIABILITY_SCORE,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드(ko/en). 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    pub variant: EngineVariant,
    /// 프리셋 기간 대신 쓸 분석 기간 [년]
    pub horizon_years: Option<u32>,
    /// 프리셋 경계 대신 쓸 등급 경계 [%]
    pub tier_boundaries: Option<[f64; 4]>,
    pub defaults: InputDefaults,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            variant: EngineVariant::Advanced,
            horizon_years: None,
            tier_boundaries: None,
            defaults: InputDefaults::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ConfigError {
    /// UI 언어로 옮긴 오류 메시지. 하위 라이브러리 메시지는 원문 그대로 붙인다.
    pub fn localized(&self, tr: &Translator) -> String {
        match self {
            ConfigError::Io(e) => format!("{}: {e}", tr.t(keys::ERROR_CONFIG_IO)),
            ConfigError::Parse(e) => format!("{}: {e}", tr.t(keys::ERROR_CONFIG_PARSE)),
            ConfigError::Serialize(e) => format!("{}: {e}", tr.t(keys::ERROR_CONFIG_SERIALIZE)),
            ConfigError::Engine(EngineError::InvalidBoundaries(b)) => {
                format!("{}: {b:?}", tr.t(keys::ERROR_BOUNDARIES))
            }
            ConfigError::Engine(EngineError::ZeroHorizon) => {
                tr.t(keys::ERROR_ZERO_HORIZON).to_string()
            }
        }
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = parse(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "default configuration written");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

/// TOML 문자열에서 설정을 읽고 엔진 설정으로 변환 가능한지 검증한다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    cfg.engine_config()?;
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 로드한 경로(없으면 기본 경로)에 설정을 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)
    }

    /// 프리셋에 기간/경계 재정의를 적용한 엔진 설정.
    pub fn engine_config(&self) -> Result<EngineConfig, EngineError> {
        let mut engine = self.variant.preset();
        if let Some(years) = self.horizon_years {
            engine = engine.with_horizon(years)?;
        }
        if let Some([good, fair, poor, not_recommended]) = self.tier_boundaries {
            engine = engine.with_boundaries(TierBoundaries::new(
                good,
                fair,
                poor,
                not_recommended,
            )?);
        }
        Ok(engine)
    }
}

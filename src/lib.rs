//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 같은 엔진을 쓰도록 한다.

pub mod app;
pub mod config;
pub mod engine;
pub mod format;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod ui_cli;

pub use engine::{analyze, Analysis, EngineConfig};
pub use input::InputParameters;

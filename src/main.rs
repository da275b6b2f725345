use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use device_cost_analyzer::{
    app::{self, OutputFormat},
    config::{self, EngineVariant},
    i18n::{self, Translator},
    input::InputParameters,
    logging,
};

/// 장비 유지보수 비용과 감가상각을 계산하고 구매 권고를 제시한다.
///
/// 유지보수/장비가 옵션을 하나라도 주면 한 번 계산하고 끝내며,
/// 아무것도 주지 않으면 대화형 메뉴를 띄운다.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// 하루 가동 시간 [h]
    #[arg(long)]
    hours: Option<f64>,
    /// 시간당 유지보수 단가
    #[arg(long)]
    rate: Option<f64>,
    /// 장비 구매가
    #[arg(long = "device-cost")]
    device_cost: Option<f64>,
    /// 연간 감가상각률 [%]
    #[arg(long)]
    depreciation: Option<f64>,
    /// 신뢰도 점수 [0~100]
    #[arg(long)]
    reliability: Option<f64>,
    /// 엔진 프리셋 (설정 파일 값을 덮어쓴다)
    #[arg(long, value_enum)]
    variant: Option<EngineVariant>,
    /// 분석 기간 [년]
    #[arg(long)]
    horizon: Option<u32>,
    /// UI 언어 (ko, en, auto)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 디버그 로그 출력
    #[arg(long, short)]
    verbose: bool,
    /// 결과를 JSON으로 출력
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn inputs(&self) -> InputParameters {
        InputParameters {
            hours_per_day: self.hours,
            rate_per_hour: self.rate,
            device_cost: self.device_cost,
            depreciation_rate: self.depreciation,
            reliability_score: self.reliability,
        }
    }

    fn is_one_shot(&self) -> bool {
        self.hours.is_some() || self.rate.is_some() || self.device_cost.is_some()
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    // 설정 파일을 읽기 전 오류도 CLI 언어로 보고한다
    let mut tr = Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
    match try_run(cli, &mut tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "run failed");
            eprintln!("{}", err.localized(&tr));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli, tr: &mut Translator) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(Some(cli.config.as_path()))?;
    if let Some(variant) = cli.variant {
        cfg.variant = variant;
    }
    if cli.horizon.is_some() {
        cfg.horizon_years = cli.horizon;
    }
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    *tr = Translator::new_with_pack(&lang, None);

    if cli.is_one_shot() {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        print!("{}", app::run_once(cli.inputs(), &cfg, tr, format)?);
        return Ok(());
    }
    app::run(&mut cfg, tr)
}

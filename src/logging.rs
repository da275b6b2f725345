use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// tracing 구독자를 설치한다. 로그는 보고서와 섞이지 않도록 stderr로 보낸다.
///
/// `RUST_LOG`가 있으면 그 값을 따르고, 없으면 `verbose`에 따라 debug/warn 수준을 쓴다.
/// 이미 설치되어 있으면(테스트 등) 조용히 넘어간다.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("device_cost_analyzer=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

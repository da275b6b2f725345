use serde::{Deserialize, Serialize};

/// 감가상각률 기본값 [%/년]
pub const DEFAULT_DEPRECIATION_RATE: f64 = 15.0;
/// 신뢰도 점수 기본값 (0=항상 고장, 100=고장 없음)
pub const DEFAULT_RELIABILITY_SCORE: f64 = 65.0;

/// 분석 엔진 입력. 값이 없거나 숫자가 아니면 `None`으로 표현한다.
///
/// 엔진은 범위를 검증하지 않는다. 음수나 100 초과 값도 그대로 계산에 쓰인다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    /// 하루 가동 시간 [h/day]
    pub hours_per_day: Option<f64>,
    /// 시간당 유지보수 단가 [통화/h]
    pub rate_per_hour: Option<f64>,
    /// 장비 구매가 [통화]
    pub device_cost: Option<f64>,
    /// 연간 감가상각률 [%/년]
    pub depreciation_rate: Option<f64>,
    /// 신뢰도 점수 [0~100]
    pub reliability_score: Option<f64>,
}

impl InputParameters {
    /// 감가상각률. 없으면 기본값 15%.
    pub fn depreciation_rate_or_default(&self) -> f64 {
        self.depreciation_rate.unwrap_or(DEFAULT_DEPRECIATION_RATE)
    }

    /// 신뢰도 점수. 없으면 기본값 65.
    pub fn reliability_score_or_default(&self) -> f64 {
        self.reliability_score.unwrap_or(DEFAULT_RELIABILITY_SCORE)
    }

    /// 장비 가격이 존재하고 0이 아니면 그 값을 돌려준다.
    pub fn present_device_cost(&self) -> Option<f64> {
        present(self.device_cost)
    }
}

/// 0, NaN 을 "값 없음"으로 취급한다.
pub(crate) fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// 사용자가 입력한 문자열을 금액/수치로 변환한다.
///
/// 빈 문자열, 숫자가 아닌 값, 음수, 무한대는 모두 `None`이 된다.
/// 천 단위 구분 기호(`,`)와 앞에 붙은 `$`는 허용한다.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_grouped_currency() {
        assert_eq!(parse_amount(" $5,000.50 "), Some(5000.5));
        assert_eq!(parse_amount("8"), Some(8.0));
        assert_eq!(parse_amount("0"), Some(0.0));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn defaults_fill_missing_rates() {
        let input = InputParameters::default();
        assert_eq!(input.depreciation_rate_or_default(), 15.0);
        assert_eq!(input.reliability_score_or_default(), 65.0);
        assert_eq!(input.present_device_cost(), None);
    }

    #[test]
    fn zero_device_cost_counts_as_absent() {
        let input = InputParameters {
            device_cost: Some(0.0),
            ..Default::default()
        };
        assert_eq!(input.present_device_cost(), None);
    }
}

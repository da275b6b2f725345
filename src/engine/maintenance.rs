use serde::Serialize;

/// 주당 근무일
pub const WORKING_DAYS_PER_WEEK: f64 = 5.0;
/// 월당 주 수
pub const WEEKS_PER_MONTH: f64 = 4.0;
/// 연당 월 수
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 신뢰도 0일 때 보정계수
const FACTOR_AT_ZERO_RELIABILITY: f64 = 1.2;
/// 신뢰도 0→100 구간에서 줄어드는 보정계수 폭
const FACTOR_SPAN: f64 = 0.8;

/// 기간별 유지보수 비용 [통화].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
    /// 분석 기간 전체 누적 비용
    pub horizon_total: f64,
    /// 분석 기간 [년]
    pub horizon_years: u32,
}

impl CostBreakdown {
    /// 일 비용에서 고정 배수로 나머지 기간 비용을 유도한다.
    pub fn from_daily(daily: f64, horizon_years: u32) -> Self {
        let weekly = daily * WORKING_DAYS_PER_WEEK;
        let monthly = weekly * WEEKS_PER_MONTH;
        let yearly = monthly * MONTHS_PER_YEAR;
        Self {
            daily,
            weekly,
            monthly,
            yearly,
            horizon_total: yearly * f64::from(horizon_years),
            horizon_years,
        }
    }

    /// 모든 값이 0인 비용표.
    pub fn zero(horizon_years: u32) -> Self {
        Self {
            horizon_years,
            ..Self::default()
        }
    }
}

/// 유지보수 예측 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// 가동 시간 또는 단가가 없어서 계산하지 않음
    Insufficient { horizon_years: u32 },
    Projected {
        breakdown: CostBreakdown,
        /// 시간×단가에 곱해진 보정계수
        adjustment_factor: f64,
    },
}

impl Projection {
    /// 입력 부족 시 0으로 채운 비용표를 돌려준다.
    pub fn breakdown(&self) -> CostBreakdown {
        match self {
            Projection::Insufficient { horizon_years } => CostBreakdown::zero(*horizon_years),
            Projection::Projected { breakdown, .. } => *breakdown,
        }
    }

    pub fn is_sufficient(&self) -> bool {
        matches!(self, Projection::Projected { .. })
    }

    pub fn adjustment_factor(&self) -> Option<f64> {
        match self {
            Projection::Insufficient { .. } => None,
            Projection::Projected {
                adjustment_factor, ..
            } => Some(*adjustment_factor),
        }
    }
}

/// 신뢰도 점수를 비용 보정계수로 바꾼다.
///
/// 0 → 1.2, 100 → 0.4 의 선형 변환이다. 확률 모델이 아니며 범위를 벗어난
/// 점수도 그대로 외삽한다.
pub fn adjustment_factor(reliability_score: f64) -> f64 {
    FACTOR_AT_ZERO_RELIABILITY - (reliability_score / 100.0) * FACTOR_SPAN
}

/// 가동 시간, 단가, 신뢰도로 기간별 유지보수 비용을 예측한다.
///
/// `reliability_score`가 `None`이면 보정 없이(계수 1.0) 계산한다.
pub fn project(
    hours_per_day: Option<f64>,
    rate_per_hour: Option<f64>,
    reliability_score: Option<f64>,
    horizon_years: u32,
) -> Projection {
    let (Some(hours), Some(rate)) = (
        crate::input::present(hours_per_day),
        crate::input::present(rate_per_hour),
    ) else {
        return Projection::Insufficient { horizon_years };
    };

    let raw_daily = hours * rate;
    let factor = reliability_score.map(adjustment_factor).unwrap_or(1.0);
    Projection::Projected {
        breakdown: CostBreakdown::from_daily(raw_daily * factor, horizon_years),
        adjustment_factor: factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_endpoints_and_midpoint() {
        assert!((adjustment_factor(0.0) - 1.2).abs() < 1e-12);
        assert!((adjustment_factor(100.0) - 0.4).abs() < 1e-12);
        assert!((adjustment_factor(50.0) - 0.8).abs() < 1e-12);
        assert!(adjustment_factor(30.0) > adjustment_factor(31.0));
    }

    #[test]
    fn factor_extrapolates_out_of_range() {
        assert!((adjustment_factor(150.0) - 0.0).abs() < 1e-12);
        assert!(adjustment_factor(-50.0) > 1.2);
    }

    #[test]
    fn unadjusted_projection_uses_fixed_multipliers() {
        let p = project(Some(8.0), Some(25.0), None, 4);
        let b = p.breakdown();
        assert_eq!(b.daily, 200.0);
        assert_eq!(b.weekly, 1000.0);
        assert_eq!(b.monthly, 4000.0);
        assert_eq!(b.yearly, 48_000.0);
        assert_eq!(b.horizon_total, 192_000.0);
        assert_eq!(p.adjustment_factor(), Some(1.0));
    }

    #[test]
    fn missing_or_zero_inputs_are_insufficient() {
        for (h, r) in [
            (None, Some(10.0)),
            (Some(8.0), None),
            (Some(0.0), Some(10.0)),
            (Some(8.0), Some(0.0)),
        ] {
            let p = project(h, r, Some(65.0), 5);
            assert!(!p.is_sufficient());
            assert_eq!(p.breakdown(), CostBreakdown::zero(5));
            assert_eq!(p.adjustment_factor(), None);
        }
    }

    #[test]
    fn multipliers_hold_exactly() {
        let b = CostBreakdown::from_daily(23.12, 5);
        assert_eq!(b.weekly, b.daily * 5.0);
        assert_eq!(b.monthly, b.weekly * 4.0);
        assert_eq!(b.yearly, b.monthly * 12.0);
        assert_eq!(b.horizon_total, b.yearly * 5.0);
    }
}

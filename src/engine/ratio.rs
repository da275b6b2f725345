//! 비용 비율 계산 보조 함수.

use serde::Serialize;

use super::maintenance::CostBreakdown;

/// `part`가 `whole`의 몇 %인지 계산한다.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    (part / whole) * 100.0
}

/// `part`가 `whole`의 몇 배인지 계산한다.
pub fn multiple_of(part: f64, whole: f64) -> f64 {
    part / whole
}

/// 기간별 유지보수 비용이 장비 가격에서 차지하는 비율 [%].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodShares {
    /// 기준이 된 장비 가격 [통화]
    pub device_cost: f64,
    pub daily_pct: f64,
    pub weekly_pct: f64,
    pub monthly_pct: f64,
    pub yearly_pct: f64,
    pub horizon_pct: f64,
    /// 장비 가격 + 기간 누적 유지보수비 [통화]
    pub total_horizon_cost: f64,
    pub total_horizon_pct: f64,
}

impl PeriodShares {
    pub fn new(breakdown: &CostBreakdown, device_cost: f64) -> Self {
        let total = device_cost + breakdown.horizon_total;
        Self {
            device_cost,
            daily_pct: percent_of(breakdown.daily, device_cost),
            weekly_pct: percent_of(breakdown.weekly, device_cost),
            monthly_pct: percent_of(breakdown.monthly, device_cost),
            yearly_pct: percent_of(breakdown.yearly, device_cost),
            horizon_pct: percent_of(breakdown.horizon_total, device_cost),
            total_horizon_cost: total,
            total_horizon_pct: percent_of(total, device_cost),
        }
    }
}

//! 유지보수 비용 예측, 감가상각, 구매 권고 계산 모듈 모음.
//!
//! 모든 계산은 입력만으로 결정되는 순수 함수이며 상태를 보관하지 않는다.

pub mod depreciation;
pub mod maintenance;
pub mod ratio;
pub mod recommendation;

pub use depreciation::DepreciationSchedule;
pub use maintenance::{CostBreakdown, Projection};
pub use ratio::PeriodShares;
pub use recommendation::{InsightPolicy, Recommendation, Tier, TierBoundaries};

use serde::Serialize;
use tracing::{debug, trace};

use crate::input::InputParameters;
use recommendation::{ClassifierSettings, ReliabilityContext};

/// 엔진 구성 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("tier boundaries must be non-negative and strictly increasing: {0:?}")]
    InvalidBoundaries([f64; 4]),
    #[error("horizon must be at least one year")]
    ZeroHorizon,
}

/// 엔진 동작 방식을 정하는 구성.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// 누적 비용/잔존가치를 보는 기간 [년]
    pub horizon_years: u32,
    /// 신뢰도 점수로 비용을 보정할지 여부. 끄면 보정계수는 1.0
    pub use_reliability_adjustment: bool,
    pub tier_boundaries: TierBoundaries,
    pub insight_policy: InsightPolicy,
    /// 감가상각 표에 포함할 마지막 연차
    pub schedule_years: u32,
}

impl EngineConfig {
    /// 감가상각과 신뢰도를 반영하는 5년 구성.
    pub fn advanced() -> Self {
        Self {
            horizon_years: 5,
            use_reliability_adjustment: true,
            tier_boundaries: TierBoundaries::advanced(),
            insight_policy: InsightPolicy::advanced(),
            schedule_years: 5,
        }
    }

    /// 시간×단가만 보는 4년 구성.
    pub fn basic() -> Self {
        Self {
            horizon_years: 4,
            use_reliability_adjustment: false,
            tier_boundaries: TierBoundaries::basic(),
            insight_policy: InsightPolicy::basic(),
            schedule_years: 5,
        }
    }

    /// 기간을 바꾼다. 0년은 허용하지 않는다.
    pub fn with_horizon(mut self, years: u32) -> Result<Self, EngineError> {
        if years == 0 {
            return Err(EngineError::ZeroHorizon);
        }
        self.horizon_years = years;
        Ok(self)
    }

    pub fn with_boundaries(mut self, boundaries: TierBoundaries) -> Self {
        self.tier_boundaries = boundaries;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::advanced()
    }
}

/// 한 번의 분석 결과 전체.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub breakdown: CostBreakdown,
    /// 유지보수 입력이 부족하면 `None`
    pub adjustment_factor: Option<f64>,
    pub schedule: DepreciationSchedule,
    /// 장비가가 있을 때만 계산
    pub period_shares: Option<PeriodShares>,
    pub recommendation: Option<Recommendation>,
}

impl Analysis {
    /// 유지보수 비용을 계산할 입력이 있었는지.
    pub fn has_maintenance(&self) -> bool {
        self.adjustment_factor.is_some()
    }
}

/// 입력 → {감가상각, 유지보수 예측} → 구매 권고 순서로 전체 계산을 수행한다.
pub fn analyze(inputs: &InputParameters, config: &EngineConfig) -> Analysis {
    let device_cost = inputs.device_cost.unwrap_or(0.0);
    let rate = inputs.depreciation_rate_or_default();
    let schedule = depreciation::compute(device_cost, rate, config.schedule_years);

    let reliability = config
        .use_reliability_adjustment
        .then(|| inputs.reliability_score_or_default());
    let projection = maintenance::project(
        inputs.hours_per_day,
        inputs.rate_per_hour,
        reliability,
        config.horizon_years,
    );
    let breakdown = projection.breakdown();
    trace!(?breakdown, ?projection, "maintenance projected");

    let reliability_ctx = match (reliability, projection.adjustment_factor()) {
        (Some(score), Some(adjustment_factor)) => Some(ReliabilityContext {
            score,
            adjustment_factor,
        }),
        _ => None,
    };
    let recommendation = recommendation::classify(
        inputs,
        &schedule,
        &breakdown,
        ClassifierSettings {
            boundaries: &config.tier_boundaries,
            policy: &config.insight_policy,
            reliability: reliability_ctx,
        },
    );
    let period_shares = inputs
        .present_device_cost()
        .map(|cost| PeriodShares::new(&breakdown, cost));

    match &recommendation {
        Some(rec) => debug!(
            tier = %rec.tier,
            yearly_ratio_pct = rec.yearly_ratio_pct,
            "recommendation produced"
        ),
        None => debug!(
            has_device_cost = inputs.present_device_cost().is_some(),
            has_maintenance = projection.is_sufficient(),
            "recommendation suppressed: insufficient input"
        ),
    }

    Analysis {
        breakdown,
        adjustment_factor: projection.adjustment_factor(),
        schedule,
        period_shares,
        recommendation,
    }
}

use serde::{Deserialize, Serialize};

use super::depreciation::{self, DepreciationSchedule};
use super::maintenance::CostBreakdown;
use super::ratio::{multiple_of, percent_of};
use super::EngineError;
use crate::input::InputParameters;

/// 구매 권고 등급. 순서대로 나빠진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
    NotRecommended,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Excellent,
        Tier::Good,
        Tier::Fair,
        Tier::Poor,
        Tier::NotRecommended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::Poor => "poor",
            Tier::NotRecommended => "not-recommended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "HIGHLY RECOMMENDED",
            Tier::Good => "RECOMMENDED",
            Tier::Fair => "PROCEED WITH CAUTION",
            Tier::Poor => "NOT RECOMMENDED",
            Tier::NotRecommended => "STRONGLY NOT RECOMMENDED",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 연간 유지보수비/장비가 비율[%]의 등급 경계.
///
/// 각 값은 해당 등급의 하한(포함)이다. 비율이 정확히 경계값이면 위쪽 등급으로 간다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBoundaries {
    good: f64,
    fair: f64,
    poor: f64,
    not_recommended: f64,
}

impl TierBoundaries {
    /// 경계값은 0 이상이고 엄격히 증가해야 한다.
    pub fn new(good: f64, fair: f64, poor: f64, not_recommended: f64) -> Result<Self, EngineError> {
        let b = [good, fair, poor, not_recommended];
        let finite = b.iter().all(|v| v.is_finite() && *v >= 0.0);
        let increasing = b.windows(2).all(|w| w[0] < w[1]);
        if !finite || !increasing {
            return Err(EngineError::InvalidBoundaries(b));
        }
        Ok(Self {
            good,
            fair,
            poor,
            not_recommended,
        })
    }

    /// 8 / 15 / 25 / 40
    pub fn advanced() -> Self {
        Self {
            good: 8.0,
            fair: 15.0,
            poor: 25.0,
            not_recommended: 40.0,
        }
    }

    /// 10 / 25 / 50 / 100
    pub fn basic() -> Self {
        Self {
            good: 10.0,
            fair: 25.0,
            poor: 50.0,
            not_recommended: 100.0,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.good, self.fair, self.poor, self.not_recommended]
    }

    /// 등급의 [하한, 상한) 구간. 최상위 등급의 상한은 무한대.
    pub fn range_of(&self, tier: Tier) -> (f64, f64) {
        match tier {
            Tier::Excellent => (0.0, self.good),
            Tier::Good => (self.good, self.fair),
            Tier::Fair => (self.fair, self.poor),
            Tier::Poor => (self.poor, self.not_recommended),
            Tier::NotRecommended => (self.not_recommended, f64::INFINITY),
        }
    }

    /// 비율에 맞는 등급을 고른다. 앞에서부터 첫 번째로 맞는 구간이 이긴다.
    pub fn tier_for(&self, yearly_ratio_pct: f64) -> Tier {
        if yearly_ratio_pct < self.good {
            Tier::Excellent
        } else if yearly_ratio_pct < self.fair {
            Tier::Good
        } else if yearly_ratio_pct < self.poor {
            Tier::Fair
        } else if yearly_ratio_pct < self.not_recommended {
            Tier::Poor
        } else {
            Tier::NotRecommended
        }
    }
}

impl Default for TierBoundaries {
    fn default() -> Self {
        Self::advanced()
    }
}

/// 등급 외에 덧붙이는 보조 판단 기준.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightPolicy {
    /// 기간 유지보수비가 장비가의 이 배수를 넘으면 "비싸다" 메모
    pub expensive_multiple: f64,
    /// 기간 유지보수비가 장비가의 이 배수 미만이면 "경제적" 메모
    pub economical_multiple: Option<f64>,
    /// 잔존가치가 장비가의 이 비율을 넘으면 재판매 메모
    pub resale_fraction: Option<f64>,
    /// 총비용(장비+유지보수)이 장비가의 이 배수를 넘으면 총비용 메모
    pub total_cost_multiple: Option<f64>,
}

impl InsightPolicy {
    pub fn advanced() -> Self {
        Self {
            expensive_multiple: 1.5,
            economical_multiple: Some(0.5),
            resale_fraction: Some(0.2),
            total_cost_multiple: None,
        }
    }

    pub fn basic() -> Self {
        Self {
            expensive_multiple: 2.0,
            economical_multiple: None,
            resale_fraction: None,
            total_cost_multiple: Some(3.0),
        }
    }
}

/// 신뢰도 보정에 관한 맥락. 보정을 끈 구성에서는 `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliabilityContext {
    pub score: f64,
    pub adjustment_factor: f64,
}

/// 구매 권고 결과. 계산마다 새로 만들어지고 이후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub tier: Tier,
    pub label: &'static str,
    pub reasoning: Vec<String>,
    /// 연간 유지보수비 / 장비가 [%]
    pub yearly_ratio_pct: f64,
    /// 기간 유지보수비 / 장비가 [%]
    pub horizon_ratio_pct: f64,
    /// 장비가 − 잔존가치 + 기간 유지보수비
    pub net_horizon_cost: f64,
    /// 기간 말 잔존가치
    pub residual_value: f64,
    /// 장비가 / 연간 유지보수비. 할인 없는 단순 비율이다.
    pub break_even_years: f64,
    pub horizon_years: u32,
    /// 장비가 + 기간 유지보수비
    pub total_horizon_cost: f64,
}

/// 분류기에 필요한 구성 값 묶음.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierSettings<'a> {
    pub boundaries: &'a TierBoundaries,
    pub policy: &'a InsightPolicy,
    pub reliability: Option<ReliabilityContext>,
}

/// 비용표와 잔존가치 표로 구매 권고를 만든다.
///
/// 장비가가 없거나(0 포함) 연간 유지보수비가 0이면 `None`을 돌려준다.
/// 부분적으로 채워진 결과는 만들지 않는다.
pub fn classify(
    inputs: &InputParameters,
    schedule: &DepreciationSchedule,
    breakdown: &CostBreakdown,
    settings: ClassifierSettings<'_>,
) -> Option<Recommendation> {
    let device_cost = inputs.present_device_cost()?;
    let yearly = breakdown.yearly;
    if yearly == 0.0 || yearly.is_nan() {
        return None;
    }

    let horizon_years = breakdown.horizon_years;
    let horizon_total = breakdown.horizon_total;
    let yearly_ratio_pct = percent_of(yearly, device_cost);
    let tier = settings.boundaries.tier_for(yearly_ratio_pct);

    let residual_value = schedule.value_at(horizon_years).unwrap_or_else(|| {
        depreciation::residual_value(device_cost, schedule.rate_pct, horizon_years)
    });
    let total_horizon_cost = device_cost + horizon_total;

    let mut reasoning = tier_reasoning(tier, yearly_ratio_pct, settings.boundaries);
    if let Some(ctx) = settings.reliability {
        reasoning.push(reliability_reasoning(tier, ctx));
    }

    let policy = settings.policy;
    let horizon_multiple = multiple_of(horizon_total, device_cost);
    if horizon_total > device_cost * policy.expensive_multiple {
        reasoning.push(format!(
            "Over {horizon_years} years, maintenance will cost {horizon_multiple:.1}x the device price"
        ));
    } else if let Some(economical) = policy.economical_multiple {
        if horizon_total < device_cost * economical {
            reasoning.push(format!(
                "Over {horizon_years} years, maintenance stays at {horizon_multiple:.1}x the device price - economical to operate"
            ));
        }
    }
    if let Some(fraction) = policy.resale_fraction {
        if residual_value > device_cost * fraction {
            reasoning.push(format!(
                "Device retains {:.1}% of its value after {horizon_years} years, supporting resale",
                percent_of(residual_value, device_cost)
            ));
        }
    }
    if let Some(multiple) = policy.total_cost_multiple {
        if total_horizon_cost > device_cost * multiple {
            reasoning.push(format!(
                "Total {horizon_years}-year cost is {:.1}x the initial investment",
                multiple_of(total_horizon_cost, device_cost)
            ));
        }
    }

    Some(Recommendation {
        tier,
        label: tier.label(),
        reasoning,
        yearly_ratio_pct,
        horizon_ratio_pct: percent_of(horizon_total, device_cost),
        net_horizon_cost: device_cost - residual_value + horizon_total,
        residual_value,
        break_even_years: device_cost / yearly,
        horizon_years,
        total_horizon_cost,
    })
}

fn tier_reasoning(tier: Tier, ratio: f64, boundaries: &TierBoundaries) -> Vec<String> {
    let (_, upper) = boundaries.range_of(tier);
    match tier {
        Tier::Excellent => vec![
            format!(
                "Annual maintenance cost is {ratio:.1}% of device cost, under the {upper}% mark - excellent value"
            ),
            "Very low operational expenses relative to initial investment".to_string(),
        ],
        Tier::Good => vec![
            format!("Annual maintenance cost is reasonable at {ratio:.1}% of device cost"),
            "Good balance between initial cost and operating expenses".to_string(),
        ],
        Tier::Fair => vec![
            format!("Annual maintenance cost is {ratio:.1}% of device cost - moderately high"),
            "Consider if the device productivity justifies this ongoing expense".to_string(),
        ],
        Tier::Poor => vec![
            format!("Annual maintenance cost is {ratio:.1}% of device cost - very high"),
            "Upkeep will quickly rival the purchase price; compare alternatives first"
                .to_string(),
        ],
        Tier::NotRecommended => {
            let first = if ratio >= 100.0 {
                format!(
                    "Annual maintenance is {ratio:.1}% of device cost and exceeds the price itself - economically unsustainable"
                )
            } else {
                format!(
                    "Annual maintenance is {ratio:.1}% of device cost - economically unsustainable"
                )
            };
            vec![
                first,
                "Consider alternatives or more efficient solutions".to_string(),
            ]
        }
    }
}

fn reliability_reasoning(tier: Tier, ctx: ReliabilityContext) -> String {
    let ReliabilityContext {
        score,
        adjustment_factor,
    } = ctx;
    match tier {
        Tier::Excellent | Tier::Good => format!(
            "Reliability score of {score:.0}/100 keeps expected upkeep at {adjustment_factor:.2}x the raw hourly estimate"
        ),
        Tier::Fair => format!(
            "Reliability score of {score:.0}/100 puts expected upkeep at {adjustment_factor:.2}x the raw hourly estimate; a more reliable model would lower it"
        ),
        Tier::Poor | Tier::NotRecommended => format!(
            "Even with a reliability score of {score:.0}/100 (upkeep factor {adjustment_factor:.2}x), operating cost stays too high"
        ),
    }
}

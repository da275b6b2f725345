//! 전체 계산 파이프라인 회귀 테스트.
use device_cost_analyzer::engine::{analyze, EngineConfig, Tier, TierBoundaries};
use device_cost_analyzer::InputParameters;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn inputs(hours: f64, rate: f64, cost: f64) -> InputParameters {
    InputParameters {
        hours_per_day: Some(hours),
        rate_per_hour: Some(rate),
        device_cost: Some(cost),
        ..Default::default()
    }
}

#[test]
fn basic_variant_eight_hours_at_twenty_five() {
    let a = analyze(&inputs(8.0, 25.0, 5000.0), &EngineConfig::basic());
    assert_eq!(a.breakdown.daily, 200.0);
    assert_eq!(a.breakdown.weekly, 1000.0);
    assert_eq!(a.breakdown.monthly, 4000.0);
    assert_eq!(a.breakdown.yearly, 48_000.0);
    let rec = a.recommendation.expect("recommendation");
    assert_close("yearly ratio", rec.yearly_ratio_pct, 960.0, 1e-9);
    assert_eq!(rec.tier, Tier::NotRecommended);
    assert_eq!(rec.label, "STRONGLY NOT RECOMMENDED");
    assert_eq!(rec.horizon_years, 4);
}

#[test]
fn advanced_variant_with_default_rates() {
    let input = InputParameters {
        depreciation_rate: Some(15.0),
        reliability_score: Some(65.0),
        ..inputs(4.0, 8.5, 2000.0)
    };
    let a = analyze(&input, &EngineConfig::advanced());
    assert_close("factor", a.adjustment_factor.unwrap(), 0.68, 1e-12);
    assert_close("daily", a.breakdown.daily, 23.12, 1e-9);
    assert_close("yearly", a.breakdown.yearly, 5548.8, 1e-6);
    assert_close("year5", a.schedule.value_at(5).unwrap(), 887.410_625, 1e-6);

    let rec = a.recommendation.expect("recommendation");
    assert_close("ratio", rec.yearly_ratio_pct, 277.44, 1e-6);
    assert_eq!(rec.tier, Tier::NotRecommended);
    assert_close("residual", rec.residual_value, 887.410_625, 1e-6);
    assert_close("horizon", rec.total_horizon_cost, 2000.0 + 5548.8 * 5.0, 1e-6);
    assert_close(
        "net",
        rec.net_horizon_cost,
        2000.0 - 887.410_625 + 5548.8 * 5.0,
        1e-6,
    );
    assert_close("break-even", rec.break_even_years, 2000.0 / 5548.8, 1e-12);
    // 등급 문장 2개 + 신뢰도 문장 + 기간 배수 문장 + 재판매 문장
    assert_eq!(rec.reasoning.len(), 5);
    assert!(rec.reasoning[2].contains("reliability score of 65/100"));
    assert!(rec.reasoning[3].starts_with("Over 5 years, maintenance will cost 13.9x"));
    assert!(rec.reasoning[4].contains("44.4%"));
}

#[test]
fn missing_rates_use_defaults_in_pipeline() {
    let with_defaults = InputParameters {
        depreciation_rate: Some(15.0),
        reliability_score: Some(65.0),
        ..inputs(4.0, 8.5, 2000.0)
    };
    let cfg = EngineConfig::advanced();
    assert_eq!(analyze(&inputs(4.0, 8.5, 2000.0), &cfg), analyze(&with_defaults, &cfg));
}

#[test]
fn pipeline_is_idempotent() {
    let cfg = EngineConfig::advanced();
    let input = inputs(6.5, 12.25, 3210.0);
    let first = analyze(&input, &cfg);
    let second = analyze(&input, &cfg);
    assert_eq!(first, second);
    let a = first.recommendation.unwrap();
    let b = second.recommendation.unwrap();
    assert_eq!(a.yearly_ratio_pct.to_bits(), b.yearly_ratio_pct.to_bits());
}

#[test]
fn no_device_cost_means_no_recommendation() {
    for cost in [None, Some(0.0)] {
        let input = InputParameters {
            device_cost: cost,
            ..inputs(8.0, 25.0, 0.0)
        };
        for cfg in [EngineConfig::advanced(), EngineConfig::basic()] {
            let a = analyze(&input, &cfg);
            assert!(a.recommendation.is_none());
            assert!(a.period_shares.is_none());
            assert!(a.breakdown.yearly > 0.0);
        }
    }
}

#[test]
fn no_maintenance_means_zero_breakdown_and_no_recommendation() {
    for (h, r) in [(0.0, 25.0), (8.0, 0.0)] {
        let a = analyze(&inputs(h, r, 5000.0), &EngineConfig::advanced());
        assert!(!a.has_maintenance());
        assert_eq!(a.breakdown.daily, 0.0);
        assert_eq!(a.breakdown.horizon_total, 0.0);
        assert!(a.recommendation.is_none());
    }
}

#[test]
fn exact_threshold_ratios_land_in_upper_tier() {
    // 장비가 1200, 보정 없음: 일 비용 d → 연 240·d → 비율 20·d %
    let cfg = EngineConfig::basic().with_boundaries(TierBoundaries::advanced());
    let cases = [
        (0.4, Tier::Good),
        (0.75, Tier::Fair),
        (1.25, Tier::Poor),
        (2.0, Tier::NotRecommended),
        (0.35, Tier::Excellent),
    ];
    for (daily, expected) in cases {
        let a = analyze(&inputs(1.0, daily, 1200.0), &cfg);
        let rec = a.recommendation.unwrap();
        assert_eq!(rec.tier, expected, "ratio {}", rec.yearly_ratio_pct);
    }
}

#[test]
fn schedule_is_constant_without_depreciation() {
    let input = InputParameters {
        depreciation_rate: Some(0.0),
        ..inputs(1.0, 1.0, 750.0)
    };
    let a = analyze(&input, &EngineConfig::advanced());
    assert!(a.schedule.iter().all(|(_, v)| v == 750.0));
    assert_eq!(a.schedule.len(), 6);
}

#[test]
fn out_of_range_inputs_are_computed_literally() {
    let input = InputParameters {
        depreciation_rate: Some(150.0),
        reliability_score: Some(200.0),
        ..inputs(8.0, 10.0, 1000.0)
    };
    let a = analyze(&input, &EngineConfig::advanced());
    assert!(a.schedule.value_at(1).unwrap() < 0.0);
    // 1.2 − 2.0 × 0.8 = −0.4
    assert_close("factor", a.adjustment_factor.unwrap(), -0.4, 1e-12);
    assert!(a.breakdown.yearly < 0.0);
}

#[test]
fn huge_horizon_keeps_residual_finite() {
    let cfg = EngineConfig::advanced()
        .with_horizon(3_000_000_000)
        .expect("horizon");
    let a = analyze(&inputs(1.0, 1.0, 1000.0), &cfg);
    let rec = a.recommendation.expect("recommendation");
    assert!(rec.residual_value.is_finite());
    assert!(rec.residual_value.abs() < 1e-9, "residual={}", rec.residual_value);
    assert!(rec.net_horizon_cost.is_finite());
    assert!(rec.net_horizon_cost > 0.0);
    assert!(!rec.reasoning.iter().any(|r| r.contains("inf")));
}

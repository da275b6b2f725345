use serde::Serialize;

/// 연차별 잔존가치 표. `values[n]`은 n년차 말의 장비 가치다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepreciationSchedule {
    /// 연간 감가상각률 [%]
    pub rate_pct: f64,
    /// 0년차부터의 잔존가치 [통화]
    pub values: Vec<f64>,
}

impl DepreciationSchedule {
    /// n년차 잔존가치. 표 범위를 벗어나면 `None`.
    pub fn value_at(&self, year: u32) -> Option<f64> {
        self.values.get(year as usize).copied()
    }

    /// 마지막 연차(year)와 그 잔존가치.
    pub fn last(&self) -> Option<(u32, f64)> {
        let idx = self.values.len().checked_sub(1)?;
        Some((u32::try_from(idx).ok()?, self.values[idx]))
    }

    /// (연차, 잔존가치) 순회.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (0u32..).zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 복리 감가 모델에서 n년차 잔존가치를 계산한다.
///
/// `device_cost × (1 − rate/100)^n`. 하한을 두지 않으므로 rate > 100 이면
/// 홀수 연차에서 음수가 나올 수 있다.
pub fn residual_value(device_cost: f64, depreciation_rate_pct: f64, year: u32) -> f64 {
    let keep = 1.0 - depreciation_rate_pct / 100.0;
    device_cost * keep.powf(f64::from(year))
}

/// 0년차부터 `years`년차까지(포함) 잔존가치 표를 만든다.
pub fn compute(device_cost: f64, depreciation_rate_pct: f64, years: u32) -> DepreciationSchedule {
    let values = (0..=years)
        .map(|n| residual_value(device_cost, depreciation_rate_pct, n))
        .collect();
    DepreciationSchedule {
        rate_pct: depreciation_rate_pct,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_covers_year_zero_through_horizon() {
        let s = compute(2000.0, 15.0, 5);
        assert_eq!(s.len(), 6);
        assert_eq!(s.value_at(0), Some(2000.0));
        assert!((s.value_at(5).unwrap() - 887.410_625).abs() < 1e-6);
        assert_eq!(s.value_at(6), None);
    }

    #[test]
    fn zero_rate_keeps_value_constant() {
        let s = compute(1234.5, 0.0, 5);
        assert!(s.values.iter().all(|v| *v == 1234.5));
    }

    #[test]
    fn positive_rate_never_increases() {
        for rate in [0.5, 15.0, 60.0, 100.0] {
            let s = compute(10_000.0, rate, 5);
            for pair in s.values.windows(2) {
                assert!(pair[1] <= pair[0], "rate={rate} {:?}", s.values);
            }
        }
    }

    #[test]
    fn rate_above_hundred_is_computed_literally() {
        // (1 - 1.5)^1 = -0.5
        assert_eq!(residual_value(1000.0, 150.0, 1), -500.0);
        assert_eq!(residual_value(1000.0, 150.0, 2), 250.0);
    }

    #[test]
    fn very_long_horizon_decays_toward_zero() {
        let v = residual_value(1000.0, 15.0, 3_000_000_000);
        assert!(v.is_finite());
        assert!(v.abs() < 1e-9, "residual={v}");
        assert_eq!(residual_value(1000.0, 0.0, u32::MAX), 1000.0);
    }

    #[test]
    fn iter_pairs_years_with_values() {
        let s = compute(100.0, 50.0, 2);
        let pairs: Vec<_> = s.iter().collect();
        assert_eq!(pairs, vec![(0, 100.0), (1, 50.0), (2, 25.0)]);
    }

    #[test]
    fn last_returns_final_year() {
        let s = compute(100.0, 10.0, 3);
        let (year, value) = s.last().unwrap();
        assert_eq!(year, 3);
        assert!((value - 72.9).abs() < 1e-9);
    }
}

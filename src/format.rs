//! 화면 표시용 숫자 포맷.

/// 소수점 둘째 자리, 천 단위 구분 기호를 쓰는 달러 표기. 예: `$1,234.56`
pub fn currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// 백분율 표기. 예: `12.35%`
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

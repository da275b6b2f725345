use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::{Config, EngineVariant};
use crate::engine::Analysis;
use crate::format::{currency, percent};
use crate::i18n::{keys, Translator};
use crate::input::{parse_amount, InputParameters};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analyze,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// `reader`에서 메뉴 선택을 읽는다. 입력이 끝나면(EOF) 종료로 취급한다.
pub fn main_menu_from<R: BufRead>(
    tr: &Translator,
    reader: &mut R,
) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ANALYZE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line_from(reader, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(err) if err.is_eof() => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Analyze),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 분석 메뉴: 다섯 값을 입력받아 엔진을 돌리고 보고서를 출력한다.
pub fn handle_analyze(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ANALYZE_HEADING));
    println!("{}", tr.t(keys::ANALYZE_NOTE_EMPTY));
    let inputs = InputParameters {
        hours_per_day: read_amount(tr.t(keys::PROMPT_HOURS))?,
        rate_per_hour: read_amount(tr.t(keys::PROMPT_RATE))?,
        device_cost: read_amount(tr.t(keys::PROMPT_DEVICE_COST))?,
        depreciation_rate: read_amount(tr.t(keys::PROMPT_DEPRECIATION))?
            .or(Some(cfg.defaults.depreciation_rate)),
        reliability_score: read_amount(tr.t(keys::PROMPT_RELIABILITY))?
            .or(Some(cfg.defaults.reliability_score)),
    };
    let engine = cfg.engine_config().map_err(crate::config::ConfigError::from)?;
    let analysis = crate::engine::analyze(&inputs, &engine);
    print!("{}", render_report(tr, &analysis));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_VARIANT), cfg.variant);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.variant = match sel.trim() {
        "1" => EngineVariant::Advanced,
        "2" => EngineVariant::Basic,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.variant
        }
    };
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.variant);
    Ok(())
}

/// 분석 결과를 사람이 읽는 보고서 문자열로 만든다.
pub fn render_report(tr: &Translator, analysis: &Analysis) -> String {
    let mut out = String::new();

    if analysis.has_maintenance() {
        let b = &analysis.breakdown;
        let shares = analysis.period_shares.as_ref();
        let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_BREAKDOWN));
        let _ = writeln!(
            out,
            "{:<22} {:>16} {:>12}",
            tr.t(keys::REPORT_PERIOD),
            tr.t(keys::REPORT_COST),
            if shares.is_some() { tr.t(keys::REPORT_SHARE) } else { "" }
        );
        let horizon_label = format!("{} ({}y)", tr.t(keys::REPORT_HORIZON), b.horizon_years);
        let rows = [
            (tr.t(keys::REPORT_DAILY), b.daily, shares.map(|s| s.daily_pct)),
            (tr.t(keys::REPORT_WEEKLY), b.weekly, shares.map(|s| s.weekly_pct)),
            (tr.t(keys::REPORT_MONTHLY), b.monthly, shares.map(|s| s.monthly_pct)),
            (tr.t(keys::REPORT_YEARLY), b.yearly, shares.map(|s| s.yearly_pct)),
            (horizon_label.as_str(), b.horizon_total, shares.map(|s| s.horizon_pct)),
        ];
        for (label, cost, share) in rows {
            let share = share.map(|p| percent(p, 2)).unwrap_or_default();
            let _ = writeln!(out, "{label:<22} {:>16} {share:>12}", currency(cost));
        }
        if let Some(s) = shares {
            let _ = writeln!(
                out,
                "{:<22} {:>16} {:>12}",
                tr.t(keys::REPORT_DEVICE_COST),
                currency(s.device_cost),
                percent(100.0, 0)
            );
            let _ = writeln!(
                out,
                "{:<22} {:>16} {:>12}",
                tr.t(keys::REPORT_TOTAL),
                currency(s.total_horizon_cost),
                percent(s.total_horizon_pct, 2)
            );
        }
        if let Some(factor) = analysis.adjustment_factor.filter(|f| *f != 1.0) {
            let _ = writeln!(out, "{} {factor:.2}x", tr.t(keys::REPORT_ADJUSTMENT));
        }
    } else {
        let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_NEED_MAINTENANCE));
    }

    if analysis.period_shares.is_some() {
        let _ = writeln!(
            out,
            "\n{} ({})",
            tr.t(keys::REPORT_SCHEDULE),
            percent(analysis.schedule.rate_pct, 1)
        );
        for (year, value) in analysis.schedule.iter() {
            let _ = writeln!(out, "  {} {year}: {:>16}", tr.t(keys::REPORT_YEAR), currency(value));
        }
    }

    match &analysis.recommendation {
        Some(rec) => {
            let _ = writeln!(out, "\n{}: {} [{}]", tr.t(keys::REPORT_RECOMMENDATION), rec.label, rec.tier);
            let _ = writeln!(out, "{}", tr.t(keys::REPORT_ANALYSIS));
            for reason in &rec.reasoning {
                let _ = writeln!(out, "  - {reason}");
            }
            let _ = writeln!(out, "{} {}", tr.t(keys::REPORT_YEARLY_RATIO), percent(rec.yearly_ratio_pct, 1));
            let _ = writeln!(out, "{} {}", tr.t(keys::REPORT_HORIZON_RATIO), percent(rec.horizon_ratio_pct, 1));
            let _ = writeln!(out, "{} {}", tr.t(keys::REPORT_RESIDUAL), currency(rec.residual_value));
            let _ = writeln!(out, "{} {}", tr.t(keys::REPORT_NET_COST), currency(rec.net_horizon_cost));
            let _ = writeln!(
                out,
                "{} {:.1} {}",
                tr.t(keys::REPORT_BREAK_EVEN),
                rec.break_even_years,
                tr.t(keys::REPORT_YEARS_UNIT)
            );
        }
        None if analysis.has_maintenance() => {
            let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_NEED_DEVICE_COST));
        }
        None => {}
    }
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 찍고 한 줄을 읽는다. 0바이트가 읽히면 `UnexpectedEof`.
fn read_line_from<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_amount(prompt: &str) -> Result<Option<f64>, AppError> {
    Ok(parse_amount(&read_line(prompt)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{analyze, EngineConfig};

    #[test]
    fn report_without_inputs_asks_for_maintenance() {
        let tr = Translator::new("en");
        let a = analyze(&InputParameters::default(), &EngineConfig::advanced());
        let text = render_report(&tr, &a);
        assert!(text.contains("Enter maintenance details"));
        assert!(!text.contains("Purchase Recommendation"));
    }

    #[test]
    fn report_without_device_cost_hints_at_it() {
        let tr = Translator::new("en");
        let inputs = InputParameters {
            hours_per_day: Some(8.0),
            rate_per_hour: Some(25.0),
            ..Default::default()
        };
        let text = render_report(&tr, &analyze(&inputs, &EngineConfig::basic()));
        assert!(text.contains("$48,000.00"));
        assert!(text.contains("Add device cost"));
        assert!(!text.contains("Depreciation Schedule"));
    }

    #[test]
    fn full_report_lists_recommendation() {
        let tr = Translator::new("en");
        let inputs = InputParameters {
            hours_per_day: Some(8.0),
            rate_per_hour: Some(25.0),
            device_cost: Some(5000.0),
            ..Default::default()
        };
        let text = render_report(&tr, &analyze(&inputs, &EngineConfig::basic()));
        assert!(text.contains("STRONGLY NOT RECOMMENDED [not-recommended]"));
        assert!(text.contains("960.0%"));
        assert!(text.contains("$197,000.00"));
        assert!(text.contains("Year 5:"));
    }

    #[test]
    fn closed_input_exits_menu() {
        let tr = Translator::new("en");
        let mut empty = io::Cursor::new("");
        assert_eq!(main_menu_from(&tr, &mut empty).unwrap(), MenuChoice::Exit);

        // 잘못된 선택 뒤에 입력이 끊겨도 같은 결과
        let mut partial = io::Cursor::new("9\n");
        assert_eq!(main_menu_from(&tr, &mut partial).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn menu_reads_choice_after_retry() {
        let tr = Translator::new("en");
        let mut input = io::Cursor::new("x\n 2 \n");
        assert_eq!(main_menu_from(&tr, &mut input).unwrap(), MenuChoice::Settings);
    }

    #[test]
    fn empty_line_is_not_end_of_input() {
        let mut input = io::Cursor::new("\n");
        assert_eq!(read_line_from(&mut input, "").unwrap(), "\n");
        let err = read_line_from(&mut input, "").unwrap_err();
        assert!(err.is_eof());
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_IO: &str = "error.io";
    pub const ERROR_JSON: &str = "error.json";
    pub const ERROR_CONFIG_IO: &str = "error.config_io";
    pub const ERROR_CONFIG_PARSE: &str = "error.config_parse";
    pub const ERROR_CONFIG_SERIALIZE: &str = "error.config_serialize";
    pub const ERROR_BOUNDARIES: &str = "error.boundaries";
    pub const ERROR_ZERO_HORIZON: &str = "error.zero_horizon";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ANALYZE: &str = "main_menu.analyze";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ANALYZE_HEADING: &str = "analyze.heading";
    pub const ANALYZE_NOTE_EMPTY: &str = "analyze.note_empty";
    pub const PROMPT_HOURS: &str = "prompt.hours";
    pub const PROMPT_RATE: &str = "prompt.rate";
    pub const PROMPT_DEVICE_COST: &str = "prompt.device_cost";
    pub const PROMPT_DEPRECIATION: &str = "prompt.depreciation";
    pub const PROMPT_RELIABILITY: &str = "prompt.reliability";

    pub const REPORT_BREAKDOWN: &str = "report.breakdown";
    pub const REPORT_PERIOD: &str = "report.period";
    pub const REPORT_COST: &str = "report.cost";
    pub const REPORT_SHARE: &str = "report.share";
    pub const REPORT_DAILY: &str = "report.daily";
    pub const REPORT_WEEKLY: &str = "report.weekly";
    pub const REPORT_MONTHLY: &str = "report.monthly";
    pub const REPORT_YEARLY: &str = "report.yearly";
    pub const REPORT_HORIZON: &str = "report.horizon";
    pub const REPORT_DEVICE_COST: &str = "report.device_cost";
    pub const REPORT_TOTAL: &str = "report.total";
    pub const REPORT_ADJUSTMENT: &str = "report.adjustment";
    pub const REPORT_SCHEDULE: &str = "report.schedule";
    pub const REPORT_YEAR: &str = "report.year";
    pub const REPORT_RECOMMENDATION: &str = "report.recommendation";
    pub const REPORT_ANALYSIS: &str = "report.analysis";
    pub const REPORT_YEARLY_RATIO: &str = "report.yearly_ratio";
    pub const REPORT_HORIZON_RATIO: &str = "report.horizon_ratio";
    pub const REPORT_NET_COST: &str = "report.net_cost";
    pub const REPORT_RESIDUAL: &str = "report.residual";
    pub const REPORT_BREAK_EVEN: &str = "report.break_even";
    pub const REPORT_YEARS_UNIT: &str = "report.years_unit";
    pub const REPORT_NEED_MAINTENANCE: &str = "report.need_maintenance";
    pub const REPORT_NEED_DEVICE_COST: &str = "report.need_device_cost";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_VARIANT: &str = "settings.current_variant";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 값이 우선이고, 한국어 번역이 없으면 영어 문자열을 쓴다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        tracing::warn!(path = %path.display(), "language pack ignored: no string entries");
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        ERROR_IO => "입출력 오류",
        ERROR_JSON => "JSON 직렬화 오류",
        ERROR_CONFIG_IO => "설정 파일 입출력 오류",
        ERROR_CONFIG_PARSE => "설정 파싱 오류",
        ERROR_CONFIG_SERIALIZE => "설정 직렬화 오류",
        ERROR_BOUNDARIES => "등급 경계는 0 이상이고 엄격히 증가해야 합니다",
        ERROR_ZERO_HORIZON => "분석 기간은 1년 이상이어야 합니다",
        MAIN_MENU_TITLE => "\n=== 장비 비용 분석기 ===",
        MAIN_MENU_ANALYZE => "1) 비용 분석 및 구매 권고",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ANALYZE_HEADING => "\n-- 비용 분석 --",
        ANALYZE_NOTE_EMPTY => "참고: 비워 두거나 숫자가 아니면 값 없음으로 처리합니다.",
        PROMPT_HOURS => "하루 가동 시간 [h]: ",
        PROMPT_RATE => "시간당 유지보수 단가 [USD/h]: ",
        PROMPT_DEVICE_COST => "장비 구매가 [USD]: ",
        PROMPT_DEPRECIATION => "연간 감가상각률 [%] (기본 15): ",
        PROMPT_RELIABILITY => "신뢰도 점수 [0~100] (기본 65): ",
        REPORT_BREAKDOWN => "유지보수 비용 내역",
        REPORT_PERIOD => "기간",
        REPORT_COST => "유지보수비",
        REPORT_SHARE => "장비가 대비",
        REPORT_DAILY => "일",
        REPORT_WEEKLY => "주 (5일)",
        REPORT_MONTHLY => "월 (4주)",
        REPORT_YEARLY => "연 (12개월)",
        REPORT_HORIZON => "분석 기간 누적",
        REPORT_DEVICE_COST => "장비 구매가",
        REPORT_TOTAL => "기간 총비용",
        REPORT_ADJUSTMENT => "신뢰도 보정계수:",
        REPORT_SCHEDULE => "연차별 잔존가치",
        REPORT_YEAR => "년차",
        REPORT_RECOMMENDATION => "구매 권고",
        REPORT_ANALYSIS => "판단 근거:",
        REPORT_YEARLY_RATIO => "연간 유지보수비 비율:",
        REPORT_HORIZON_RATIO => "기간 유지보수비 비율:",
        REPORT_NET_COST => "기간 순비용:",
        REPORT_RESIDUAL => "기간 말 잔존가치:",
        REPORT_BREAK_EVEN => "손익분기:",
        REPORT_YEARS_UNIT => "년",
        REPORT_NEED_MAINTENANCE => "가동 시간과 단가를 입력하면 비용 분석을 볼 수 있습니다.",
        REPORT_NEED_DEVICE_COST => "장비 구매가를 입력하면 구매 권고를 받을 수 있습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_VARIANT => "현재 엔진 구성:",
        SETTINGS_OPTIONS => "1) advanced (5년, 감가상각/신뢰도 반영)  2) basic (4년, 시간×단가)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "엔진 구성이 다음으로 설정되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        ERROR_IO => "I/O error",
        ERROR_JSON => "JSON serialization error",
        ERROR_CONFIG_IO => "config file I/O error",
        ERROR_CONFIG_PARSE => "config parse error",
        ERROR_CONFIG_SERIALIZE => "config serialization error",
        ERROR_BOUNDARIES => "tier boundaries must be non-negative and strictly increasing",
        ERROR_ZERO_HORIZON => "horizon must be at least one year",
        MAIN_MENU_TITLE => "\n=== Device Cost Analyzer ===",
        MAIN_MENU_ANALYZE => "1) Cost analysis & purchase recommendation",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ANALYZE_HEADING => "\n-- Cost Analysis --",
        ANALYZE_NOTE_EMPTY => "Note: blank or non-numeric entries are treated as missing.",
        PROMPT_HOURS => "Hours worked per day [h]: ",
        PROMPT_RATE => "Maintenance rate per hour [USD/h]: ",
        PROMPT_DEVICE_COST => "Initial device cost [USD]: ",
        PROMPT_DEPRECIATION => "Annual depreciation [%] (default 15): ",
        PROMPT_RELIABILITY => "Reliability score [0-100] (default 65): ",
        REPORT_BREAKDOWN => "Maintenance Cost Breakdown",
        REPORT_PERIOD => "Period",
        REPORT_COST => "Maintenance",
        REPORT_SHARE => "% of device",
        REPORT_DAILY => "Daily",
        REPORT_WEEKLY => "Weekly (5 days)",
        REPORT_MONTHLY => "Monthly (4 weeks)",
        REPORT_YEARLY => "Yearly (12 months)",
        REPORT_HORIZON => "Horizon total",
        REPORT_DEVICE_COST => "Device cost",
        REPORT_TOTAL => "Total horizon cost",
        REPORT_ADJUSTMENT => "Reliability adjustment factor:",
        REPORT_SCHEDULE => "Depreciation Schedule",
        REPORT_YEAR => "Year",
        REPORT_RECOMMENDATION => "Purchase Recommendation",
        REPORT_ANALYSIS => "Analysis:",
        REPORT_YEARLY_RATIO => "Yearly maintenance ratio:",
        REPORT_HORIZON_RATIO => "Horizon maintenance ratio:",
        REPORT_NET_COST => "Net horizon cost:",
        REPORT_RESIDUAL => "Residual value at horizon:",
        REPORT_BREAK_EVEN => "Break-even point:",
        REPORT_YEARS_UNIT => "years",
        REPORT_NEED_MAINTENANCE => "Enter maintenance details to see cost analysis.",
        REPORT_NEED_DEVICE_COST => "Add device cost to get a purchase recommendation.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_VARIANT => "Current engine variant:",
        SETTINGS_OPTIONS => "1) advanced (5 years, depreciation/reliability)  2) basic (4 years, hours x rate)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; variant unchanged.",
        SETTINGS_SAVED => "Engine variant changed to:",
        _ => "[missing translation]",
    }
}

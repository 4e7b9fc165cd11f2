// ==========================================
// PLMECO - 时间解析
// ==========================================
// 职责: 单元格 → 一天中的时刻（分钟精度）
// 顺序: 数值(一天的比例) → 日期时间 → 文本("07:30" / "7.30" / "730")
// 红线: 永不报错，无法解析时返回 None
// ==========================================

use crate::importer::worksheet::CellValue;
use chrono::{NaiveTime, Timelike};

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// 按单元格声明类型解析时刻
pub fn parse_cell_time(cell: &CellValue) -> Option<NaiveTime> {
    match cell {
        CellValue::Empty => None,
        CellValue::Number(v) => parse_day_fraction(*v),
        CellValue::DateTime(dt) => NaiveTime::from_hms_opt(dt.hour(), dt.minute(), 0),
        CellValue::Text(s) => parse_time_text(s),
    }
}

/// 一天的比例 → 时刻
///
/// 先按毫秒取整，再截断到分钟；整数天部分丢弃。
pub fn parse_day_fraction(value: f64) -> Option<NaiveTime> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let millis = (value * MILLIS_PER_DAY).round() as i64;
    let minute_of_day = (millis / 60_000).rem_euclid(MINUTES_PER_DAY);
    NaiveTime::from_hms_opt((minute_of_day / 60) as u32, (minute_of_day % 60) as u32, 0)
}

/// 文本 → 时刻
///
/// - `"07:30"`, `"7:30:15"`, `"7.30"`, `"7,30"` → 07:30
/// - `"730"`, `"0730"` → 07:30；`"075"` → 07:05
/// - `"25:99"`, `"12345"`, `""` → None
pub fn parse_time_text(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(['.', ','], ":");
    if let Some(t) = parse_strict(&normalized) {
        return Some(t);
    }

    let digits: String = normalized.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        3 => parse_strict(&format!("0{}:{}", &digits[..1], &digits[1..]))
            // "075": 0075 不合法时按 07:05 读取
            .or_else(|| parse_strict(&format!("{}:0{}", &digits[..2], &digits[2..]))),
        4 => parse_strict(&format!("{}:{}", &digits[..2], &digits[2..])),
        _ => None,
    }
}

/// 严格格式 `H[H]:M[M][:S[S]]`，秒被丢弃
fn parse_strict(value: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = value.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut numbers = [0u32; 3];
    for (idx, part) in parts.iter().enumerate() {
        if part.is_empty() || part.len() > 2 || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        numbers[idx] = part.parse().ok()?;
    }

    let [hour, minute, second] = numbers;
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// 时刻 → "HH:MM"（None 为空串）
pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

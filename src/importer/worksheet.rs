// ==========================================
// PLMECO - 工作表抽象
// ==========================================
// 职责: 把具体的表格库隔离在 Worksheet trait 之后
// 实现: CalamineSheet (xlsx/xls/ods) / CsvSheet (csv)
// 约定: 行号、列号均从 1 开始
// ==========================================

use crate::importer::error::ImportResult;
use calamine::{Data, Range};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::ReaderBuilder;
use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::io::Read;
use tracing::debug;

/// 单元格声明类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Number,
    DateTime,
    Text,
}

/// 单元格值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),             // 数值（时间列中为一天的比例）
    DateTime(NaiveDateTime), // 日期时间
    Text(String),
}

impl CellValue {
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Empty => CellKind::Empty,
            CellValue::Number(_) => CellKind::Number,
            CellValue::DateTime(_) => CellKind::DateTime,
            CellValue::Text(_) => CellKind::Text,
        }
    }

    /// 单元格的文本表示
    pub fn text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(v) => v.to_string(),
            CellValue::DateTime(dt) if is_time_only(dt) => {
                dt.format("%H:%M").to_string()
            }
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// Excel 日期序列号的 0 点（1899-12-30）
fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// 序列号小于 1 的纯时间单元格落在 1899-12-30/31
fn is_time_only(dt: &NaiveDateTime) -> bool {
    dt.date() <= excel_epoch() + chrono::Days::new(1)
}

// ==========================================
// Worksheet Trait
// ==========================================
// 用途: 表头识别与行提取的唯一输入
// 实现者: CalamineSheet, CsvSheet
pub trait Worksheet {
    /// 工作表名称
    fn name(&self) -> &str;

    /// 最后使用的行号（空表为 0）
    fn last_row(&self) -> usize;

    /// 最后使用的列号（空表为 0）
    fn last_column(&self) -> usize;

    /// 读取单元格（越界返回 Empty）
    fn cell(&self, row: usize, column: usize) -> CellValue;
}

// ==========================================
// CalamineSheet - calamine Range 适配
// ==========================================
pub struct CalamineSheet {
    name: String,
    range: Range<Data>,
}

impl CalamineSheet {
    pub fn new(name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }
}

impl Worksheet for CalamineSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_row(&self) -> usize {
        self.range.end().map(|(r, _)| r as usize + 1).unwrap_or(0)
    }

    fn last_column(&self) -> usize {
        self.range.end().map(|(_, c)| c as usize + 1).unwrap_or(0)
    }

    fn cell(&self, row: usize, column: usize) -> CellValue {
        if row == 0 || column == 0 {
            return CellValue::Empty;
        }
        self.range
            .get_value(((row - 1) as u32, (column - 1) as u32))
            .map(CellValue::from)
            .unwrap_or(CellValue::Empty)
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            // 时长单元格按一天的比例处理
            Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Number(dt.as_f64())),
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// ODS 等格式的 ISO 日期时间文本
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    s.parse::<NaiveTime>()
        .ok()
        .map(|t| excel_epoch().and_time(t))
}

// ==========================================
// CsvSheet - CSV 内容适配（全部为文本单元格）
// ==========================================
pub struct CsvSheet {
    name: String,
    rows: Vec<Vec<String>>,
    last_row: usize,
    last_column: usize,
}

impl CsvSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        // 使用范围: 去掉尾部空行/空列
        let mut last_row = 0;
        let mut last_column = 0;
        for (idx, row) in rows.iter().enumerate() {
            if let Some(col) = row.iter().rposition(|v| !v.trim().is_empty()) {
                last_row = idx + 1;
                last_column = last_column.max(col + 1);
            }
        }

        Self {
            name: name.into(),
            rows,
            last_row,
            last_column,
        }
    }

    /// 从任意 Reader 读取 CSV（无表头、允许行长不一致）
    ///
    /// 分隔符按首个非空行识别（`,` / `;` / 制表符）；
    /// 非 UTF-8 内容按 Windows-1252 解码（Excel 西语环境导出的默认编码）。
    pub fn from_reader<R: Read>(name: impl Into<String>, mut reader: R) -> ImportResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode_csv_bytes(&bytes);
        let delimiter = sniff_delimiter(&text);

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|v| v.to_string()).collect());
        }

        Ok(Self::new(name, rows))
    }
}

fn decode_csv_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }
    debug!("CSV 不是 UTF-8，按 Windows-1252 解码");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text
}

/// 首个非空行中出现最多的候选分隔符；都没有时为 `,`
fn sniff_delimiter(text: &str) -> u8 {
    let Some(line) = text.lines().find(|l| !l.trim().is_empty()) else {
        return b',';
    };
    [b',', b';', b'\t']
        .into_iter()
        .map(|d| (d, line.bytes().filter(|&b| b == d).count()))
        .fold((b',', 0), |best, cur| if cur.1 > best.1 { cur } else { best })
        .0
}

impl Worksheet for CsvSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_row(&self) -> usize {
        self.last_row
    }

    fn last_column(&self) -> usize {
        self.last_column
    }

    fn cell(&self, row: usize, column: usize) -> CellValue {
        if row == 0 || column == 0 {
            return CellValue::Empty;
        }
        match self.rows.get(row - 1).and_then(|r| r.get(column - 1)) {
            Some(v) if !v.trim().is_empty() => CellValue::Text(v.clone()),
            _ => CellValue::Empty,
        }
    }
}

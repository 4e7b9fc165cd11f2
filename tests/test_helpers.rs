// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 构造内存工作表、临时 CSV 文件、临时快照目录
// ==========================================

#![allow(dead_code)]

use calamine::{Data, Range};
use plmeco::importer::{CalamineSheet, Worksheet};
use plmeco::persistence::SnapshotStore;
use std::io::Write;
use tempfile::{Builder, NamedTempFile, TempDir};

/// 文本网格 → 内存工作表（空字符串保持为空单元格）
pub fn text_sheet(name: &str, rows: &[&[&str]]) -> Box<dyn Worksheet> {
    let cells: Vec<Vec<Data>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| {
                    if v.is_empty() {
                        Data::Empty
                    } else {
                        Data::String(v.to_string())
                    }
                })
                .collect()
        })
        .collect();
    data_sheet(name, cells)
}

/// 任意单元格网格 → 内存工作表
pub fn data_sheet(name: &str, rows: Vec<Vec<Data>>) -> Box<dyn Worksheet> {
    let height = rows.len().max(1) as u32;
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0).max(1) as u32;

    let mut range = Range::new((0, 0), (height - 1, width - 1));
    for (r, row) in rows.into_iter().enumerate() {
        for (c, value) in row.into_iter().enumerate() {
            range.set_value((r as u32, c as u32), value);
        }
    }
    Box::new(CalamineSheet::new(name, range))
}

/// 标准装车表头
pub const STANDARD_HEADER: &[&str] = &[
    "TRANSPORTISTA",
    "MATRICULA",
    "DESTINO",
    "MUELLE",
    "ESTADO",
    "SALIDA TOPE",
    "PRECINTO",
];

/// 写入临时 CSV 文件（需要保持 NamedTempFile 存活）
pub fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = Builder::new()
        .prefix("cargas_")
        .suffix(".csv")
        .tempfile()
        .expect("创建临时 CSV 失败");
    for line in lines {
        writeln!(file, "{}", line).expect("写入临时 CSV 失败");
    }
    file
}

/// 临时目录中的快照存储（需要保持 TempDir 存活）
pub fn temp_store() -> (TempDir, SnapshotStore) {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let store = SnapshotStore::new(dir.path());
    (dir, store)
}

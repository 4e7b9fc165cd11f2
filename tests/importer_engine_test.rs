// ==========================================
// PLMECO - 导入流程集成测试
// ==========================================
// 覆盖: 表头识别 / 空行跳过 / 多工作表选择 / 月台排序 / 时间列
// ==========================================

mod test_helpers;

use calamine::{Data, ExcelDateTime, ExcelDateTimeType};
use chrono::NaiveTime;
use plmeco::domain::SchemaField;
use plmeco::importer::{
    format_time, parse_time_text, FieldMapper, ImportError, LoadImporter, LoadImporterImpl,
    UniversalFileParser, Worksheet,
};
use std::path::Path;
use test_helpers::{data_sheet, text_sheet, write_csv, STANDARD_HEADER};

fn hm(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

// ==========================================
// 表头识别
// ==========================================

#[test]
fn test_header_after_decorative_rows() {
    let sheet = text_sheet(
        "Cargas",
        &[
            &["PLAN DE CARGA", "", "", ""],
            &["LADO", "SECCIÓN", "CARGA", ""],
            &["", "", "", ""],
            &["Matrícula", "Destino", "Muelle", "Estado"],
            &["1234ABC", "MADRID", "3", "OK"],
        ],
    );

    let outcome = LoadImporterImpl::default().import_worksheets(&[sheet]);

    assert_eq!(outcome.sheet_name, "Cargas");
    assert_eq!(outcome.header_row, 4);
    assert_eq!(outcome.header_map.len(), 4);
    assert_eq!(outcome.header_map[&SchemaField::Plate], 1);
    assert_eq!(outcome.header_map[&SchemaField::Status], 4);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].plate, "1234ABC");
    assert_eq!(outcome.rows[0].destination, "MADRID");
}

#[test]
fn test_synonyms_and_accents() {
    let sheet = text_sheet(
        "Hoja1",
        &[
            &["transporter", "Placa", "Dest.", "Dock", "status", "Tope", "Nº precinto"],
            &["TRANS SL", "9999ZZZ", "BILBAO", "7", "PENDIENTE", "06:15", "P-77"],
        ],
    );

    let outcome = LoadImporterImpl::default().import_worksheets(&[sheet]);

    assert_eq!(outcome.header_map.len(), 7);
    let row = &outcome.rows[0];
    assert_eq!(row.carrier, "TRANS SL");
    assert_eq!(row.seal, "P-77");
    assert_eq!(row.deadline, hm(6, 15));
}

// ==========================================
// 行提取
// ==========================================

#[test]
fn test_blank_rows_are_skipped() {
    let sheet = text_sheet(
        "Cargas",
        &[
            STANDARD_HEADER,
            &["T1", "1111AAA", "MADRID", "1", "OK", "07:30", ""],
            &["", "", "", "", "", "", ""],
            &["  ", "", "", "", "", "", ""],
            &["T2", "2222BBB", "SEVILLA", "2", "OK", "", ""],
        ],
    );

    let outcome = LoadImporterImpl::default().import_worksheets(&[sheet]);

    assert_eq!(outcome.rows.len(), 2);
    assert_eq!(outcome.rows[0].plate, "1111AAA");
    assert_eq!(outcome.rows[1].plate, "2222BBB");
    assert_eq!(outcome.rows[1].deadline, None);
}

#[test]
fn test_deadline_cell_kinds() {
    let header: Vec<Data> = ["MATRICULA", "DESTINO", "MUELLE", "ESTADO", "SALIDA TOPE"]
        .iter()
        .map(|v| Data::String(v.to_string()))
        .collect();
    let row = |plate: &str, dock: &str, deadline: Data| -> Vec<Data> {
        vec![
            Data::String(plate.to_string()),
            Data::String("VALENCIA".to_string()),
            Data::String(dock.to_string()),
            Data::String("OK".to_string()),
            deadline,
        ]
    };

    let sheet = data_sheet(
        "Cargas",
        vec![
            header,
            row("A1", "1", Data::Float(0.3125)),
            row("A2", "2", Data::String("730".to_string())),
            row("A3", "3", Data::String("7.30".to_string())),
            row("A4", "4", Data::String("25:99".to_string())),
            row("A5", "5", Data::Int(1)),
            row(
                "A6",
                "6",
                Data::DateTime(ExcelDateTime::new(0.6875, ExcelDateTimeType::TimeDelta, false)),
            ),
            row(
                "A7",
                "7",
                Data::DateTime(ExcelDateTime::new(45000.25, ExcelDateTimeType::DateTime, false)),
            ),
        ],
    );

    let outcome = LoadImporterImpl::default().import_worksheets(&[sheet]);
    let deadlines: Vec<Option<NaiveTime>> = outcome.rows.iter().map(|r| r.deadline).collect();

    assert_eq!(
        deadlines,
        vec![
            hm(7, 30),
            hm(7, 30),
            hm(7, 30),
            None,
            hm(0, 0),
            hm(16, 30),
            hm(6, 0)
        ]
    );
}

#[test]
fn test_numeric_plate_cell_is_text() {
    let header: Vec<Data> = ["MATRICULA", "DESTINO", "MUELLE", "ESTADO"]
        .iter()
        .map(|v| Data::String(v.to_string()))
        .collect();
    let sheet = data_sheet(
        "Cargas",
        vec![
            header,
            vec![
                Data::Float(4321.0),
                Data::String("LEON".to_string()),
                Data::Int(5),
                Data::String("OK".to_string()),
            ],
        ],
    );

    let outcome = LoadImporterImpl::default().import_worksheets(&[sheet]);

    assert_eq!(outcome.rows[0].plate, "4321");
    assert_eq!(outcome.rows[0].dock, "5");
}

// ==========================================
// 排序
// ==========================================

#[test]
fn test_rows_sorted_by_dock_and_renumbered() {
    let sheet = text_sheet(
        "Cargas",
        &[
            &["MATRICULA", "DESTINO", "MUELLE", "ESTADO"],
            &["P12", "D", "12", "OK"],
            &["PA", "D", "A", "OK"],
            &["P3", "D", "3", "OK"],
            &["PB", "D", "B", "OK"],
        ],
    );

    let outcome = LoadImporterImpl::default().import_worksheets(&[sheet]);

    let docks: Vec<&str> = outcome.rows.iter().map(|r| r.dock.as_str()).collect();
    assert_eq!(docks, vec!["3", "12", "A", "B"]);
    let ids: Vec<u32> = outcome.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

// ==========================================
// 多工作表
// ==========================================

#[test]
fn test_selects_four_match_sheet_over_first() {
    let three = text_sheet(
        "Resumen",
        &[
            &["MATRICULA", "DESTINO", "MUELLE", "OTRO"],
            &["X", "Y", "1", "Z"],
        ],
    );
    let four = text_sheet(
        "Cargas",
        &[
            &["MATRICULA", "DESTINO", "MUELLE", "ESTADO"],
            &["1234ABC", "MADRID", "3", "OK"],
        ],
    );

    let outcome = LoadImporterImpl::default().import_worksheets(&[three, four]);

    assert_eq!(outcome.sheet_name, "Cargas");
    assert_eq!(outcome.rows.len(), 1);
}

#[test]
fn test_no_viable_sheet_yields_empty_outcome() {
    let a = text_sheet("A", &[&["MATRICULA", "DESTINO"], &["1", "2"]]);
    let b = text_sheet("B", &[&["MUELLE", "ESTADO", "PRECINTO"], &["1", "OK", "P"]]);

    let outcome = LoadImporterImpl::default().import_worksheets(&[a, b]);

    assert!(outcome.is_empty());
    assert!(outcome.header_map.is_empty());
}

#[test]
fn test_scan_limit_from_mapper() {
    let filler: &[&str] = &["x"];
    let mut rows: Vec<&[&str]> = vec![filler; 5];
    rows.push(&["MATRICULA", "DESTINO", "MUELLE", "ESTADO"]);
    rows.push(&["1234ABC", "MADRID", "3", "OK"]);
    let sheet = text_sheet("Cargas", &rows);

    let limited = LoadImporterImpl::new(Box::new(UniversalFileParser), FieldMapper::new(3));
    assert!(limited.import_worksheets(&[sheet]).is_empty());
}

// ==========================================
// 文件入口
// ==========================================

#[test]
fn test_import_csv_file() {
    let file = write_csv(&[
        "Plan del día,,,,",
        "MATRICULA,DESTINO,MUELLE,ESTADO,SALIDA TOPE",
        "2222BBB,SEVILLA,10,OK,0730",
        "1111AAA,MADRID,2,OK,8:05",
    ]);

    let outcome = LoadImporterImpl::default()
        .import_file(file.path())
        .expect("导入失败");

    let expected_name = file
        .path()
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    assert_eq!(outcome.sheet_name, expected_name);
    assert_eq!(outcome.header_row, 2);
    assert_eq!(outcome.rows[0].plate, "1111AAA");
    assert_eq!(format_time(outcome.rows[0].deadline), "08:05");
    assert_eq!(format_time(outcome.rows[1].deadline), "07:30");
}

#[test]
fn test_import_semicolon_csv_file() {
    let file = write_csv(&[
        "MATRICULA;DESTINO;MUELLE;ESTADO;SALIDA TOPE",
        "1111AAA;MADRID, NORTE;4;OK;1645",
    ]);

    let outcome = LoadImporterImpl::default()
        .import_file(file.path())
        .expect("导入失败");

    assert_eq!(outcome.header_map.len(), 5);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].destination, "MADRID, NORTE");
    assert_eq!(outcome.rows[0].deadline, hm(16, 45));
}

#[test]
fn test_import_missing_file_is_error() {
    let result = LoadImporterImpl::default().import_file(Path::new("no_existe.csv"));
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_formatted_time_reparses() {
    for text in ["730", "7.30", "0730", "23:59", "0:00", "075"] {
        let parsed = parse_time_text(text);
        assert!(parsed.is_some(), "{} 应可解析", text);
        assert_eq!(parse_time_text(&format_time(parsed)), parsed);
    }
}

#[test]
fn test_sheet_trait_object_name() {
    let sheet = text_sheet("Muelles", &[&["MATRICULA"]]);
    assert_eq!(sheet.name(), "Muelles");
    assert_eq!(sheet.last_row(), 1);
}

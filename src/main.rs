// ==========================================
// PLMECO - 命令行入口
// ==========================================
// 用法:
//   plmeco import <文件> [--json]                导入并打印结果
//   plmeco export <输入文件> <输出.xlsx|输出.csv>  导入后导出（xlsx 带状态着色）
//   plmeco restore                               查看自动保存快照
//   plmeco clear                                 删除自动保存快照
// 通用开关:
//   --log-json                                   日志以 JSON 输出到 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use plmeco::config::AppConfig;
use plmeco::exporter::{RowExporter, UniversalExporter};
use plmeco::i18n::{self, t, t_with_args};
use plmeco::importer::{format_time, LoadImporter, LoadImporterImpl};
use plmeco::logging::{self, LogFormat};
use plmeco::persistence::SnapshotStore;
use plmeco::{ImportOutcome, APP_NAME, VERSION};
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    logging::init(LogFormat::from_args(&args));

    let config = AppConfig::from_env();
    i18n::set_locale(&config.locale);
    tracing::debug!(?config, "{} {}", APP_NAME, VERSION);

    // 位置参数（去掉 -- 开关）
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect();
    let command = positional.first().copied().unwrap_or("");

    match command {
        "import" => {
            let file = positional
                .get(1)
                .context("缺少文件参数: plmeco import <文件>")?;
            let as_json = args.iter().any(|a| a == "--json");
            let outcome = import(&config, file)?;
            if as_json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&outcome);
            }
        }
        "export" => {
            let (Some(input), Some(output)) = (positional.get(1), positional.get(2)) else {
                bail!("缺少参数: plmeco export <输入文件> <输出.xlsx|输出.csv>");
            };
            let outcome = import(&config, input)?;
            if outcome.is_empty() {
                println!("{}", t("import.no_rows"));
                return Ok(());
            }
            UniversalExporter
                .export_file(Path::new(output), &outcome.rows)
                .map_err(|e| {
                    anyhow::anyhow!(t_with_args("save.failed", &[("error", e.to_string().as_str())]))
                })?;
            println!("{}", t_with_args("save.saved", &[("path", *output)]));
        }
        "restore" => {
            let snapshot = SnapshotStore::from_config(&config).load();
            if snapshot.documents.is_empty() {
                println!("{}", t("autosave.empty"));
            } else {
                println!(
                    "{}",
                    t_with_args(
                        "autosave.restored",
                        &[("documents", snapshot.documents.len().to_string().as_str())]
                    )
                );
                for (idx, doc) in snapshot.documents.iter().enumerate() {
                    let marker = if idx == snapshot.selected_index { "*" } else { " " };
                    println!("{} {} ({} filas)", marker, doc.title, doc.rows.len());
                }
            }
        }
        "clear" => {
            SnapshotStore::from_config(&config).clear()?;
            println!("{}", t("autosave.cleared"));
        }
        _ => {
            println!("{} {}", APP_NAME, VERSION);
            println!("uso: plmeco <import|export|restore|clear> ... [--log-json]");
        }
    }

    Ok(())
}

fn import(config: &AppConfig, file: &str) -> Result<ImportOutcome> {
    let importer = LoadImporterImpl::from_config(config);
    importer.import_file(Path::new(file)).map_err(|e| {
        anyhow::anyhow!(t_with_args("import.failed", &[("error", e.to_string().as_str())]))
    })
}

fn print_outcome(outcome: &ImportOutcome) {
    if outcome.is_empty() {
        println!("{}", t("import.no_rows"));
        return;
    }

    println!(
        "{}",
        t_with_args(
            "import.imported",
            &[
                ("sheet", outcome.sheet_name.as_str()),
                ("header_row", outcome.header_row.to_string().as_str()),
                ("rows", outcome.rows.len().to_string().as_str()),
            ],
        )
    );
    for (field, column) in &outcome.header_map {
        println!("  {:<14} → columna {}", field.label(), column);
    }
    for row in &outcome.rows {
        println!(
            "{:>4}  {:<6} {:<10} {:<16} {:<12} {:<5} {}",
            row.id,
            row.dock,
            row.plate,
            row.destination,
            row.status,
            format_time(row.deadline),
            row.carrier
        );
    }
}

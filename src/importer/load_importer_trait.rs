// ==========================================
// PLMECO - 导入 Trait
// ==========================================
// 职责: 定义导入接口（不包含实现）
// ==========================================

use crate::domain::load::ImportOutcome;
use crate::importer::error::ImportResult;
use crate::importer::worksheet::Worksheet;
use std::path::Path;

// ==========================================
// LoadImporter Trait
// ==========================================
// 用途: 装车计划导入主接口
// 实现者: LoadImporterImpl
pub trait LoadImporter {
    /// 从文件导入装车记录
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 导入结果（rows 可能为空，表示没有可导入的行）
    /// - Err: 文件不存在 / 格式不支持 / 无法解析
    fn import_file(&self, file_path: &Path) -> ImportResult<ImportOutcome>;

    /// 从已打开的工作表导入
    ///
    /// # 流程
    /// 1. 逐表识别表头，选得分最高的表（平局取靠前的）
    /// 2. 校验最小字段集
    /// 3. 提取数据行
    /// 4. 按月台排序
    fn import_worksheets(&self, sheets: &[Box<dyn Worksheet>]) -> ImportOutcome;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 打开文件并列出工作表
// 实现者: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser {
    /// 打开文件，按文件中的顺序返回全部工作表
    fn open_worksheets(&self, file_path: &Path) -> ImportResult<Vec<Box<dyn Worksheet>>>;
}

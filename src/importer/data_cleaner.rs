// ==========================================
// PLMECO - 文本清洗
// ==========================================
// 职责: 表头比较前的标准化（大写 / 去重音 / Ñ→N / 去首尾空白）
// ==========================================

/// 标准化表头文本
///
/// `"  Matrícula "` → `"MATRICULA"`，`"Año"` → `"ANO"`
pub fn normalize_header(value: &str) -> String {
    value
        .trim()
        .to_uppercase()
        .chars()
        .map(fold_accent)
        .collect::<String>()
        .trim()
        .to_string()
}

/// 去掉重音（输入已为大写）
fn fold_accent(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ñ' => 'N',
        other => other,
    }
}

/// 清洗普通文本字段（TRIM）
pub fn clean_text(value: &str) -> String {
    value.trim().to_string()
}

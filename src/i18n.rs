// ==========================================
// PLMECO - 界面文本
// ==========================================
// 文本文件: locales/es.yml（默认）、locales/en.yml
// 占位符: %{name}
// rust_i18n::i18n! 在 lib.rs 中声明
// ==========================================

use tracing::warn;

/// 已提供文本的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["es", "en"];

/// 默认语言（仓库现场使用西班牙语）
pub const FALLBACK_LOCALE: &str = "es";

/// 规范化语言代码: "es-ES" / "en_US.UTF-8" → "es" / "en"，未知语言回退到西班牙语
pub fn supported_locale(locale: &str) -> &'static str {
    let lang = locale
        .split(['-', '_', '.'])
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    match SUPPORTED_LOCALES.iter().find(|l| **l == lang) {
        Some(l) => *l,
        None => {
            warn!(locale = locale, "不支持的语言，使用西班牙语");
            FALLBACK_LOCALE
        }
    }
}

pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换界面语言（PLMECO_LOCALE）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(supported_locale(locale));
}

/// 取文本，例如 `t("autosave.empty")`
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 取文本并替换占位符
///
/// ```no_run
/// use plmeco::i18n::t_with_args;
/// let msg = t_with_args("save.saved", &[("path", "/tmp/cargas.xlsx")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |text, (name, value)| {
        text.replace(&format!("%{{{}}}", name), value)
    })
}

// ==========================================
// PLMECO - 日志系统
// ==========================================
// 输出: stderr（stdout 留给命令结果 / --json 输出）
// 格式: 文本（默认）或 JSON（--log-json，便于收集导入诊断）
// 级别: RUST_LOG，默认 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// 命令行开关
pub const LOG_JSON_FLAG: &str = "--log-json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// 参数中带 `--log-json` 时为 JSON
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        if args.iter().any(|a| a.as_ref() == LOG_JSON_FLAG) {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化日志（进程内只调用一次）
///
/// ```no_run
/// use plmeco::logging::{self, LogFormat};
/// let args: Vec<String> = std::env::args().collect();
/// logging::init(LogFormat::from_args(&args));
/// ```
pub fn init(format: LogFormat) {
    let builder = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.with_target(true).with_line_number(true).init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// 测试用: debug 级别，输出交给测试框架捕获；重复调用无副作用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("plmeco=debug"))
        .with_test_writer()
        .try_init();
}

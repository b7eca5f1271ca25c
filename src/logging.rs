// ==========================================
// 运单 ETA 风险分类器 - 日志
// ==========================================
// stdout 只输出评估结果，日志一律走 stderr
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 命令行日志订阅器
///
/// 级别取自 RUST_LOG，未设置或无法解析时为 info。
/// 单票判定细节在 debug/trace 级别，可用
/// `RUST_LOG=shipment_eta_risk::engine=debug` 单独打开。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 测试用订阅器: debug 级别，输出交给测试框架捕获; 重复调用无副作用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

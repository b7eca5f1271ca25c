// ==========================================
// 运单 ETA 风险分类器 - 配置层
// ==========================================
// 职责: 规则阈值与线路映射覆盖的加载
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod error;
pub mod risk_config_trait;
pub mod risk_thresholds;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use risk_config_trait::RiskConfigReader;
pub use risk_thresholds::RiskThresholds;

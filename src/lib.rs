// ==========================================
// 运单 ETA 风险分类器 - 核心库
// ==========================================
// 职责: 根据运单在途快照判定 ETA 延误风险，并给出原因码
// 系统定位: 决策支持（只给出风险与原因，不做处置）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 快照与类型
pub mod domain;

// 引擎层 - 线路与风险规则
pub mod engine;

// 导入层 - 外部快照文件
pub mod importer;

// 配置层 - 阈值与映射覆盖
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

use std::sync::OnceLock;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{LaneType, ReasonCode, Stage};

// 领域实体
pub use domain::{
    BatchReport, ExternalConditions, LabelDrift, ReasonSet, ShipmentAssessment, ShipmentSnapshot,
};

// 引擎
pub use engine::{
    CountryTable, EtaWindowSelector, LaneClassifier, LaneResolver, RiskRuleEngine,
    ShipmentRiskClassifier,
};

// 配置
pub use config::{ConfigError, ConfigManager, RiskConfigReader, RiskThresholds};

// 导入
pub use importer::{FileSnapshotLoader, ImportError, SnapshotLoader};

// ==========================================
// 便捷入口（标准阈值 + 内置映射表）
// ==========================================

static DEFAULT_CLASSIFIER: OnceLock<ShipmentRiskClassifier> = OnceLock::new();

fn default_classifier() -> &'static ShipmentRiskClassifier {
    DEFAULT_CLASSIFIER.get_or_init(ShipmentRiskClassifier::new)
}

/// 风险原因（有序，可为空）
pub fn classify(shipment: &ShipmentSnapshot) -> ReasonSet {
    default_classifier().classify(shipment)
}

/// 是否存在风险
pub fn is_at_risk(shipment: &ShipmentSnapshot) -> bool {
    default_classifier().is_at_risk(shipment)
}

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "运单 ETA 风险分类器";

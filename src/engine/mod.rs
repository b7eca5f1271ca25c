// ==========================================
// 运单 ETA 风险分类器 - 引擎层
// ==========================================
// 职责: 实现线路解析与风险规则
// 红线: 引擎不做 I/O, 所有结论必须输出 reason
// ==========================================

pub mod classifier;
pub mod eta_window;
pub mod lane_classifier;
pub mod lane_resolver;
pub mod risk;

// 重导出核心引擎
pub use classifier::ShipmentRiskClassifier;
pub use eta_window::EtaWindowSelector;
pub use lane_classifier::LaneClassifier;
pub use lane_resolver::{CountryTable, LaneResolver, ResolvedLane};
pub use risk::RiskRuleEngine;

// ==========================================
// 运单 ETA 风险分类器 - 领域模型层
// ==========================================
// 职责: 定义运单快照、阶段、原因码、评估结果
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod reason_set;
pub mod risk;
pub mod shipment;
pub mod types;

// 重导出核心类型
pub use reason_set::ReasonSet;
pub use risk::{BatchReport, LabelDrift, ShipmentAssessment};
pub use shipment::{ExternalConditions, ShipmentSnapshot};
pub use types::{LaneType, ReasonCode, Stage};

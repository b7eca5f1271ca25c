// ==========================================
// 运单 ETA 风险分类器 - 运单快照领域模型
// ==========================================
// 用途: 分类器的唯一输入，由外部追踪/运营系统构造
// 红线: 只读，分类器不修改、不持久化
// ==========================================

use crate::domain::types::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ExternalConditions - 外部条件
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalConditions {
    #[serde(default)]
    pub weather_index: Option<f64>,   // 天气严重度 (序数)
    #[serde(default)]
    pub port_congestion: Option<f64>, // 港口拥堵度 (序数)
}

// ==========================================
// ShipmentSnapshot - 运单快照
// ==========================================
// 所有字段均可缺失; 数值字段用 Option 表达"是否可用"，0 是有效值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentSnapshot {
    // ===== 标识 =====
    pub shipment_id: Option<String>,
    pub lane: Option<String>, // 仅用于展示

    // ===== 位置 =====
    pub origin_iata: Option<String>,
    pub destination_iata: Option<String>,
    pub origin_country: Option<String>,
    pub destination_country: Option<String>,

    // ===== 进度 =====
    pub stage: Option<Stage>,
    pub days_to_eta: Option<f64>,
    pub scan_gap_hours: Option<f64>,
    pub dwell_hours_current: Option<f64>,
    pub baseline_90pct_hours: Option<f64>,

    // ===== 外部条件 =====
    pub external: ExternalConditions,

    // ===== 描述性元数据 (规则不读取) =====
    pub eta_planned: Option<DateTime<Utc>>,
    pub last_update_ts: Option<DateTime<Utc>>,
    pub severity: Option<String>,
    pub reason_code: Option<Vec<String>>, // 上游标注的原因码
    pub current_carrier_name: Option<String>,
    pub owner: Option<String>,
}

impl ShipmentSnapshot {
    /// 日志/报表使用的运单标识
    pub fn display_id(&self) -> &str {
        self.shipment_id.as_deref().unwrap_or("<unknown>")
    }

    /// 可用于判定的 days_to_eta（NaN 视为缺失）
    pub fn usable_days_to_eta(&self) -> Option<f64> {
        self.days_to_eta.filter(|d| !d.is_nan())
    }
}

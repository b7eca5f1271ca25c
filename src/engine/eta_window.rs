// ==========================================
// 运单 ETA 风险分类器 - ETA 窗口选择
// ==========================================
// Domestic → 2 天; International → 3 天; Indeterminate → 3 天（取宽窗口）
// ==========================================

use crate::config::RiskThresholds;
use crate::domain::types::LaneType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EtaWindowSelector {
    domestic_days: i64,
    international_days: i64,
}

impl Default for EtaWindowSelector {
    fn default() -> Self {
        Self::from_thresholds(&RiskThresholds::default())
    }
}

impl EtaWindowSelector {
    pub fn from_thresholds(thresholds: &RiskThresholds) -> Self {
        Self {
            domestic_days: thresholds.eta_window_domestic_days,
            international_days: thresholds.eta_window_international_days,
        }
    }

    pub fn window_days(&self, lane_type: LaneType) -> i64 {
        match lane_type {
            LaneType::Domestic => self.domestic_days,
            LaneType::International | LaneType::Indeterminate => self.international_days,
        }
    }
}

// ==========================================
// 运单 ETA 风险分类器 - 风险规则引擎
// ==========================================
// 红线: 纯函数，无状态，无 I/O; 数据不足 → 不报风险（不是错误）
// ==========================================
// 输入: 运单快照 + ETA 窗口（天）
// 输出: 有序风险原因集合（可为空）
// ==========================================

use crate::config::RiskThresholds;
use crate::domain::reason_set::ReasonSet;
use crate::domain::shipment::ShipmentSnapshot;
use crate::domain::types::{ReasonCode, Stage};
use tracing::{debug, trace};

// ==========================================
// RiskRuleEngine - 风险规则引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RiskRuleEngine {
    thresholds: RiskThresholds,
}

impl RiskRuleEngine {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算风险原因
    ///
    /// 顺序:
    /// 门控（命中即返回空）
    /// 1) stage = Delivered → 空
    /// 2) days_to_eta 缺失 → 空
    /// 3) days_to_eta > window_days → 空
    /// 检查（相互独立，全部执行）
    /// 4) 阶段滞后 → early_stage_near_eta
    /// 5) 扫描间隔 → scan_gap
    /// 6) 滞留超标 → excess_dwell
    /// 7) 外部条件 → external_risk
    pub fn evaluate(&self, shipment: &ShipmentSnapshot, window_days: i64) -> ReasonSet {
        let mut reasons = ReasonSet::new();
        let id = shipment.display_id();

        // 门控1: 终态
        if shipment.stage.is_some_and(Stage::is_terminal) {
            trace!(shipment_id = id, "已签收，跳过风险判定");
            return reasons;
        }

        // 门控2: 无 ETA 信号
        let Some(days_to_eta) = shipment.usable_days_to_eta() else {
            debug!(shipment_id = id, "days_to_eta 缺失，数据不足不报风险");
            return reasons;
        };

        // 门控3: 远离 ETA
        if days_to_eta > window_days as f64 {
            trace!(shipment_id = id, days_to_eta, window_days, "超出 ETA 窗口");
            return reasons;
        }

        if self.is_stage_lagging(shipment.stage) {
            reasons.push(ReasonCode::EarlyStageNearEta);
        }

        if self.is_scan_gap_exceeded(shipment.stage, shipment.scan_gap_hours) {
            reasons.push(ReasonCode::ScanGap);
        }

        if self.is_dwell_excessive(shipment.dwell_hours_current, shipment.baseline_90pct_hours) {
            reasons.push(ReasonCode::ExcessDwell);
        }

        if self.is_external_risk(
            days_to_eta,
            shipment.external.weather_index,
            shipment.external.port_congestion,
        ) {
            reasons.push(ReasonCode::ExternalRisk);
        }

        if !reasons.is_empty() {
            debug!(shipment_id = id, reasons = ?reasons.codes(), "命中风险规则");
        }
        reasons
    }

    // ==========================================
    // 单项检查
    // ==========================================

    /// 阶段滞后: rank(stage) < rank(Last-Mile)
    ///
    /// 阶段缺失/未知时视为尚未进入末端
    pub fn is_stage_lagging(&self, stage: Option<Stage>) -> bool {
        match stage {
            Some(stage) => stage.rank() < Stage::LastMile.rank(),
            None => true,
        }
    }

    /// 扫描间隔阈值: 末端派送 12h，其他 24h
    pub fn scan_gap_threshold(&self, stage: Option<Stage>) -> f64 {
        match stage {
            Some(Stage::LastMile) => self.thresholds.gap_last_mile_hours,
            Some(
                Stage::OriginPickup
                | Stage::OriginHub
                | Stage::Linehaul
                | Stage::Customs
                | Stage::DestinationHub
                | Stage::Delivered,
            )
            | None => self.thresholds.gap_other_hours,
        }
    }

    /// 扫描间隔: gap > threshold（严格大于）
    pub fn is_scan_gap_exceeded(&self, stage: Option<Stage>, scan_gap_hours: Option<f64>) -> bool {
        usable(scan_gap_hours).is_some_and(|gap| gap > self.scan_gap_threshold(stage))
    }

    /// 滞留超标
    ///
    /// - 有基线: dwell > baseline + buffer
    /// - 无基线: dwell >= fallback
    ///
    /// 基线为 NaN 仍走基线分支，比较结果为 false
    pub fn is_dwell_excessive(&self, dwell_hours: Option<f64>, baseline_p90: Option<f64>) -> bool {
        let Some(dwell) = usable(dwell_hours) else {
            return false;
        };

        match baseline_p90 {
            Some(baseline) => dwell > baseline + self.thresholds.dwell_p90_buffer_hours,
            None => dwell >= self.thresholds.dwell_fallback_hours,
        }
    }

    /// 外部条件: 仅在 days_to_eta <= 固定回看窗口时检查
    ///
    /// 天气 >= 3 或 港口拥堵 >= 7，任一即可; 两者都缺失则不报
    pub fn is_external_risk(
        &self,
        days_to_eta: f64,
        weather_index: Option<f64>,
        port_congestion: Option<f64>,
    ) -> bool {
        if days_to_eta > self.thresholds.external_lookback_days as f64 {
            return false;
        }

        let weather_hit =
            usable(weather_index).is_some_and(|w| w >= self.thresholds.weather_index_threshold);
        let port_hit =
            usable(port_congestion).is_some_and(|p| p >= self.thresholds.port_congestion_threshold);

        weather_hit || port_hit
    }
}

/// NaN 视为缺失
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

// ==========================================
// 运单 ETA 风险分类器 - 分类流水线
// ==========================================
// 流程: 快照 → 线路国家解析 → 线路类型 → ETA 窗口 → 风险规则 → 原因集合
// 红线: 无状态，可跨线程共享; 同一快照重复判定结果一致
// ==========================================

use crate::config::{ConfigResult, RiskConfigReader, RiskThresholds};
use crate::domain::reason_set::ReasonSet;
use crate::domain::risk::{BatchReport, LabelDrift, ShipmentAssessment};
use crate::domain::shipment::ShipmentSnapshot;
use crate::domain::types::LaneType;
use crate::engine::eta_window::EtaWindowSelector;
use crate::engine::lane_classifier::LaneClassifier;
use crate::engine::lane_resolver::{CountryTable, LaneResolver};
use crate::engine::risk::RiskRuleEngine;
use tracing::{info, instrument};

// ==========================================
// ShipmentRiskClassifier - 运单风险分类器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ShipmentRiskClassifier {
    resolver: LaneResolver,
    window_selector: EtaWindowSelector,
    rule_engine: RiskRuleEngine,
}

impl ShipmentRiskClassifier {
    /// 标准阈值 + 内置映射表
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: RiskThresholds) -> Self {
        Self::with_parts(LaneResolver::new(), thresholds)
    }

    pub fn with_parts(resolver: LaneResolver, thresholds: RiskThresholds) -> Self {
        Self {
            resolver,
            window_selector: EtaWindowSelector::from_thresholds(&thresholds),
            rule_engine: RiskRuleEngine::new(thresholds),
        }
    }

    /// 从配置构造（阈值 + IATA 覆盖表）
    pub async fn from_config(reader: &dyn RiskConfigReader) -> ConfigResult<Self> {
        let thresholds = RiskThresholds::load(reader).await?;
        let overrides = reader.get_iata_country_overrides().await?;
        let table = CountryTable::with_overrides(&overrides);

        info!(
            iata_entries = table.len(),
            overrides = overrides.len(),
            "分类器初始化完成"
        );
        Ok(Self::with_parts(LaneResolver::with_table(table), thresholds))
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        self.rule_engine.thresholds()
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 线路类型
    pub fn lane_type(&self, shipment: &ShipmentSnapshot) -> LaneType {
        LaneClassifier::classify_resolved(&self.resolver.resolve(shipment))
    }

    /// ETA 窗口（天）
    pub fn eta_window_days(&self, shipment: &ShipmentSnapshot) -> i64 {
        self.window_selector.window_days(self.lane_type(shipment))
    }

    /// 风险原因（有序，可为空）
    pub fn classify(&self, shipment: &ShipmentSnapshot) -> ReasonSet {
        let window_days = self.eta_window_days(shipment);
        self.rule_engine.evaluate(shipment, window_days)
    }

    /// 是否存在风险
    pub fn is_at_risk(&self, shipment: &ShipmentSnapshot) -> bool {
        !self.classify(shipment).is_empty()
    }

    /// 单票完整评估（含线路信息与标注差异）
    pub fn assess(&self, shipment: &ShipmentSnapshot) -> ShipmentAssessment {
        let lane = self.resolver.resolve(shipment);
        let lane_type = LaneClassifier::classify_resolved(&lane);
        let eta_window_days = self.window_selector.window_days(lane_type);
        let reasons = self.rule_engine.evaluate(shipment, eta_window_days);

        let label_drift = shipment
            .reason_code
            .as_ref()
            .map(|labelled| LabelDrift::compare(labelled, &reasons));

        ShipmentAssessment {
            shipment_id: shipment.shipment_id.clone(),
            lane: shipment.lane.clone(),
            origin_country: lane.origin_country.map(str::to_string),
            destination_country: lane.destination_country.map(str::to_string),
            lane_type,
            eta_window_days,
            at_risk: !reasons.is_empty(),
            reasons,
            label_drift,
        }
    }

    /// 批量评估
    ///
    /// 运单之间无依赖，输出顺序与输入一致
    #[instrument(skip(self, shipments), fields(count = shipments.len()))]
    pub fn evaluate_batch(&self, shipments: &[ShipmentSnapshot]) -> BatchReport {
        let assessments: Vec<ShipmentAssessment> =
            shipments.iter().map(|s| self.assess(s)).collect();
        let report = BatchReport::from_assessments(assessments);

        info!(
            run_id = %report.run_id,
            total = report.total_count,
            at_risk = report.at_risk_count,
            drifted = report.drifted_count,
            "批量风险评估完成"
        );
        report
    }
}

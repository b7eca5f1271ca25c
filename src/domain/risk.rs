// ==========================================
// 运单 ETA 风险分类器 - 风险评估结果领域模型
// ==========================================
// 用途: 分类结果的展示/报表载体，核心契约仍是 ReasonSet
// ==========================================

use crate::domain::reason_set::ReasonSet;
use crate::domain::types::{LaneType, ReasonCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ==========================================
// LabelDrift - 上游标注与计算结果的差异
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDrift {
    pub missing: Vec<String>,      // 上游标注了、本次未计算出
    pub extra: Vec<ReasonCode>,    // 本次计算出、上游未标注
}

impl LabelDrift {
    /// 比较上游标注与计算结果
    ///
    /// 未知的标注字符串原样保留在 missing 中
    pub fn compare(labelled: &[String], computed: &ReasonSet) -> Self {
        let missing = labelled
            .iter()
            .filter(|label| {
                ReasonCode::from_code(label.trim())
                    .map(|code| !computed.contains(code))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        let extra = computed
            .iter()
            .filter(|code| !labelled.iter().any(|l| l.trim() == code.as_str()))
            .collect();

        Self { missing, extra }
    }

    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

// ==========================================
// ShipmentAssessment - 单票评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentAssessment {
    pub shipment_id: Option<String>,
    pub lane: Option<String>,

    // ===== 线路判定 =====
    pub origin_country: Option<String>,
    pub destination_country: Option<String>,
    pub lane_type: LaneType,
    pub eta_window_days: i64,

    // ===== 风险结论 =====
    pub at_risk: bool,
    pub reasons: ReasonSet,

    /// 仅当快照带有上游标注时存在
    pub label_drift: Option<LabelDrift>,
}

impl ShipmentAssessment {
    /// 展示行: `<id>  at_risk=<bool>  reasons=<list>`
    pub fn summary_line(&self) -> String {
        let reasons = self
            .reasons
            .codes()
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}  at_risk={}  reasons=[{}]",
            self.shipment_id.as_deref().unwrap_or("<unknown>"),
            self.at_risk,
            reasons
        )
    }
}

// ==========================================
// BatchReport - 批量评估报表
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub total_count: usize,
    pub at_risk_count: usize,
    pub reason_counts: BTreeMap<ReasonCode, usize>, // 按原因码枚举顺序
    pub drifted_count: usize,
    pub assessments: Vec<ShipmentAssessment>,
}

impl BatchReport {
    pub fn from_assessments(assessments: Vec<ShipmentAssessment>) -> Self {
        let mut reason_counts = BTreeMap::new();
        for assessment in &assessments {
            for code in assessment.reasons.iter() {
                *reason_counts.entry(code).or_insert(0) += 1;
            }
        }

        let at_risk_count = assessments.iter().filter(|a| a.at_risk).count();
        let drifted_count = assessments
            .iter()
            .filter(|a| a.label_drift.as_ref().is_some_and(|d| !d.is_consistent()))
            .count();

        Self {
            run_id: Uuid::new_v4().to_string(),
            evaluated_at: Utc::now(),
            total_count: assessments.len(),
            at_risk_count,
            reason_counts,
            drifted_count,
            assessments,
        }
    }
}

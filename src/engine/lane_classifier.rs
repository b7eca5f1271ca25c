// ==========================================
// 运单 ETA 风险分类器 - 线路类型判定
// ==========================================
// 规则:
//   1) 任一端国家未知 → Indeterminate
//   2) 两端国家代码完全相同（区分大小写） → Domestic
//   3) 否则 → International
// ==========================================

use crate::domain::types::LaneType;
use crate::engine::lane_resolver::ResolvedLane;

pub struct LaneClassifier;

impl LaneClassifier {
    pub fn classify(origin_country: Option<&str>, destination_country: Option<&str>) -> LaneType {
        match (origin_country, destination_country) {
            (Some(origin), Some(destination)) if origin == destination => LaneType::Domestic,
            (Some(_), Some(_)) => LaneType::International,
            _ => LaneType::Indeterminate,
        }
    }

    pub fn classify_resolved(lane: &ResolvedLane<'_>) -> LaneType {
        Self::classify(lane.origin_country, lane.destination_country)
    }
}

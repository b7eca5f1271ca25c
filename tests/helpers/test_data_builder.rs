// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use shipment_eta_risk::domain::shipment::{ExternalConditions, ShipmentSnapshot};
use shipment_eta_risk::domain::types::Stage;

// ==========================================
// ShipmentSnapshot 构建器
// ==========================================
// 默认: 全部字段缺失，仅带运单号

pub struct ShipmentBuilder {
    snapshot: ShipmentSnapshot,
}

impl ShipmentBuilder {
    pub fn new(shipment_id: &str) -> Self {
        Self {
            snapshot: ShipmentSnapshot {
                shipment_id: Some(shipment_id.to_string()),
                ..Default::default()
            },
        }
    }

    /// 显式国家对
    pub fn countries(mut self, origin: &str, destination: &str) -> Self {
        self.snapshot.origin_country = Some(origin.to_string());
        self.snapshot.destination_country = Some(destination.to_string());
        self
    }

    /// IATA 代码对（同时生成 lane 标签）
    pub fn iata(mut self, origin: &str, destination: &str) -> Self {
        self.snapshot.origin_iata = Some(origin.to_string());
        self.snapshot.destination_iata = Some(destination.to_string());
        self.snapshot.lane = Some(format!("{}→{}", origin, destination));
        self
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.snapshot.stage = Some(stage);
        self
    }

    pub fn days_to_eta(mut self, days: f64) -> Self {
        self.snapshot.days_to_eta = Some(days);
        self
    }

    pub fn scan_gap(mut self, hours: f64) -> Self {
        self.snapshot.scan_gap_hours = Some(hours);
        self
    }

    /// 当前滞留与历史 P90
    pub fn dwell(mut self, current: f64, baseline_p90: Option<f64>) -> Self {
        self.snapshot.dwell_hours_current = Some(current);
        self.snapshot.baseline_90pct_hours = baseline_p90;
        self
    }

    pub fn external(mut self, weather_index: f64, port_congestion: f64) -> Self {
        self.snapshot.external = ExternalConditions {
            weather_index: Some(weather_index),
            port_congestion: Some(port_congestion),
        };
        self
    }

    pub fn labels(mut self, codes: &[&str]) -> Self {
        self.snapshot.reason_code = Some(codes.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn build(self) -> ShipmentSnapshot {
        self.snapshot
    }
}

// ==========================================
// 参考场景
// ==========================================

/// 国际干线，临近 ETA，扫描间隔与滞留均超限
pub fn scenario_a() -> ShipmentSnapshot {
    ShipmentBuilder::new("LDG-1029")
        .iata("TLV", "LHR")
        .countries("IL", "GB")
        .stage(Stage::Linehaul)
        .days_to_eta(2.0)
        .scan_gap(28.0)
        .dwell(11.0, Some(9.8))
        .external(2.0, 3.0)
        .build()
}

/// 国内始发枢纽，次日到达
pub fn scenario_b() -> ShipmentSnapshot {
    ShipmentBuilder::new("LDG-1043")
        .iata("JFK", "SFO")
        .countries("US", "US")
        .stage(Stage::OriginHub)
        .days_to_eta(1.0)
        .scan_gap(6.0)
        .dwell(2.5, Some(8.0))
        .external(1.0, 2.0)
        .build()
}

/// 国际末端派送，扫描间隔超过末端阈值
pub fn scenario_c() -> ShipmentSnapshot {
    ShipmentBuilder::new("LDG-1066")
        .iata("FRA", "TLV")
        .countries("DE", "IL")
        .stage(Stage::LastMile)
        .days_to_eta(3.0)
        .scan_gap(16.0)
        .dwell(4.0, Some(9.0))
        .external(2.0, 1.0)
        .build()
}

/// 远离 ETA，各项指标均为极端值
pub fn scenario_d() -> ShipmentSnapshot {
    ShipmentBuilder::new("LDG-2001")
        .countries("US", "GB")
        .stage(Stage::Customs)
        .days_to_eta(10.0)
        .scan_gap(200.0)
        .dwell(500.0, Some(1.0))
        .external(10.0, 10.0)
        .build()
}

/// 无国家信息且 IATA 未收录
pub fn scenario_e() -> ShipmentSnapshot {
    ShipmentBuilder::new("LDG-3001")
        .iata("XXX", "YYY")
        .stage(Stage::Linehaul)
        .days_to_eta(3.0)
        .build()
}

// ==========================================
// 运单 ETA 风险分类器 - 领域类型定义
// ==========================================
// 职责: 运输阶段、线路类型、风险原因码
// 红线: 阶段是"封闭枚举 + 全序",不是自由字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 运输阶段 (Stage)
// ==========================================
// 顺序: OriginPickup < OriginHub < Linehaul < Customs < DestinationHub < LastMile < Delivered
// Delivered 永远是终态(最大 rank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Origin Pickup")]
    OriginPickup, // 始发揽收
    #[serde(rename = "Origin Hub")]
    OriginHub, // 始发枢纽
    #[serde(rename = "Linehaul")]
    Linehaul, // 干线运输
    #[serde(rename = "Customs")]
    Customs, // 清关
    #[serde(rename = "Destination Hub")]
    DestinationHub, // 目的枢纽
    #[serde(rename = "Last-Mile")]
    LastMile, // 末端派送
    #[serde(rename = "Delivered")]
    Delivered, // 已签收
}

impl Stage {
    /// 全部阶段，按流水线顺序
    pub const ALL: [Stage; 7] = [
        Stage::OriginPickup,
        Stage::OriginHub,
        Stage::Linehaul,
        Stage::Customs,
        Stage::DestinationHub,
        Stage::LastMile,
        Stage::Delivered,
    ];

    /// 阶段序号 (1..=7)
    pub fn rank(self) -> u8 {
        match self {
            Stage::OriginPickup => 1,
            Stage::OriginHub => 2,
            Stage::Linehaul => 3,
            Stage::Customs => 4,
            Stage::DestinationHub => 5,
            Stage::LastMile => 6,
            Stage::Delivered => 7,
        }
    }

    /// 追踪系统中的显示名称
    pub fn label(self) -> &'static str {
        match self {
            Stage::OriginPickup => "Origin Pickup",
            Stage::OriginHub => "Origin Hub",
            Stage::Linehaul => "Linehaul",
            Stage::Customs => "Customs",
            Stage::DestinationHub => "Destination Hub",
            Stage::LastMile => "Last-Mile",
            Stage::Delivered => "Delivered",
        }
    }

    /// 从显示名称解析（精确匹配，未知名称返回 None）
    pub fn from_label(label: &str) -> Option<Stage> {
        Stage::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Delivered
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 线路类型 (Lane Type)
// ==========================================
// 任一端国家未知 → Indeterminate (不是错误)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaneType {
    Domestic,      // 国内
    International, // 国际
    Indeterminate, // 无法判定
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneType::Domestic => write!(f, "DOMESTIC"),
            LaneType::International => write!(f, "INTERNATIONAL"),
            LaneType::Indeterminate => write!(f, "INDETERMINATE"),
        }
    }
}

// ==========================================
// 风险原因码 (Reason Code)
// ==========================================
// 封闭词表; 输出顺序 = 检查顺序，与严重程度无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    EarlyStageNearEta, // 临近 ETA 仍未进入末端
    ScanGap,           // 扫描间隔过长
    ExcessDwell,       // 当前节点滞留超标
    ExternalRisk,      // 天气/港口拥堵
}

impl ReasonCode {
    pub const ALL: [ReasonCode; 4] = [
        ReasonCode::EarlyStageNearEta,
        ReasonCode::ScanGap,
        ReasonCode::ExcessDwell,
        ReasonCode::ExternalRisk,
    ];

    /// 机器可读代码
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::EarlyStageNearEta => "early_stage_near_eta",
            ReasonCode::ScanGap => "scan_gap",
            ReasonCode::ExcessDwell => "excess_dwell",
            ReasonCode::ExternalRisk => "external_risk",
        }
    }

    pub fn from_code(code: &str) -> Option<ReasonCode> {
        ReasonCode::ALL.into_iter().find(|r| r.as_str() == code)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

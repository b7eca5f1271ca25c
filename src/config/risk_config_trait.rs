// ==========================================
// 运单 ETA 风险分类器 - 风险配置读取 Trait
// ==========================================
// 职责: 定义规则引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigError;
use async_trait::async_trait;
use std::collections::HashMap;

// ==========================================
// RiskConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 JSON 配置文件读取）
#[async_trait]
pub trait RiskConfigReader: Send + Sync {
    // ===== 扫描间隔阈值 =====

    /// 末端派送阶段的扫描间隔阈值（小时）
    ///
    /// # 默认值
    /// - 12.0
    async fn get_gap_last_mile_hours(&self) -> Result<f64, ConfigError>;

    /// 其他阶段的扫描间隔阈值（小时）
    ///
    /// # 默认值
    /// - 24.0
    async fn get_gap_other_hours(&self) -> Result<f64, ConfigError>;

    // ===== 滞留阈值 =====

    /// 有 P90 基线时的缓冲（小时），dwell > baseline + buffer 触发
    ///
    /// # 默认值
    /// - 1.0
    async fn get_dwell_p90_buffer_hours(&self) -> Result<f64, ConfigError>;

    /// 无基线时的绝对阈值（小时），dwell >= fallback 触发
    ///
    /// # 默认值
    /// - 18.0
    async fn get_dwell_fallback_hours(&self) -> Result<f64, ConfigError>;

    // ===== ETA 窗口 =====

    /// 国内线路 ETA 窗口（天）
    ///
    /// # 默认值
    /// - 2
    async fn get_eta_window_domestic_days(&self) -> Result<i64, ConfigError>;

    /// 国际线路 ETA 窗口（天），线路无法判定时同样使用
    ///
    /// # 默认值
    /// - 3
    async fn get_eta_window_international_days(&self) -> Result<i64, ConfigError>;

    // ===== 外部条件 =====

    /// 外部条件检查的固定回看窗口（天），与线路窗口无关
    ///
    /// # 默认值
    /// - 3
    async fn get_external_lookback_days(&self) -> Result<i64, ConfigError>;

    /// 天气指数阈值（>=）
    ///
    /// # 默认值
    /// - 3.0
    async fn get_weather_index_threshold(&self) -> Result<f64, ConfigError>;

    /// 港口拥堵阈值（>=）
    ///
    /// # 默认值
    /// - 7.0
    async fn get_port_congestion_threshold(&self) -> Result<f64, ConfigError>;

    // ===== 线路配置 =====

    /// IATA → 国家代码的补充/覆盖映射
    ///
    /// # 默认值
    /// - 空（仅使用内置映射表）
    async fn get_iata_country_overrides(&self) -> Result<HashMap<String, String>, ConfigError>;
}

// ==========================================
// 运单 ETA 风险分类器 - 规则阈值
// ==========================================
// 规则引擎实际使用的阈值集合; Default 即标准口径
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::risk_config_trait::RiskConfigReader;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// 末端派送扫描间隔阈值（小时）
    pub gap_last_mile_hours: f64,
    /// 其他阶段扫描间隔阈值（小时）
    pub gap_other_hours: f64,
    /// P90 基线缓冲（小时）
    pub dwell_p90_buffer_hours: f64,
    /// 无基线时滞留阈值（小时）
    pub dwell_fallback_hours: f64,
    pub eta_window_domestic_days: i64,
    pub eta_window_international_days: i64,
    /// 外部条件回看窗口（天）
    pub external_lookback_days: i64,
    pub weather_index_threshold: f64,
    pub port_congestion_threshold: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl RiskThresholds {
    /// 标准口径
    pub const STANDARD: RiskThresholds = RiskThresholds {
        gap_last_mile_hours: 12.0,
        gap_other_hours: 24.0,
        dwell_p90_buffer_hours: 1.0,
        dwell_fallback_hours: 18.0,
        eta_window_domestic_days: 2,
        eta_window_international_days: 3,
        external_lookback_days: 3,
        weather_index_threshold: 3.0,
        port_congestion_threshold: 7.0,
    };

    /// 从配置读取器加载并校验
    pub async fn load(reader: &dyn RiskConfigReader) -> ConfigResult<Self> {
        let thresholds = Self {
            gap_last_mile_hours: reader.get_gap_last_mile_hours().await?,
            gap_other_hours: reader.get_gap_other_hours().await?,
            dwell_p90_buffer_hours: reader.get_dwell_p90_buffer_hours().await?,
            dwell_fallback_hours: reader.get_dwell_fallback_hours().await?,
            eta_window_domestic_days: reader.get_eta_window_domestic_days().await?,
            eta_window_international_days: reader.get_eta_window_international_days().await?,
            external_lookback_days: reader.get_external_lookback_days().await?,
            weather_index_threshold: reader.get_weather_index_threshold().await?,
            port_congestion_threshold: reader.get_port_congestion_threshold().await?,
        };

        thresholds.validate()?;
        Ok(thresholds)
    }

    /// 所有阈值必须为非负有限数
    pub fn validate(&self) -> ConfigResult<()> {
        let checks: [(&'static str, f64); 9] = [
            ("gap_last_mile_hours", self.gap_last_mile_hours),
            ("gap_other_hours", self.gap_other_hours),
            ("dwell_p90_buffer_hours", self.dwell_p90_buffer_hours),
            ("dwell_fallback_hours", self.dwell_fallback_hours),
            ("eta_window_domestic_days", self.eta_window_domestic_days as f64),
            ("eta_window_international_days", self.eta_window_international_days as f64),
            ("external_lookback_days", self.external_lookback_days as f64),
            ("weather_index_threshold", self.weather_index_threshold),
            ("port_congestion_threshold", self.port_congestion_threshold),
        ];

        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use shipment_eta_risk::config::{ConfigError, RiskConfigReader, RiskThresholds};
use std::collections::HashMap;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub thresholds: RiskThresholds,
    pub iata_overrides: HashMap<String, String>,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            thresholds: RiskThresholds::default(),
            iata_overrides: HashMap::new(),
        }
    }

    /// 自定义 ETA 窗口
    pub fn with_windows(domestic: i64, international: i64) -> Self {
        let mut config = Self::default();
        config.thresholds.eta_window_domestic_days = domestic;
        config.thresholds.eta_window_international_days = international;
        config
    }

    /// 追加 IATA → 国家映射
    pub fn with_iata(mut self, iata: &str, country: &str) -> Self {
        self.iata_overrides
            .insert(iata.to_string(), country.to_string());
        self
    }
}

#[async_trait]
impl RiskConfigReader for MockConfig {
    async fn get_gap_last_mile_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.thresholds.gap_last_mile_hours)
    }

    async fn get_gap_other_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.thresholds.gap_other_hours)
    }

    async fn get_dwell_p90_buffer_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.thresholds.dwell_p90_buffer_hours)
    }

    async fn get_dwell_fallback_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.thresholds.dwell_fallback_hours)
    }

    async fn get_eta_window_domestic_days(&self) -> Result<i64, ConfigError> {
        Ok(self.thresholds.eta_window_domestic_days)
    }

    async fn get_eta_window_international_days(&self) -> Result<i64, ConfigError> {
        Ok(self.thresholds.eta_window_international_days)
    }

    async fn get_external_lookback_days(&self) -> Result<i64, ConfigError> {
        Ok(self.thresholds.external_lookback_days)
    }

    async fn get_weather_index_threshold(&self) -> Result<f64, ConfigError> {
        Ok(self.thresholds.weather_index_threshold)
    }

    async fn get_port_congestion_threshold(&self) -> Result<f64, ConfigError> {
        Ok(self.thresholds.port_congestion_threshold)
    }

    async fn get_iata_country_overrides(&self) -> Result<HashMap<String, String>, ConfigError> {
        Ok(self.iata_overrides.clone())
    }
}

// ==========================================
// 运单 ETA 风险分类器 - 配置管理器
// ==========================================
// 职责: 配置加载、查询
// 存储: JSON 文件 (扁平 key-value 对象)
// 红线: 加载后只读，无热更新路径
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::risk_config_trait::RiskConfigReader;
use crate::config::risk_thresholds::RiskThresholds;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有键值对创建
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 从 JSON 文本解析
    ///
    /// # 格式
    /// 扁平对象; 字符串值原样保存，其他值保存其 JSON 文本
    /// ```json
    /// { "risk/gap_last_mile_hours": 10, "lane/iata_country_overrides": {"BER": "DE"} }
    /// ```
    pub fn from_json_str(raw: &str, source: &str) -> ConfigResult<Self> {
        let parsed: Value = serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;

        let object = match parsed {
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::ParseError {
                    path: source.to_string(),
                    message: format!("顶层必须为对象，实际为 {}", json_type_name(&other)),
                })
            }
        };

        let values = object
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        Ok(Self { values })
    }

    /// 从配置文件加载
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let manager = Self::from_json_str(&raw, &path.display().to_string())?;
        tracing::info!(path = %path.display(), keys = manager.values.len(), "配置文件加载完成");
        Ok(manager)
    }

    /// 加载配置文件; 文件不存在时返回空配置
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            tracing::info!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::new());
        }
        Self::from_file(path).await
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 读取配置值，带默认值
    fn get_config_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_config_value(key).unwrap_or(default)
    }

    /// 读取并解析数值配置; 格式错误时告警并回退默认值
    fn get_parsed_or_default<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Copy + std::fmt::Display,
    {
        let Some(raw) = self.get_config_value(key) else {
            return default;
        };

        match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %raw,
                    default = %default,
                    "配置值格式错误，使用默认值"
                );
                default
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 默认配置文件路径: `<config_dir>/shipment-eta-risk/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shipment-eta-risk").join("config.json"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ==========================================
// RiskConfigReader Trait 实现
// ==========================================
// 未配置时的取值
const DEFAULTS: RiskThresholds = RiskThresholds::STANDARD;

#[async_trait]
impl RiskConfigReader for ConfigManager {
    async fn get_gap_last_mile_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::GAP_LAST_MILE_HOURS, DEFAULTS.gap_last_mile_hours))
    }

    async fn get_gap_other_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::GAP_OTHER_HOURS, DEFAULTS.gap_other_hours))
    }

    async fn get_dwell_p90_buffer_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::DWELL_P90_BUFFER_HOURS, DEFAULTS.dwell_p90_buffer_hours))
    }

    async fn get_dwell_fallback_hours(&self) -> Result<f64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::DWELL_FALLBACK_HOURS, DEFAULTS.dwell_fallback_hours))
    }

    async fn get_eta_window_domestic_days(&self) -> Result<i64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::ETA_WINDOW_DOMESTIC_DAYS, DEFAULTS.eta_window_domestic_days))
    }

    async fn get_eta_window_international_days(&self) -> Result<i64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::ETA_WINDOW_INTERNATIONAL_DAYS, DEFAULTS.eta_window_international_days))
    }

    async fn get_external_lookback_days(&self) -> Result<i64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::EXTERNAL_LOOKBACK_DAYS, DEFAULTS.external_lookback_days))
    }

    async fn get_weather_index_threshold(&self) -> Result<f64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::WEATHER_INDEX_THRESHOLD, DEFAULTS.weather_index_threshold))
    }

    async fn get_port_congestion_threshold(&self) -> Result<f64, ConfigError> {
        Ok(self.get_parsed_or_default(config_keys::PORT_CONGESTION_THRESHOLD, DEFAULTS.port_congestion_threshold))
    }

    async fn get_iata_country_overrides(&self) -> Result<HashMap<String, String>, ConfigError> {
        let raw = self.get_config_or_default(config_keys::IATA_COUNTRY_OVERRIDES, "{}");

        // 覆盖表格式错误属于配置错误，不静默回退
        serde_json::from_str::<HashMap<String, String>>(raw).map_err(|e| ConfigError::ValueError {
            key: config_keys::IATA_COUNTRY_OVERRIDES.to_string(),
            value: raw.to_string(),
            message: e.to_string(),
        })
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 扫描间隔
    pub const GAP_LAST_MILE_HOURS: &str = "risk/gap_last_mile_hours";
    pub const GAP_OTHER_HOURS: &str = "risk/gap_other_hours";

    // 滞留
    pub const DWELL_P90_BUFFER_HOURS: &str = "risk/dwell_p90_buffer_hours";
    pub const DWELL_FALLBACK_HOURS: &str = "risk/dwell_fallback_hours";

    // ETA 窗口
    pub const ETA_WINDOW_DOMESTIC_DAYS: &str = "risk/eta_window_domestic_days";
    pub const ETA_WINDOW_INTERNATIONAL_DAYS: &str = "risk/eta_window_international_days";

    // 外部条件
    pub const EXTERNAL_LOOKBACK_DAYS: &str = "risk/external_lookback_days";
    pub const WEATHER_INDEX_THRESHOLD: &str = "risk/weather_index_threshold";
    pub const PORT_CONGESTION_THRESHOLD: &str = "risk/port_congestion_threshold";

    // 线路
    pub const IATA_COUNTRY_OVERRIDES: &str = "lane/iata_country_overrides";
}

// ==========================================
// 运单 ETA 风险分类器 - 配置层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件解析失败 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },

    #[error("阈值非法 ({name}={value}): 必须为非负有限数")]
    InvalidThreshold { name: &'static str, value: f64 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// 运单 ETA 风险分类器 - 快照导入 Trait
// ==========================================
// 职责: 定义快照导入接口（不包含实现）
// ==========================================

use crate::domain::shipment::ShipmentSnapshot;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ==========================================
// RawRecords - 解析后的原始记录
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecords {
    /// CSV 行: 列名 → 文本值（已 TRIM）
    Rows(Vec<HashMap<String, String>>),
    /// JSON 记录（可能不是对象）
    Json(Vec<Value>),
}

impl RawRecords {
    pub fn len(&self) -> usize {
        match self {
            RawRecords::Rows(rows) => rows.len(),
            RawRecords::Json(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ==========================================
// SnapshotLoader Trait
// ==========================================
// 实现者: FileSnapshotLoader
#[async_trait]
pub trait SnapshotLoader: Send + Sync {
    /// 从单个文件加载快照
    ///
    /// # 返回
    /// - Ok(Vec<ShipmentSnapshot>): 文件中的全部快照（顺序与文件一致）
    /// - Err: 文件不存在、格式不支持、语法错误
    async fn load_file(&self, path: &Path) -> ImportResult<Vec<ShipmentSnapshot>>;

    /// 并发加载多个文件
    ///
    /// # 说明
    /// - 每个文件独立，某个文件失败不影响其他文件
    /// - 返回顺序与输入顺序一致
    async fn batch_load(
        &self,
        paths: Vec<PathBuf>,
    ) -> Vec<(PathBuf, ImportResult<Vec<ShipmentSnapshot>>)>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, JsonParser
pub trait FileParser: Send + Sync {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<RawRecords>;
}

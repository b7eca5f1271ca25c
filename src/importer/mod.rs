// ==========================================
// 运单 ETA 风险分类器 - 导入层
// ==========================================
// 职责: 外部快照文件 → ShipmentSnapshot
// 支持: JSON, CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod snapshot_importer_impl;
pub mod snapshot_importer_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::SnapshotMapper;
pub use file_parser::{CsvParser, JsonParser, UniversalFileParser};
pub use snapshot_importer_impl::FileSnapshotLoader;

// 重导出 Trait 接口
pub use snapshot_importer_trait::{FileParser, RawRecords, SnapshotLoader};

// ==========================================
// 运单 ETA 风险分类器 - 快照导入实现
// ==========================================
// 流程: 文件解析（阻塞线程池） → 字段映射 → 快照列表
// ==========================================

use crate::domain::shipment::ShipmentSnapshot;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::SnapshotMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::snapshot_importer_trait::SnapshotLoader;
use async_trait::async_trait;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct FileSnapshotLoader;

impl FileSnapshotLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SnapshotLoader for FileSnapshotLoader {
    #[instrument(skip_all, fields(path = %path.display()))]
    async fn load_file(&self, path: &Path) -> ImportResult<Vec<ShipmentSnapshot>> {
        let owned = path.to_path_buf();

        // 解析为同步文件 I/O，放到阻塞线程池
        let records = tokio::task::spawn_blocking(move || UniversalFileParser.parse(&owned))
            .await
            .map_err(|e| ImportError::InternalError(format!("解析任务异常: {}", e)))??;

        let snapshots = SnapshotMapper::map_records(&records);
        info!(count = snapshots.len(), "快照文件加载完成");
        Ok(snapshots)
    }

    async fn batch_load(
        &self,
        paths: Vec<PathBuf>,
    ) -> Vec<(PathBuf, ImportResult<Vec<ShipmentSnapshot>>)> {
        let loads = paths.iter().map(|path| self.load_file(path));
        let results = join_all(loads).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = paths.len(), "部分快照文件加载失败");
        }

        paths.into_iter().zip(results).collect()
    }
}

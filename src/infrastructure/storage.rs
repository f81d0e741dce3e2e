// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::settings::StorageSettings;
use crate::domain::models::record::ExtractedRecord;
use crate::domain::repositories::record_repository::{RecordRepository, StorageError};

/// 本地 JSON 文件存储实现
///
/// 以 UTF-8、两空格缩进写入单个文件，每次保存覆盖旧内容。
/// 内容先写入同目录的 `<文件名>.tmp`，完整落盘后再重命名替换目标文件。
pub struct LocalJsonStorage {
    path: PathBuf,
}

impl LocalJsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(&settings.output_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存过程中使用的临时文件路径
    pub fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

async fn write_fully(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

#[async_trait]
impl RecordRepository for LocalJsonStorage {
    async fn save(&self, record: &ExtractedRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(record)?;

        // 确保目录存在
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let staging = self.staging_path();
        if let Err(e) = write_fully(&staging, json.as_bytes()).await {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }
        fs::rename(&staging, &self.path).await?;

        debug!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<ExtractedRecord, StorageError> {
        let data = fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}

/// 内存存储实现（用于测试）
#[derive(Clone, Default)]
pub struct InMemoryRecordStorage {
    data: Arc<RwLock<Option<ExtractedRecord>>>,
}

impl InMemoryRecordStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordStorage {
    async fn save(&self, record: &ExtractedRecord) -> Result<(), StorageError> {
        *self.data.write().await = Some(record.clone());
        Ok(())
    }

    async fn load(&self) -> Result<ExtractedRecord, StorageError> {
        self.data.read().await.clone().ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no record saved",
            ))
        })
    }
}

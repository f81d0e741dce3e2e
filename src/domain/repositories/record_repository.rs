// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::record::ExtractedRecord;
use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化或反序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 记录仓库特质
///
/// 持久化是尽力而为的：调用方记录失败但不因此中止运行
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// 保存一条记录，覆盖已有内容
    async fn save(&self, record: &ExtractedRecord) -> Result<(), StorageError>;

    /// 读取之前保存的记录
    async fn load(&self) -> Result<ExtractedRecord, StorageError>;
}

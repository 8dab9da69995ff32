use serde::Deserialize;
use ts_rs::TS;

use super::entities::BatchStatus;

/// 创建批次
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct CreateBatchRequest {
    pub name: String,
    pub description: Option<String>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    #[serde(default = "default_status")]
    pub status: BatchStatus,
}

/// 更新批次
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct UpdateBatchRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub status: Option<BatchStatus>,
}

fn default_status() -> BatchStatus {
    BatchStatus::Open
}

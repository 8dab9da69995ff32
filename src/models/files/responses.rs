use serde::Serialize;
use ts_rs::TS;

/// 上传暂存成功后返回的元数据，保存申请时原样回传
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct StagedFileResponse {
    pub original_name: String,
    pub stored_name: String,
    pub stored_path: String,
    pub file_size: i64,
    pub mime_type: String,
}

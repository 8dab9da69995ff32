use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 附件实体：只记录元数据，物理文件由上传接口负责落盘
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct Attachment {
    pub id: i64,
    pub material_id: i64,
    pub original_name: String,
    pub stored_name: String,
    pub stored_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

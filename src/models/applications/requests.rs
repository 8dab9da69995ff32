use serde::Deserialize;
use ts_rs::TS;

use super::entities::{ApplicationStatus, AwardGrade, AwardLevel, AwardType};

/// 保存（首次提交或重新提交）申请
///
/// 材料列表是全量声明：未出现的既有材料会被删除。
/// 载荷不携带任何分数字段，分数一律由服务端按评分表解析。
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct SaveApplicationRequest {
    pub batch_id: i64,
    pub materials: Vec<MaterialSubmission>,
}

/// 单条材料声明，自然键为 (category_id, item_id)
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct MaterialSubmission {
    pub category_id: i64,
    pub item_id: i64,
    pub award_level: AwardLevel,
    pub award_grade: AwardGrade,
    pub award_type: AwardType,
    /// 附件引用列表。字段缺省表示“不变更附件”；
    /// 显式空数组表示“清空该材料的全部附件”。
    #[serde(default)]
    pub files: Option<Vec<AttachmentRef>>,
}

/// 附件引用：已持久化的附件只带 id；新附件携带暂存元数据
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub enum AttachmentRef {
    Existing(ExistingAttachmentRef),
    New(NewAttachmentRef),
}

#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ExistingAttachmentRef {
    pub id: i64,
}

/// 新附件的元数据，由文件暂存接口（upload）产出
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct NewAttachmentRef {
    pub original_name: String,
    pub stored_name: String,
    pub stored_path: String,
    pub file_size: i64,
    pub mime_type: String,
}

/// 审核申请
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ReviewApplicationRequest {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub comment: Option<String>,
}

/// 管理员申请列表筛选
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationListQuery {
    pub status: Option<ApplicationStatus>,
    pub batch_id: Option<i64>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// 学生申请状态查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationStatusQuery {
    pub batch_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_ref_classification() {
        let existing: AttachmentRef = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert!(matches!(
            existing,
            AttachmentRef::Existing(ExistingAttachmentRef { id: 42 })
        ));

        let new: AttachmentRef = serde_json::from_str(
            r#"{
                "original_name": "证书.pdf",
                "stored_name": "1718000000-abcd.bin",
                "stored_path": "uploads/1718000000-abcd.bin",
                "file_size": 10240,
                "mime_type": "application/pdf"
            }"#,
        )
        .unwrap();
        assert!(matches!(new, AttachmentRef::New(_)));
    }

    #[test]
    fn test_material_rejects_client_score() {
        // 载荷里带 score 字段属于契约违规，直接在反序列化层拒绝
        let result = serde_json::from_str::<MaterialSubmission>(
            r#"{
                "category_id": 1,
                "item_id": 2,
                "award_level": "national",
                "award_grade": "first",
                "award_type": "individual",
                "score": 100
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_files_absent_vs_empty() {
        let absent: MaterialSubmission = serde_json::from_str(
            r#"{
                "category_id": 1,
                "item_id": 2,
                "award_level": "provincial",
                "award_grade": "second",
                "award_type": "team"
            }"#,
        )
        .unwrap();
        assert!(absent.files.is_none());

        let empty: MaterialSubmission = serde_json::from_str(
            r#"{
                "category_id": 1,
                "item_id": 2,
                "award_level": "provincial",
                "award_grade": "second",
                "award_type": "team",
                "files": []
            }"#,
        )
        .unwrap();
        assert_eq!(empty.files.as_deref(), Some(&[][..]));
    }
}

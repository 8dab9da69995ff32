use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::applications::entities::{Application, MaterialEntry};
use crate::models::files::entities::Attachment;

/// 申请人信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicantInfo {
    pub id: i64,
    pub username: String,
    pub real_name: Option<String>,
    pub student_no: Option<String>,
    pub class_name: Option<String>,
    pub major: Option<String>,
}

/// 材料详情（含类目/奖项名称与附件）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct MaterialDetail {
    #[serde(flatten)]
    pub material: MaterialEntry,
    pub category_name: String,
    pub item_name: String,
    pub files: Vec<Attachment>,
}

/// 单个类目的分数拆解
///
/// 保存与排名共用同一套聚合实现，两处返回的数值必然一致。
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct CategoryScore {
    pub category_id: i64,
    pub category_name: String,
    pub raw_score: i64,
    pub effective_score: i64,
    pub score_ratio: i32,
    pub has_cap: bool,
    pub contribution: f64,
}

/// 申请详情响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationDetailResponse {
    #[serde(flatten)]
    pub application: Application,
    pub batch_name: String,
    pub applicant: ApplicantInfo,
    pub materials: Vec<MaterialDetail>,
    pub category_scores: Vec<CategoryScore>,
}

/// 保存申请响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct SaveApplicationResponse {
    pub application_id: i64,
    pub total_score: f64,
}

/// 学生自己的申请列表项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct UserApplicationItem {
    #[serde(flatten)]
    pub application: Application,
    pub batch_name: String,
}

/// 管理员申请列表项（含申请人与材料数）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct AdminApplicationItem {
    #[serde(flatten)]
    pub application: Application,
    pub batch_name: String,
    pub applicant: ApplicantInfo,
    pub material_count: i64,
}

/// 管理员申请列表响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationListResponse {
    pub items: Vec<AdminApplicationItem>,
    pub pagination: PaginationInfo,
}

/// 批次内申请状态检查
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ApplicationStatusResponse {
    pub has_applied: bool,
    pub application_id: Option<i64>,
}

/// 系统概览统计
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct DashboardStats {
    pub total_applications: i64,
    pub pending_applications: i64,
    pub total_categories: i64,
    pub total_items: i64,
}

/// 学生提交情况统计（按班级聚合）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct ClassSubmissionStats {
    pub class_name: String,
    pub total: i64,
    pub submitted: i64,
    pub not_submitted: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct StudentStatsItem {
    pub user: ApplicantInfo,
    pub has_submitted: bool,
    pub application_status: Option<String>,
    pub total_score: Option<f64>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct StudentStatsResponse {
    pub students: Vec<StudentStatsItem>,
    pub total_students: i64,
    pub submitted_students: i64,
    pub not_submitted_students: i64,
    pub by_class: Vec<ClassSubmissionStats>,
}

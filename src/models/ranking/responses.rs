use serde::Serialize;
use ts_rs::TS;

use crate::models::applications::responses::{ApplicantInfo, CategoryScore, MaterialDetail};
use crate::models::batches::entities::Batch;

/// 排名条目
///
/// 仅统计已审核通过的申请；并列分按审核时间先后排序。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ranking.ts")]
pub struct RankingItem {
    pub rank: i64,
    pub application_id: i64,
    pub applicant: ApplicantInfo,
    pub total_score: f64,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub category_scores: Vec<CategoryScore>,
    pub materials: Vec<MaterialDetail>,
}

/// 批次排名响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ranking.ts")]
pub struct BatchRankingResponse {
    pub batch: Batch,
    pub rankings: Vec<RankingItem>,
    pub total_count: i64,
}

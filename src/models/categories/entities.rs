use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::applications::entities::{AwardGrade, AwardLevel, AwardType};

// 评分类目：总分按 score_ratio 加权，可选 100 分封顶
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// 总分权重（百分比，0-100）
    pub score_ratio: i32,
    /// 类目原始分是否封顶 100 再加权
    pub has_score_cap: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 奖项：类目下的可申报项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct Item {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 评分表条目：(奖项, 级别, 等第) → 基础分
//
// 奖项创建时按级别×等第全量播种，分数默认 0，未配置不算错误。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct RubricEntry {
    pub id: i64,
    pub item_id: i64,
    pub level: AwardLevel,
    pub grade: AwardGrade,
    pub score: i32,
    /// 等第的自定义展示名（如“金奖”替代“一等”）
    pub grade_label: Option<String>,
    /// 默认获奖类型，仅作前端预选提示，提交时以声明为准
    pub default_award_type: AwardType,
}

use serde::Deserialize;
use ts_rs::TS;

use crate::models::applications::entities::{AwardGrade, AwardLevel, AwardType};

/// 创建类目
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub score_ratio: i32,
    #[serde(default)]
    pub has_score_cap: bool,
}

/// 更新类目
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub score_ratio: Option<i32>,
    pub has_score_cap: Option<bool>,
}

/// 创建奖项（同时播种完整评分表）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CreateItemRequest {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// 更新评分表单元格
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct UpdateRubricRequest {
    pub item_id: i64,
    pub level: AwardLevel,
    pub grade: AwardGrade,
    pub score: i32,
    pub grade_label: Option<String>,
    pub default_award_type: Option<AwardType>,
}

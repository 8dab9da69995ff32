use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Category, Item, RubricEntry};

// 序列化与反序列化都要支持：类目树会整树进对象缓存

/// 奖项及其评分表
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct ItemWithRubric {
    #[serde(flatten)]
    pub item: Item,
    pub rubric: Vec<RubricEntry>,
}

/// 类目及其奖项（学生填报页使用）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryWithItems {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<ItemWithRubric>,
}

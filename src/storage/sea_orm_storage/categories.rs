//! 类目与评分表存储操作
//!
//! 奖项创建时按级别×等第全量播种评分表，分数默认 0；
//! 被申请材料引用的类目/奖项不允许删除。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::application_materials::{Column as MaterialColumn, Entity as ApplicationMaterials};
use crate::entity::categories::{ActiveModel, Column, Entity as Categories};
use crate::entity::item_scores::{
    ActiveModel as ItemScoreActiveModel, Column as ItemScoreColumn, Entity as ItemScores,
};
use crate::entity::items::{ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as Items};
use crate::errors::{Result, ScholarshipError};
use crate::models::applications::entities::{AwardGrade, AwardLevel, AwardType};
use crate::models::categories::{
    entities::{Category, Item, RubricEntry},
    requests::{
        CreateCategoryRequest, CreateItemRequest, UpdateCategoryRequest, UpdateRubricRequest,
    },
    responses::{CategoryWithItems, ItemWithRubric},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出类目
    pub async fn list_categories_impl(&self) -> Result<Vec<Category>> {
        let results = Categories::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询类目失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_category()).collect())
    }

    /// 类目连同奖项与评分表（学生填报页）
    pub async fn list_categories_with_items_impl(&self) -> Result<Vec<CategoryWithItems>> {
        let categories = Categories::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询类目失败: {e}")))?;

        let items = Items::find()
            .order_by_asc(ItemColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询奖项失败: {e}")))?;

        let rubric_rows = ItemScores::find()
            .order_by_asc(ItemScoreColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询评分表失败: {e}")))?;

        let mut rubric_by_item: HashMap<i64, Vec<RubricEntry>> = HashMap::new();
        for row in rubric_rows {
            rubric_by_item
                .entry(row.item_id)
                .or_default()
                .push(row.into_rubric_entry());
        }

        let mut items_by_category: HashMap<i64, Vec<ItemWithRubric>> = HashMap::new();
        for item in items {
            let rubric = rubric_by_item.remove(&item.id).unwrap_or_default();
            items_by_category
                .entry(item.category_id)
                .or_default()
                .push(ItemWithRubric {
                    item: item.into_item(),
                    rubric,
                });
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let items = items_by_category.remove(&category.id).unwrap_or_default();
                CategoryWithItems {
                    category: category.into_category(),
                    items,
                }
            })
            .collect())
    }

    /// 创建类目
    pub async fn create_category_impl(&self, req: CreateCategoryRequest) -> Result<Category> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            score_ratio: Set(req.score_ratio),
            has_score_cap: Set(req.has_score_cap),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("创建类目失败: {e}")))?;

        Ok(result.into_category())
    }

    /// 更新类目
    pub async fn update_category_impl(
        &self,
        category_id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        let Some(existing) = Categories::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询类目失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(score_ratio) = update.score_ratio {
            model.score_ratio = Set(score_ratio);
        }
        if let Some(has_score_cap) = update.has_score_cap {
            model.has_score_cap = Set(has_score_cap);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("更新类目失败: {e}")))?;

        Ok(Some(result.into_category()))
    }

    /// 删除类目：有申请材料引用时拒绝
    pub async fn delete_category_impl(&self, category_id: i64) -> Result<bool> {
        let material_count = ApplicationMaterials::find()
            .filter(MaterialColumn::CategoryId.eq(category_id))
            .count(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("统计材料数失败: {e}")))?;

        if material_count > 0 {
            return Err(ScholarshipError::validation(format!(
                "类目 {category_id} 下已有申请材料，不能删除"
            )));
        }

        let result = Categories::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("删除类目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建奖项并播种完整评分表（级别 × 等第，分数 0）
    pub async fn create_item_impl(&self, req: CreateItemRequest) -> Result<Item> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("开启事务失败: {e}")))?;

        let category = Categories::find_by_id(req.category_id)
            .one(&txn)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询类目失败: {e}")))?;
        if category.is_none() {
            return Err(ScholarshipError::not_found(format!(
                "类目不存在: {}",
                req.category_id
            )));
        }

        let model = ItemActiveModel {
            category_id: Set(req.category_id),
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            ..Default::default()
        };
        let item = model
            .insert(&txn)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("创建奖项失败: {e}")))?;

        for level in AwardLevel::all() {
            for grade in AwardGrade::all() {
                let score_model = ItemScoreActiveModel {
                    item_id: Set(item.id),
                    level: Set(level.to_string()),
                    grade: Set(grade.to_string()),
                    score: Set(0),
                    grade_label: Set(None),
                    default_award_type: Set(AwardType::Individual.to_string()),
                    ..Default::default()
                };
                score_model.insert(&txn).await.map_err(|e| {
                    ScholarshipError::database_operation(format!("播种评分表失败: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(item.into_item())
    }

    /// 删除奖项：有申请材料引用时拒绝
    pub async fn delete_item_impl(&self, item_id: i64) -> Result<bool> {
        let material_count = ApplicationMaterials::find()
            .filter(MaterialColumn::ItemId.eq(item_id))
            .count(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("统计材料数失败: {e}")))?;

        if material_count > 0 {
            return Err(ScholarshipError::validation(format!(
                "奖项 {item_id} 下已有申请材料，不能删除"
            )));
        }

        let result = Items::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("删除奖项失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新评分表单元格
    pub async fn update_rubric_entry_impl(
        &self,
        update: UpdateRubricRequest,
    ) -> Result<Option<RubricEntry>> {
        let Some(existing) = ItemScores::find()
            .filter(ItemScoreColumn::ItemId.eq(update.item_id))
            .filter(ItemScoreColumn::Level.eq(update.level.to_string()))
            .filter(ItemScoreColumn::Grade.eq(update.grade.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询评分表失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ItemScoreActiveModel = existing.into();
        model.score = Set(update.score);
        model.grade_label = Set(update.grade_label);
        if let Some(default_award_type) = update.default_award_type {
            model.default_award_type = Set(default_award_type.to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("更新评分表失败: {e}")))?;

        Ok(Some(result.into_rubric_entry()))
    }
}

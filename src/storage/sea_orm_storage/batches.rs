//! 批次存储操作

use super::SeaOrmStorage;
use crate::entity::applications::{Column as ApplicationColumn, Entity as Applications};
use crate::entity::batches::{ActiveModel, Column, Entity as Batches};
use crate::errors::{Result, ScholarshipError};
use crate::models::batches::{
    entities::Batch,
    requests::{CreateBatchRequest, UpdateBatchRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建批次
    pub async fn create_batch_impl(&self, req: CreateBatchRequest) -> Result<Batch> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            start_date: Set(req.start_date.format("%Y-%m-%d").to_string()),
            end_date: Set(req.end_date.format("%Y-%m-%d").to_string()),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("创建批次失败: {e}")))?;

        Ok(result.into_batch())
    }

    /// 通过 ID 获取批次
    pub async fn get_batch_by_id_impl(&self, batch_id: i64) -> Result<Option<Batch>> {
        let result = Batches::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询批次失败: {e}")))?;

        Ok(result.map(|m| m.into_batch()))
    }

    /// 列出全部批次（新批次在前）
    pub async fn list_batches_impl(&self) -> Result<Vec<Batch>> {
        let results = Batches::find()
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询批次列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_batch()).collect())
    }

    /// 更新批次
    pub async fn update_batch_impl(
        &self,
        batch_id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        let Some(existing) = Batches::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询批次失败: {e}")))?
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
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.format("%Y-%m-%d").to_string());
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.format("%Y-%m-%d").to_string());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("更新批次失败: {e}")))?;

        Ok(Some(result.into_batch()))
    }

    /// 删除批次：已有申请时拒绝
    pub async fn delete_batch_impl(&self, batch_id: i64) -> Result<bool> {
        let application_count = Applications::find()
            .filter(ApplicationColumn::BatchId.eq(batch_id))
            .count(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("统计申请数失败: {e}")))?;

        if application_count > 0 {
            return Err(ScholarshipError::validation(format!(
                "批次 {batch_id} 已有 {application_count} 份申请，无法删除"
            )));
        }

        let result = Batches::delete_by_id(batch_id)
            .exec(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("删除批次失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

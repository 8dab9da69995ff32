//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{Result, ScholarshipError};
use crate::models::announcements::{
    entities::Announcement,
    requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出公告（新公告在前）
    pub async fn list_announcements_impl(&self) -> Result<Vec<Announcement>> {
        let results = Announcements::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_announcement()).collect())
    }

    /// 创建公告
    pub async fn create_announcement_impl(
        &self,
        created_by: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            content: Set(req.content),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 更新公告
    pub async fn update_announcement_impl(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        let Some(existing) = Announcements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询公告失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(content);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("更新公告失败: {e}")))?;

        Ok(Some(result.into_announcement()))
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

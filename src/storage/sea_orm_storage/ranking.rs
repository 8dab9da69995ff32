//! 排名存储操作
//!
//! 只统计已审核通过的申请，总分降序、审核时间升序；类目拆解复用
//! 保存路径同一套聚合实现，两处口径不会出现偏差。

use super::SeaOrmStorage;
use crate::entity::applications::{Column as ApplicationColumn, Entity as Applications};
use crate::entity::batches::Entity as Batches;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, ScholarshipError};
use crate::models::applications::entities::ApplicationStatus;
use crate::models::ranking::responses::{BatchRankingResponse, RankingItem};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 批次排名
    pub async fn get_batch_ranking_impl(
        &self,
        batch_id: i64,
    ) -> Result<Option<BatchRankingResponse>> {
        let Some(batch) = Batches::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询批次失败: {e}")))?
        else {
            return Ok(None);
        };

        // 总分降序，并列分按审核时间先后
        let applications = Applications::find()
            .filter(ApplicationColumn::BatchId.eq(batch_id))
            .filter(ApplicationColumn::Status.eq(ApplicationStatus::APPROVED))
            .order_by_desc(ApplicationColumn::TotalScore)
            .order_by_asc(ApplicationColumn::ReviewedAt)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请失败: {e}")))?;

        // 批量查询申请人
        let user_ids: Vec<i64> = applications.iter().map(|a| a.user_id).collect();
        let users = if user_ids.is_empty() {
            Vec::new()
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(user_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    ScholarshipError::database_operation(format!("查询用户信息失败: {e}"))
                })?
        };
        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();

        let mut rankings = Vec::with_capacity(applications.len());
        for (index, app) in applications.iter().enumerate() {
            let (materials, category_scores) = self.load_application_breakdown(app.id).await?;

            rankings.push(RankingItem {
                rank: (index + 1) as i64,
                application_id: app.id,
                applicant: Self::applicant_info(user_map.get(&app.user_id), app.user_id),
                total_score: app.total_score,
                reviewed_at: app
                    .reviewed_at
                    .and_then(|ts| chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0)),
                category_scores,
                materials,
            });
        }

        let total_count = rankings.len() as i64;

        Ok(Some(BatchRankingResponse {
            batch: batch.into_batch(),
            rankings,
            total_count,
        }))
    }
}

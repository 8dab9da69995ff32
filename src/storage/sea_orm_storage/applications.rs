//! 申请存储操作
//!
//! `save_application_impl` 是引擎的唯一写入口：在一个事务内完成
//! 材料对账、评分解析、附件对账、类目聚合与状态机推进，任何一步
//! 失败整体回滚，不会留下半套材料。

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::application_materials::{
    ActiveModel as MaterialActiveModel, Column as MaterialColumn, Entity as ApplicationMaterials,
};
use crate::entity::applications::{
    ActiveModel as ApplicationActiveModel, Column as ApplicationColumn, Entity as Applications,
};
use crate::entity::batches::Entity as Batches;
use crate::entity::categories::Entity as Categories;
use crate::entity::item_scores::{Column as ItemScoreColumn, Entity as ItemScores};
use crate::entity::items::{Column as ItemColumn, Entity as Items};
use crate::entity::uploaded_files::{
    ActiveModel as FileActiveModel, Column as FileColumn, Entity as UploadedFiles,
};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, ScholarshipError};
use crate::models::{
    PaginationInfo,
    applications::{
        entities::{Application, ApplicationStatus},
        requests::{ApplicationListQuery, MaterialSubmission, SaveApplicationRequest},
        responses::{
            AdminApplicationItem, ApplicantInfo, ApplicationDetailResponse,
            ApplicationListResponse, ApplicationStatusResponse, CategoryScore, DashboardStats,
            MaterialDetail, SaveApplicationResponse, StudentStatsItem, StudentStatsResponse,
            UserApplicationItem,
        },
    },
    users::entities::UserRole,
};
use crate::scoring::{
    self, AttachmentPlan, CategoryRule, RubricTable, reconcile_attachments, reconcile_materials,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 保存（创建或重新提交）申请
    pub async fn save_application_impl(
        &self,
        user_id: i64,
        request: SaveApplicationRequest,
    ) -> Result<SaveApplicationResponse> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("开启事务失败: {e}")))?;

        // 1. 查找现有申请；approved 为终态，拒绝任何改动
        let existing_app = Applications::find()
            .filter(ApplicationColumn::UserId.eq(user_id))
            .filter(ApplicationColumn::BatchId.eq(request.batch_id))
            .one(&txn)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请失败: {e}")))?;

        if let Some(app) = &existing_app
            && app.status == ApplicationStatus::APPROVED
        {
            return Err(ScholarshipError::application_locked(format!(
                "申请 {} 已通过审核，不能再修改",
                app.id
            )));
        }

        // 2. 创建或重置申请行：状态回到 pending，清除审核字段
        let application_id = match &existing_app {
            Some(app) => {
                let mut model: ApplicationActiveModel = app.clone().into();
                model.status = Set(ApplicationStatus::Pending.to_string());
                model.review_comment = Set(None);
                model.reviewer_id = Set(None);
                model.reviewed_at = Set(None);
                model.update(&txn).await.map_err(|e| {
                    ScholarshipError::database_operation(format!("重置申请状态失败: {e}"))
                })?;
                app.id
            }
            None => {
                let model = ApplicationActiveModel {
                    user_id: Set(user_id),
                    batch_id: Set(request.batch_id),
                    status: Set(ApplicationStatus::Pending.to_string()),
                    total_score: Set(0.0),
                    submitted_at: Set(now),
                    created_at: Set(now),
                    ..Default::default()
                };
                let inserted = model.insert(&txn).await.map_err(|e| {
                    ScholarshipError::database_operation(format!("创建申请失败: {e}"))
                })?;
                inserted.id
            }
        };

        // 3. 事务快照内读取已有材料与附件
        let existing_materials = ApplicationMaterials::find()
            .filter(MaterialColumn::ApplicationId.eq(application_id))
            .all(&txn)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询材料失败: {e}")))?;

        let material_ids: Vec<i64> = existing_materials.iter().map(|m| m.id).collect();
        let existing_files = if material_ids.is_empty() {
            Vec::new()
        } else {
            UploadedFiles::find()
                .filter(FileColumn::MaterialId.is_in(material_ids))
                .all(&txn)
                .await
                .map_err(|e| ScholarshipError::database_operation(format!("查询附件失败: {e}")))?
        };

        // material_id → 附件行
        let mut files_by_material: HashMap<i64, Vec<&crate::entity::uploaded_files::Model>> =
            HashMap::new();
        for file in &existing_files {
            files_by_material.entry(file.material_id).or_default().push(file);
        }

        // 4. 材料对账
        let existing_views: Vec<scoring::ExistingMaterial> =
            existing_materials.iter().map(|m| m.as_existing()).collect();
        let plan = reconcile_materials(&existing_views, &request.materials)?;

        // 5. 载入评分表与类目规则
        let rubric = self.load_rubric(&txn, &request.materials).await?;
        let rules = Self::load_category_rules(&txn).await?;

        // 待物理清理的附件路径，提交后处理
        let mut removed_paths: Vec<String> = Vec::new();
        // (category_id, 计入分)，聚合用
        let mut scored: Vec<(i64, i32)> = Vec::new();

        // 6a. 删除来稿未声明的材料（附件行随外键级联删除）
        if !plan.deletes.is_empty() {
            for material_id in &plan.deletes {
                if let Some(files) = files_by_material.get(material_id) {
                    removed_paths.extend(files.iter().map(|f| f.stored_path.clone()));
                }
            }
            ApplicationMaterials::delete_many()
                .filter(MaterialColumn::Id.is_in(plan.deletes.clone()))
                .exec(&txn)
                .await
                .map_err(|e| ScholarshipError::database_operation(format!("删除材料失败: {e}")))?;
        }

        // 6b. 更新命中的材料，分数一律按评分表重新解析
        for (material_id, submission) in &plan.updates {
            let resolved = rubric.resolve(
                submission.item_id,
                submission.award_level,
                submission.award_grade,
                submission.award_type,
            );
            scored.push((submission.category_id, resolved.score));

            let model = MaterialActiveModel {
                id: Set(*material_id),
                award_level: Set(submission.award_level.to_string()),
                award_grade: Set(submission.award_grade.to_string()),
                award_type: Set(submission.award_type.to_string()),
                raw_score: Set(resolved.raw_score),
                score: Set(resolved.score),
                updated_at: Set(now),
                ..Default::default()
            };
            model.update(&txn).await.map_err(|e| {
                ScholarshipError::database_operation(format!("更新材料失败: {e}"))
            })?;

            let existing_ids: Vec<i64> = files_by_material
                .get(material_id)
                .map(|files| files.iter().map(|f| f.id).collect())
                .unwrap_or_default();
            let attachment_plan =
                reconcile_attachments(&existing_ids, submission.files.as_deref());
            self.apply_attachment_plan(
                &txn,
                *material_id,
                &attachment_plan,
                &files_by_material,
                &mut removed_paths,
                now,
            )
            .await?;
        }

        // 6c. 插入新材料及其附件
        for submission in &plan.inserts {
            let resolved = rubric.resolve(
                submission.item_id,
                submission.award_level,
                submission.award_grade,
                submission.award_type,
            );
            scored.push((submission.category_id, resolved.score));

            let model = MaterialActiveModel {
                application_id: Set(application_id),
                category_id: Set(submission.category_id),
                item_id: Set(submission.item_id),
                award_level: Set(submission.award_level.to_string()),
                award_grade: Set(submission.award_grade.to_string()),
                award_type: Set(submission.award_type.to_string()),
                raw_score: Set(resolved.raw_score),
                score: Set(resolved.score),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            let inserted = model.insert(&txn).await.map_err(|e| {
                ScholarshipError::database_operation(format!("创建材料失败: {e}"))
            })?;

            let attachment_plan = reconcile_attachments(&[], submission.files.as_deref());
            self.apply_attachment_plan(
                &txn,
                inserted.id,
                &attachment_plan,
                &files_by_material,
                &mut removed_paths,
                now,
            )
            .await?;
        }

        // 7. 聚合总分并刷新提交时间
        let summary = scoring::aggregate_scores(&scored, &rules);
        let model = ApplicationActiveModel {
            id: Set(application_id),
            total_score: Set(summary.total()),
            submitted_at: Set(now),
            ..Default::default()
        };
        model
            .update(&txn)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("更新总分失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("提交事务失败: {e}")))?;

        // 8. 提交成功后尽力清理物理文件，失败只告警不影响结果
        Self::cleanup_physical_files(&removed_paths).await;

        Ok(SaveApplicationResponse {
            application_id,
            total_score: summary.total(),
        })
    }

    /// 应用附件对账计划：插入新附件行，删除未保留的行
    async fn apply_attachment_plan<C: ConnectionTrait>(
        &self,
        conn: &C,
        material_id: i64,
        plan: &AttachmentPlan<'_>,
        files_by_material: &HashMap<i64, Vec<&crate::entity::uploaded_files::Model>>,
        removed_paths: &mut Vec<String>,
        now: i64,
    ) -> Result<()> {
        for new_file in &plan.inserts {
            let model = FileActiveModel {
                material_id: Set(material_id),
                original_name: Set(new_file.original_name.clone()),
                stored_name: Set(new_file.stored_name.clone()),
                stored_path: Set(new_file.stored_path.clone()),
                file_size: Set(new_file.file_size),
                mime_type: Set(new_file.mime_type.clone()),
                uploaded_at: Set(now),
                ..Default::default()
            };
            model
                .insert(conn)
                .await
                .map_err(|e| ScholarshipError::database_operation(format!("保存附件失败: {e}")))?;
        }

        if !plan.deletes.is_empty() {
            if let Some(files) = files_by_material.get(&material_id) {
                removed_paths.extend(
                    files
                        .iter()
                        .filter(|f| plan.deletes.contains(&f.id))
                        .map(|f| f.stored_path.clone()),
                );
            }
            UploadedFiles::delete_many()
                .filter(FileColumn::Id.is_in(plan.deletes.clone()))
                .exec(conn)
                .await
                .map_err(|e| ScholarshipError::database_operation(format!("删除附件失败: {e}")))?;
        }

        Ok(())
    }

    /// 加载来稿涉及奖项的评分表
    async fn load_rubric<C: ConnectionTrait>(
        &self,
        conn: &C,
        materials: &[MaterialSubmission],
    ) -> Result<RubricTable> {
        let item_ids: HashSet<i64> = materials.iter().map(|m| m.item_id).collect();
        if item_ids.is_empty() {
            return Ok(RubricTable::default());
        }

        let rows = ItemScores::find()
            .filter(ItemScoreColumn::ItemId.is_in(item_ids))
            .all(conn)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询评分表失败: {e}")))?;

        // 脏数据（无法解析的级别/等第）跳过，等价于未配置 ⇒ 0 分
        Ok(RubricTable::from_entries(rows.into_iter().filter_map(
            |row| {
                let level = row.level.parse().ok()?;
                let grade = row.grade.parse().ok()?;
                Some((row.item_id, level, grade, row.score))
            },
        )))
    }

    /// 加载全部类目规则（聚合用）
    pub(crate) async fn load_category_rules<C: ConnectionTrait>(
        conn: &C,
    ) -> Result<Vec<CategoryRule>> {
        let categories = Categories::find()
            .order_by_asc(crate::entity::categories::Column::Id)
            .all(conn)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询类目失败: {e}")))?;
        Ok(categories.iter().map(|c| c.as_rule()).collect())
    }

    /// 提交后尽力删除物理文件
    async fn cleanup_physical_files(paths: &[String]) {
        for path in paths {
            if let Err(e) = tokio::fs::remove_file(path).await {
                tracing::warn!("清理附件物理文件失败 {}: {}", path, e);
            }
        }
    }

    /// 查询学生在批次内的申请状态
    pub async fn check_user_application_impl(
        &self,
        user_id: i64,
        batch_id: i64,
    ) -> Result<ApplicationStatusResponse> {
        let result = Applications::find()
            .filter(ApplicationColumn::UserId.eq(user_id))
            .filter(ApplicationColumn::BatchId.eq(batch_id))
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请失败: {e}")))?;

        Ok(ApplicationStatusResponse {
            has_applied: result.is_some(),
            application_id: result.map(|app| app.id),
        })
    }

    /// 学生自己的申请列表
    pub async fn list_user_applications_impl(
        &self,
        user_id: i64,
    ) -> Result<Vec<UserApplicationItem>> {
        let applications = Applications::find()
            .filter(ApplicationColumn::UserId.eq(user_id))
            .order_by_desc(ApplicationColumn::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请列表失败: {e}")))?;

        let batch_names = self.batch_name_map(&applications).await?;

        Ok(applications
            .into_iter()
            .map(|app| {
                let batch_name = batch_names.get(&app.batch_id).cloned().unwrap_or_default();
                UserApplicationItem {
                    application: app.into_application(),
                    batch_name,
                }
            })
            .collect())
    }

    /// 管理员申请列表（状态/批次筛选 + 分页）
    pub async fn list_applications_with_pagination_impl(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Applications::find();

        if let Some(status) = query.status {
            select = select.filter(ApplicationColumn::Status.eq(status.to_string()));
        }
        if let Some(batch_id) = query.batch_id {
            select = select.filter(ApplicationColumn::BatchId.eq(batch_id));
        }

        select = select.order_by_desc(ApplicationColumn::SubmittedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请页数失败: {e}")))?;
        let applications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请列表失败: {e}")))?;

        // 批量查询申请人与批次
        let user_ids: Vec<i64> = applications
            .iter()
            .map(|a| a.user_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询用户信息失败: {e}")))?;
        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();

        let batch_names = self.batch_name_map(&applications).await?;

        // 每个申请的材料数
        let application_ids: Vec<i64> = applications.iter().map(|a| a.id).collect();
        let materials = if application_ids.is_empty() {
            Vec::new()
        } else {
            ApplicationMaterials::find()
                .filter(MaterialColumn::ApplicationId.is_in(application_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    ScholarshipError::database_operation(format!("查询材料统计失败: {e}"))
                })?
        };
        let mut material_counts: HashMap<i64, i64> = HashMap::new();
        for material in &materials {
            *material_counts.entry(material.application_id).or_insert(0) += 1;
        }

        let items = applications
            .into_iter()
            .map(|app| {
                let applicant = Self::applicant_info(user_map.get(&app.user_id), app.user_id);
                let batch_name = batch_names.get(&app.batch_id).cloned().unwrap_or_default();
                let material_count = material_counts.get(&app.id).copied().unwrap_or(0);
                AdminApplicationItem {
                    application: app.into_application(),
                    batch_name,
                    applicant,
                    material_count,
                }
            })
            .collect();

        Ok(ApplicationListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 申请详情（材料、附件、类目拆解）
    ///
    /// `requesting_user_id` 为学生本人时限定只能查到自己的申请。
    pub async fn get_application_detail_impl(
        &self,
        application_id: i64,
        requesting_user_id: Option<i64>,
    ) -> Result<Option<ApplicationDetailResponse>> {
        let mut select = Applications::find().filter(ApplicationColumn::Id.eq(application_id));
        if let Some(user_id) = requesting_user_id {
            select = select.filter(ApplicationColumn::UserId.eq(user_id));
        }

        let Some(app) = select
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请失败: {e}")))?
        else {
            return Ok(None);
        };

        let applicant = Users::find_by_id(app.user_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请人失败: {e}")))?;
        let batch = Batches::find_by_id(app.batch_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询批次失败: {e}")))?;

        let (materials, category_scores) = self.load_application_breakdown(app.id).await?;

        Ok(Some(ApplicationDetailResponse {
            applicant: Self::applicant_info(applicant.as_ref(), app.user_id),
            batch_name: batch.map(|b| b.name).unwrap_or_default(),
            application: app.into_application(),
            materials,
            category_scores,
        }))
    }

    /// 加载一份申请的材料明细与类目拆解
    ///
    /// 排名与详情共用；类目拆解一律走 `scoring::aggregate_scores`。
    pub(crate) async fn load_application_breakdown(
        &self,
        application_id: i64,
    ) -> Result<(Vec<MaterialDetail>, Vec<CategoryScore>)> {
        let materials = ApplicationMaterials::find()
            .filter(MaterialColumn::ApplicationId.eq(application_id))
            .order_by_asc(MaterialColumn::CategoryId)
            .order_by_asc(MaterialColumn::ItemId)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询材料失败: {e}")))?;

        let material_ids: Vec<i64> = materials.iter().map(|m| m.id).collect();
        let files = if material_ids.is_empty() {
            Vec::new()
        } else {
            UploadedFiles::find()
                .filter(FileColumn::MaterialId.is_in(material_ids))
                .all(&self.db)
                .await
                .map_err(|e| ScholarshipError::database_operation(format!("查询附件失败: {e}")))?
        };
        let mut files_by_material: HashMap<i64, Vec<_>> = HashMap::new();
        for file in files {
            files_by_material
                .entry(file.material_id)
                .or_default()
                .push(file.into_attachment());
        }

        // 名称映射
        let item_ids: Vec<i64> = materials
            .iter()
            .map(|m| m.item_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let item_names: HashMap<i64, String> = if item_ids.is_empty() {
            HashMap::new()
        } else {
            Items::find()
                .filter(ItemColumn::Id.is_in(item_ids))
                .all(&self.db)
                .await
                .map_err(|e| ScholarshipError::database_operation(format!("查询奖项失败: {e}")))?
                .into_iter()
                .map(|i| (i.id, i.name))
                .collect()
        };

        let rules = Self::load_category_rules(&self.db).await?;
        let category_names: HashMap<i64, String> = rules
            .iter()
            .map(|r| (r.category_id, r.name.clone()))
            .collect();

        let scored: Vec<(i64, i32)> = materials.iter().map(|m| (m.category_id, m.score)).collect();
        let summary = scoring::aggregate_scores(&scored, &rules);

        let details = materials
            .into_iter()
            .map(|m| {
                let files = files_by_material.remove(&m.id).unwrap_or_default();
                MaterialDetail {
                    category_name: category_names.get(&m.category_id).cloned().unwrap_or_default(),
                    item_name: item_names.get(&m.item_id).cloned().unwrap_or_default(),
                    material: m.into_material_entry(),
                    files,
                }
            })
            .collect();

        Ok((details, summary.categories))
    }

    /// 审核申请
    ///
    /// 状态取值由服务层校验；approved 为终态，不允许再次审核。
    pub async fn review_application_impl(
        &self,
        application_id: i64,
        status: ApplicationStatus,
        comment: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Application>> {
        let Some(app) = Applications::find_by_id(application_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请失败: {e}")))?
        else {
            return Ok(None);
        };

        if app.status == ApplicationStatus::APPROVED {
            return Err(ScholarshipError::application_locked(format!(
                "申请 {application_id} 已通过审核"
            )));
        }

        let mut model: ApplicationActiveModel = app.into();
        model.status = Set(status.to_string());
        model.review_comment = Set(comment);
        model.reviewer_id = Set(Some(reviewer_id));
        model.reviewed_at = Set(Some(chrono::Utc::now().timestamp()));

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("审核申请失败: {e}")))?;

        Ok(Some(updated.into_application()))
    }

    /// 删除申请（管理员），材料与附件行级联删除，物理文件尽力清理
    pub async fn delete_application_impl(&self, application_id: i64) -> Result<bool> {
        let materials = ApplicationMaterials::find()
            .filter(MaterialColumn::ApplicationId.eq(application_id))
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询材料失败: {e}")))?;
        let material_ids: Vec<i64> = materials.iter().map(|m| m.id).collect();

        let paths: Vec<String> = if material_ids.is_empty() {
            Vec::new()
        } else {
            UploadedFiles::find()
                .filter(FileColumn::MaterialId.is_in(material_ids))
                .all(&self.db)
                .await
                .map_err(|e| ScholarshipError::database_operation(format!("查询附件失败: {e}")))?
                .into_iter()
                .map(|f| f.stored_path)
                .collect()
        };

        let result = Applications::delete_by_id(application_id)
            .exec(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("删除申请失败: {e}")))?;

        if result.rows_affected > 0 {
            Self::cleanup_physical_files(&paths).await;
        }

        Ok(result.rows_affected > 0)
    }

    /// 系统概览统计
    pub async fn get_dashboard_stats_impl(&self) -> Result<DashboardStats> {
        let total_applications = Applications::find()
            .count(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("统计申请数失败: {e}")))?;
        let pending_applications = Applications::find()
            .filter(ApplicationColumn::Status.eq(ApplicationStatus::PENDING))
            .count(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("统计待审数失败: {e}")))?;
        let total_categories = Categories::find()
            .count(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("统计类目数失败: {e}")))?;
        let total_items = Items::find()
            .count(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("统计奖项数失败: {e}")))?;

        Ok(DashboardStats {
            total_applications: total_applications as i64,
            pending_applications: pending_applications as i64,
            total_categories: total_categories as i64,
            total_items: total_items as i64,
        })
    }

    /// 学生提交情况统计（按班级聚合）
    pub async fn get_student_stats_impl(
        &self,
        batch_id: Option<i64>,
        class_name: Option<String>,
    ) -> Result<StudentStatsResponse> {
        let mut select = Users::find().filter(UserColumn::Role.eq(UserRole::STUDENT));
        if let Some(ref class) = class_name {
            select = select.filter(UserColumn::ClassName.eq(class.clone()));
        }
        let students = select
            .order_by_asc(UserColumn::ClassName)
            .order_by_asc(UserColumn::StudentNo)
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询学生失败: {e}")))?;

        let mut app_select = Applications::find();
        if let Some(batch_id) = batch_id {
            app_select = app_select.filter(ApplicationColumn::BatchId.eq(batch_id));
        }
        let applications = app_select
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询申请失败: {e}")))?;
        let app_by_user: HashMap<i64, _> =
            applications.into_iter().map(|a| (a.user_id, a)).collect();

        let mut items = Vec::with_capacity(students.len());
        let mut submitted_students = 0i64;
        let mut by_class: HashMap<String, (i64, i64)> = HashMap::new();

        for student in &students {
            let class = student
                .class_name
                .clone()
                .unwrap_or_else(|| "未分班".to_string());
            let entry = by_class.entry(class).or_insert((0, 0));
            entry.0 += 1;

            let application = app_by_user.get(&student.id);
            if application.is_some() {
                submitted_students += 1;
                entry.1 += 1;
            }

            items.push(StudentStatsItem {
                user: Self::applicant_info(Some(student), student.id),
                has_submitted: application.is_some(),
                application_status: application.map(|a| a.status.clone()),
                total_score: application.map(|a| a.total_score),
                submitted_at: application.and_then(|a| {
                    chrono::DateTime::<chrono::Utc>::from_timestamp(a.submitted_at, 0)
                }),
            });
        }

        let total_students = students.len() as i64;
        let mut by_class: Vec<_> = by_class
            .into_iter()
            .map(
                |(class_name, (total, submitted))| crate::models::applications::responses::ClassSubmissionStats {
                    class_name,
                    total,
                    submitted,
                    not_submitted: total - submitted,
                },
            )
            .collect();
        by_class.sort_by(|a, b| a.class_name.cmp(&b.class_name));

        Ok(StudentStatsResponse {
            students: items,
            total_students,
            submitted_students,
            not_submitted_students: total_students - submitted_students,
            by_class,
        })
    }

    /// 组装申请人信息（用户缺失时保底）
    pub(crate) fn applicant_info(
        user: Option<&crate::entity::users::Model>,
        user_id: i64,
    ) -> ApplicantInfo {
        ApplicantInfo {
            id: user.map(|u| u.id).unwrap_or(user_id),
            username: user
                .map(|u| u.username.clone())
                .unwrap_or_else(|| "未知用户".to_string()),
            real_name: user.and_then(|u| u.real_name.clone()),
            student_no: user.and_then(|u| u.student_no.clone()),
            class_name: user.and_then(|u| u.class_name.clone()),
            major: user.and_then(|u| u.major.clone()),
        }
    }

    /// batch_id → 批次名称
    async fn batch_name_map(
        &self,
        applications: &[crate::entity::applications::Model],
    ) -> Result<HashMap<i64, String>> {
        let batch_ids: Vec<i64> = applications
            .iter()
            .map(|a| a.batch_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        if batch_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let batches = Batches::find()
            .filter(crate::entity::batches::Column::Id.is_in(batch_ids))
            .all(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询批次失败: {e}")))?;
        Ok(batches.into_iter().map(|b| (b.id, b.name)).collect())
    }
}

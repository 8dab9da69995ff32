use std::sync::Arc;

use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
    applications::{
        entities::{Application, ApplicationStatus},
        requests::{ApplicationListQuery, SaveApplicationRequest},
        responses::{
            ApplicationDetailResponse, ApplicationListResponse, ApplicationStatusResponse,
            DashboardStats, SaveApplicationResponse, StudentStatsResponse, UserApplicationItem,
        },
    },
    batches::{
        entities::Batch,
        requests::{CreateBatchRequest, UpdateBatchRequest},
    },
    categories::{
        entities::{Category, Item, RubricEntry},
        requests::{
            CreateCategoryRequest, CreateItemRequest, UpdateCategoryRequest, UpdateRubricRequest,
        },
        responses::CategoryWithItems,
    },
    files::entities::Attachment,
    ranking::responses::BatchRankingResponse,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量（用于启动种子账号）
    async fn count_users(&self) -> Result<u64>;

    /// 批次管理方法
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch>;
    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>>;
    async fn list_batches(&self) -> Result<Vec<Batch>>;
    async fn update_batch(&self, batch_id: i64, update: UpdateBatchRequest)
    -> Result<Option<Batch>>;
    // 删除批次：已有申请时拒绝
    async fn delete_batch(&self, batch_id: i64) -> Result<bool>;

    /// 类目与评分表管理方法
    async fn list_categories(&self) -> Result<Vec<Category>>;
    // 类目连同奖项与评分表（学生填报页）
    async fn list_categories_with_items(&self) -> Result<Vec<CategoryWithItems>>;
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category>;
    async fn update_category(
        &self,
        category_id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>>;
    // 删除类目：有申请材料引用时拒绝
    async fn delete_category(&self, category_id: i64) -> Result<bool>;
    // 创建奖项并播种完整评分表
    async fn create_item(&self, item: CreateItemRequest) -> Result<Item>;
    // 删除奖项：有申请材料引用时拒绝
    async fn delete_item(&self, item_id: i64) -> Result<bool>;
    // 更新评分表单元格
    async fn update_rubric_entry(&self, update: UpdateRubricRequest) -> Result<Option<RubricEntry>>;

    /// 申请方法
    // 保存（创建或重新提交）申请：一个事务内完成对账、计分、聚合
    async fn save_application(
        &self,
        user_id: i64,
        request: SaveApplicationRequest,
    ) -> Result<SaveApplicationResponse>;
    // 查询学生在批次内的申请状态
    async fn check_user_application(
        &self,
        user_id: i64,
        batch_id: i64,
    ) -> Result<ApplicationStatusResponse>;
    // 学生自己的申请列表
    async fn list_user_applications(&self, user_id: i64) -> Result<Vec<UserApplicationItem>>;
    // 管理员申请列表
    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse>;
    // 申请详情（requesting_user_id 为学生本人时限定归属）
    async fn get_application_detail(
        &self,
        application_id: i64,
        requesting_user_id: Option<i64>,
    ) -> Result<Option<ApplicationDetailResponse>>;
    // 审核申请
    async fn review_application(
        &self,
        application_id: i64,
        status: ApplicationStatus,
        comment: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Application>>;
    // 删除申请（管理员），级联清理材料与附件
    async fn delete_application(&self, application_id: i64) -> Result<bool>;
    // 系统概览统计
    async fn get_dashboard_stats(&self) -> Result<DashboardStats>;
    // 学生提交情况统计
    async fn get_student_stats(
        &self,
        batch_id: Option<i64>,
        class_name: Option<String>,
    ) -> Result<StudentStatsResponse>;

    /// 排名方法
    // 批次排名（仅已通过的申请，总分降序、审核时间升序）
    async fn get_batch_ranking(&self, batch_id: i64) -> Result<Option<BatchRankingResponse>>;

    /// 文件方法
    // 通过 ID 获取附件元数据（下载用）
    async fn get_attachment_by_id(&self, attachment_id: i64) -> Result<Option<Attachment>>;

    /// 公告方法
    async fn list_announcements(&self) -> Result<Vec<Announcement>>;
    async fn create_announcement(
        &self,
        created_by: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

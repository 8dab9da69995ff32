//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod applications;
mod batches;
mod categories;
mod files;
mod ranking;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, ScholarshipError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ScholarshipError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("foreign_keys", "on");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ScholarshipError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ScholarshipError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ScholarshipError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 批次模块
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch> {
        self.create_batch_impl(batch).await
    }

    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>> {
        self.get_batch_by_id_impl(batch_id).await
    }

    async fn list_batches(&self) -> Result<Vec<Batch>> {
        self.list_batches_impl().await
    }

    async fn update_batch(
        &self,
        batch_id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        self.update_batch_impl(batch_id, update).await
    }

    async fn delete_batch(&self, batch_id: i64) -> Result<bool> {
        self.delete_batch_impl(batch_id).await
    }

    // 类目模块
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.list_categories_impl().await
    }

    async fn list_categories_with_items(&self) -> Result<Vec<CategoryWithItems>> {
        self.list_categories_with_items_impl().await
    }

    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category> {
        self.create_category_impl(category).await
    }

    async fn update_category(
        &self,
        category_id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        self.update_category_impl(category_id, update).await
    }

    async fn delete_category(&self, category_id: i64) -> Result<bool> {
        self.delete_category_impl(category_id).await
    }

    async fn create_item(&self, item: CreateItemRequest) -> Result<Item> {
        self.create_item_impl(item).await
    }

    async fn delete_item(&self, item_id: i64) -> Result<bool> {
        self.delete_item_impl(item_id).await
    }

    async fn update_rubric_entry(
        &self,
        update: UpdateRubricRequest,
    ) -> Result<Option<RubricEntry>> {
        self.update_rubric_entry_impl(update).await
    }

    // 申请模块
    async fn save_application(
        &self,
        user_id: i64,
        request: SaveApplicationRequest,
    ) -> Result<SaveApplicationResponse> {
        self.save_application_impl(user_id, request).await
    }

    async fn check_user_application(
        &self,
        user_id: i64,
        batch_id: i64,
    ) -> Result<ApplicationStatusResponse> {
        self.check_user_application_impl(user_id, batch_id).await
    }

    async fn list_user_applications(&self, user_id: i64) -> Result<Vec<UserApplicationItem>> {
        self.list_user_applications_impl(user_id).await
    }

    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        self.list_applications_with_pagination_impl(query).await
    }

    async fn get_application_detail(
        &self,
        application_id: i64,
        requesting_user_id: Option<i64>,
    ) -> Result<Option<ApplicationDetailResponse>> {
        self.get_application_detail_impl(application_id, requesting_user_id)
            .await
    }

    async fn review_application(
        &self,
        application_id: i64,
        status: ApplicationStatus,
        comment: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Application>> {
        self.review_application_impl(application_id, status, comment, reviewer_id)
            .await
    }

    async fn delete_application(&self, application_id: i64) -> Result<bool> {
        self.delete_application_impl(application_id).await
    }

    async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.get_dashboard_stats_impl().await
    }

    async fn get_student_stats(
        &self,
        batch_id: Option<i64>,
        class_name: Option<String>,
    ) -> Result<StudentStatsResponse> {
        self.get_student_stats_impl(batch_id, class_name).await
    }

    // 排名模块
    async fn get_batch_ranking(&self, batch_id: i64) -> Result<Option<BatchRankingResponse>> {
        self.get_batch_ranking_impl(batch_id).await
    }

    // 文件模块
    async fn get_attachment_by_id(&self, attachment_id: i64) -> Result<Option<Attachment>> {
        self.get_attachment_by_id_impl(attachment_id).await
    }

    // 公告模块
    async fn list_announcements(&self) -> Result<Vec<Announcement>> {
        self.list_announcements_impl().await
    }

    async fn create_announcement(
        &self,
        created_by: i64,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(created_by, req).await
    }

    async fn update_announcement(
        &self,
        id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(id, update).await
    }

    async fn delete_announcement(&self, id: i64) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }
}

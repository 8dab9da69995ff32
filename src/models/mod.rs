pub mod announcements;
pub mod applications;
pub mod auth;
pub mod batches;
pub mod categories;
pub mod common;
pub mod files;
pub mod ranking;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间（用于 /status 上报运行时长）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码
//
// 约定：0 表示成功；4xxxx 为客户端错误；5xxxx 为服务端错误。
// 中段两位区分资源域：01 通用、02 用户、03 批次、04 类目、05 申请、06 文件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, ts_rs::TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 40100,
    Unauthorized = 40101,
    Forbidden = 40102,
    NotFound = 40103,
    InternalServerError = 50100,

    // 用户
    UserNotFound = 40201,
    UserAlreadyExists = 40202,
    InvalidCredentials = 40203,

    // 批次
    BatchNotFound = 40301,
    BatchClosed = 40302,
    BatchHasApplications = 40303,

    // 类目/奖项
    CategoryNotFound = 40401,
    ItemNotFound = 40402,
    CategoryInUse = 40403,
    ItemInUse = 40404,

    // 申请
    ApplicationNotFound = 40501,
    ApplicationLocked = 40502,
    DuplicateMaterial = 40503,
    ReviewCommentRequired = 40504,
    EmptyMaterials = 40505,

    // 文件
    FileNotFound = 40601,
    FileUploadFailed = 40602,
    FileTypeNotAllowed = 40603,
    FileSizeExceeded = 40604,
    MultifileUploadNotAllowed = 40605,
}

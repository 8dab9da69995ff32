use serde::Deserialize;
use ts_rs::TS;

use super::entities::{UserRole, UserStatus};

/// 创建用户（管理员操作，或启动时种子账号）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    /// 已经过 argon2 哈希的密码
    pub password: String,
    pub role: UserRole,
    pub real_name: Option<String>,
    pub student_no: Option<String>,
    pub class_name: Option<String>,
    pub major: Option<String>,
}

/// 更新用户
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub real_name: Option<String>,
    pub student_no: Option<String>,
    pub class_name: Option<String>,
    pub major: Option<String>,
}

/// 用户列表筛选
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListQuery {
    pub role: Option<UserRole>,
    pub class_name: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

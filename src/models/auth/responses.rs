use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::User;

/// 登录成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

/// 创建用户（管理员）
pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    mut req: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    if let Err(message) = validate_username(&req.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)));
    }
    if let Err(message) = validate_password(&req.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)));
    }

    // 明文密码只在这里出现一次，立即换成哈希
    req.password = match hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("密码哈希失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建用户失败",
                )),
            );
        }
    };

    let storage = service.get_storage(request);
    match storage.create_user(req).await {
        Ok(user) => {
            info!("User {} created", user.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "用户创建成功")))
        }
        Err(e) => {
            let message = e.to_string();
            if message.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "用户名或邮箱已存在",
                )))
            } else {
                error!("创建用户失败: {}", message);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "创建用户失败",
                    )),
                )
            }
        }
    }
}

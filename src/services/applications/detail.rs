use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 查询学生在批次内的申请状态
pub async fn check_application_status(
    service: &ApplicationService,
    request: &HttpRequest,
    user_id: i64,
    batch_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.check_user_application(user_id, batch_id).await {
        Ok(status) => Ok(HttpResponse::Ok().json(ApiResponse::success(status, "查询成功"))),
        Err(e) => {
            error!("查询申请状态失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询申请状态失败",
                )),
            )
        }
    }
}

/// 申请详情
///
/// 学生只能查看自己的申请；管理员可以查看任意申请。
pub async fn get_application_detail(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let requesting_user_id = match user.role {
        UserRole::Admin => None,
        UserRole::Student => Some(user.id),
    };

    match storage
        .get_application_detail(application_id, requesting_user_id)
        .await
    {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "申请不存在",
        ))),
        Err(e) => {
            error!("查询申请详情失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询申请详情失败",
                )),
            )
        }
    }
}

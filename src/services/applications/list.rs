use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::models::applications::requests::ApplicationListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 学生自己的申请列表
pub async fn list_my_applications(
    service: &ApplicationService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_user_applications(user_id).await {
        Ok(applications) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(applications, "查询成功")))
        }
        Err(e) => {
            error!("查询申请列表失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询申请列表失败",
                )),
            )
        }
    }
}

/// 管理员申请列表（状态/批次筛选 + 分页）
pub async fn list_applications(
    service: &ApplicationService,
    request: &HttpRequest,
    query: ApplicationListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_applications_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("查询申请列表失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询申请列表失败",
                )),
            )
        }
    }
}

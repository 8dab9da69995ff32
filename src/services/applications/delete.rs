use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除申请（管理员）
pub async fn delete_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_application(application_id).await {
        Ok(true) => {
            info!("Application {} deleted", application_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("申请删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "申请不存在",
        ))),
        Err(e) => {
            error!("删除申请失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "删除申请失败",
                )),
            )
        }
    }
}

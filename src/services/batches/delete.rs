use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::BatchService;
use crate::errors::ScholarshipError;
use crate::models::{ApiResponse, ErrorCode};

/// 删除批次：已有申请时拒绝
pub async fn delete_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_batch(batch_id).await {
        Ok(true) => {
            info!("Batch {} deleted", batch_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("批次删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BatchNotFound,
            "批次不存在",
        ))),
        Err(ScholarshipError::Validation(message)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::BatchHasApplications, message),
        )),
        Err(e) => {
            error!("删除批次失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "删除批次失败",
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BatchService;
use crate::models::batches::requests::UpdateBatchRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新批次
pub async fn update_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: i64,
    req: UpdateBatchRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_batch(batch_id, req).await {
        Ok(Some(batch)) => Ok(HttpResponse::Ok().json(ApiResponse::success(batch, "批次更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BatchNotFound,
            "批次不存在",
        ))),
        Err(e) => {
            error!("更新批次失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "更新批次失败",
                )),
            )
        }
    }
}

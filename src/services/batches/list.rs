use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BatchService;
use crate::models::{ApiResponse, ErrorCode};

/// 列出批次
pub async fn list_batches(
    service: &BatchService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_batches().await {
        Ok(batches) => Ok(HttpResponse::Ok().json(ApiResponse::success(batches, "查询成功"))),
        Err(e) => {
            error!("查询批次列表失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询批次列表失败",
                )),
            )
        }
    }
}

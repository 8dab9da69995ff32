use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::BatchService;
use crate::models::batches::requests::CreateBatchRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建批次
pub async fn create_batch(
    service: &BatchService,
    request: &HttpRequest,
    req: CreateBatchRequest,
) -> ActixResult<HttpResponse> {
    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "批次名称不能为空",
        )));
    }
    if req.end_date < req.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "结束日期不能早于开始日期",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_batch(req).await {
        Ok(batch) => {
            info!("Batch {} created", batch.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(batch, "批次添加成功")))
        }
        Err(e) => {
            error!("创建批次失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建批次失败",
                )),
            )
        }
    }
}

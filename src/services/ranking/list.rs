use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::RankingService;
use crate::models::{ApiResponse, ErrorCode};

/// 批次排名
pub async fn get_batch_ranking(
    service: &RankingService,
    request: &HttpRequest,
    batch_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_batch_ranking(batch_id).await {
        Ok(Some(ranking)) => Ok(HttpResponse::Ok().json(ApiResponse::success(ranking, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BatchNotFound,
            "批次不存在",
        ))),
        Err(e) => {
            error!("查询排名失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询排名失败",
                )),
            )
        }
    }
}

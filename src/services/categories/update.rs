use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CategoryService;
use crate::models::categories::requests::UpdateCategoryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score_ratio;

/// 更新类目
pub async fn update_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
    req: UpdateCategoryRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ratio) = req.score_ratio
        && let Err(message) = validate_score_ratio(ratio)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)));
    }

    let storage = service.get_storage(request);
    match storage.update_category(category_id, req).await {
        Ok(Some(category)) => {
            service.invalidate_tree_cache(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(category, "类目更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "类目不存在",
        ))),
        Err(e) => {
            error!("更新类目失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "更新类目失败",
                )),
            )
        }
    }
}

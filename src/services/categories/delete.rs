use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CategoryService;
use crate::errors::ScholarshipError;
use crate::models::{ApiResponse, ErrorCode};

/// 删除类目：有申请材料引用时拒绝
pub async fn delete_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_category(category_id).await {
        Ok(true) => {
            info!("Category {} deleted", category_id);
            service.invalidate_tree_cache(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("类目删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "类目不存在",
        ))),
        Err(ScholarshipError::Validation(message)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::CategoryInUse, message))),
        Err(e) => {
            error!("删除类目失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "删除类目失败",
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CategoryService;
use crate::models::categories::requests::CreateCategoryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score_ratio;

/// 创建类目
pub async fn create_category(
    service: &CategoryService,
    request: &HttpRequest,
    req: CreateCategoryRequest,
) -> ActixResult<HttpResponse> {
    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "类目名称不能为空",
        )));
    }
    if let Err(message) = validate_score_ratio(req.score_ratio) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, message)));
    }

    let storage = service.get_storage(request);
    match storage.create_category(req).await {
        Ok(category) => {
            info!("Category {} created", category.id);
            service.invalidate_tree_cache(request).await;
            Ok(HttpResponse::Created().json(ApiResponse::success(category, "类目创建成功")))
        }
        Err(e) => {
            error!("创建类目失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建类目失败",
                )),
            )
        }
    }
}

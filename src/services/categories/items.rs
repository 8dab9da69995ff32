use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CategoryService;
use crate::errors::ScholarshipError;
use crate::models::categories::requests::CreateItemRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建奖项（同时播种完整评分表）
pub async fn create_item(
    service: &CategoryService,
    request: &HttpRequest,
    req: CreateItemRequest,
) -> ActixResult<HttpResponse> {
    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "奖项名称不能为空",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_item(req).await {
        Ok(item) => {
            info!("Item {} created under category {}", item.id, item.category_id);
            service.invalidate_tree_cache(request).await;
            Ok(HttpResponse::Created().json(ApiResponse::success(item, "奖项创建成功")))
        }
        Err(ScholarshipError::NotFound(message)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::CategoryNotFound, message))),
        Err(e) => {
            error!("创建奖项失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建奖项失败",
                )),
            )
        }
    }
}

/// 删除奖项：有申请材料引用时拒绝
pub async fn delete_item(
    service: &CategoryService,
    request: &HttpRequest,
    item_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_item(item_id).await {
        Ok(true) => {
            info!("Item {} deleted", item_id);
            service.invalidate_tree_cache(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("奖项删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ItemNotFound,
            "奖项不存在",
        ))),
        Err(ScholarshipError::Validation(message)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::ItemInUse, message))),
        Err(e) => {
            error!("删除奖项失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "删除奖项失败",
                )),
            )
        }
    }
}

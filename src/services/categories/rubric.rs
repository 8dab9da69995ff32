use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CategoryService;
use crate::models::categories::requests::UpdateRubricRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新评分表单元格
pub async fn update_rubric(
    service: &CategoryService,
    request: &HttpRequest,
    req: UpdateRubricRequest,
) -> ActixResult<HttpResponse> {
    if req.score < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "分数不能为负",
        )));
    }

    let storage = service.get_storage(request);
    match storage.update_rubric_entry(req).await {
        Ok(Some(entry)) => {
            service.invalidate_tree_cache(request).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(entry, "分数更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ItemNotFound,
            "评分表条目不存在",
        ))),
        Err(e) => {
            error!("更新评分表失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "更新评分表失败",
                )),
            )
        }
    }
}

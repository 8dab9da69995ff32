use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::models::{ApiResponse, ErrorCode};

/// 系统概览统计
pub async fn get_dashboard_stats(
    service: &ApplicationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_dashboard_stats().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功"))),
        Err(e) => {
            error!("查询统计数据失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询统计数据失败",
                )),
            )
        }
    }
}

/// 学生提交情况统计（按班级聚合）
pub async fn get_student_stats(
    service: &ApplicationService,
    request: &HttpRequest,
    batch_id: Option<i64>,
    class_name: Option<String>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_stats(batch_id, class_name).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "查询成功"))),
        Err(e) => {
            error!("查询学生统计失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询学生统计失败",
                )),
            )
        }
    }
}

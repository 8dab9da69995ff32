use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::applications::requests::{
    ApplicationListQuery, ApplicationStatusQuery, ReviewApplicationRequest, SaveApplicationRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ApplicationService;

// 懒加载的全局 ApplicationService 实例
static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

// 保存（首次提交或重新提交）申请
pub async fn save_application(
    req: HttpRequest,
    body: web::Json<SaveApplicationRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    APPLICATION_SERVICE
        .save_application(&req, user_id, body.into_inner())
        .await
}

// 查询批次内申请状态
pub async fn check_application_status(
    req: HttpRequest,
    query: web::Query<ApplicationStatusQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    APPLICATION_SERVICE
        .check_application_status(&req, user_id, query.batch_id)
        .await
}

// 我的申请列表
pub async fn list_my_applications(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    APPLICATION_SERVICE.list_my_applications(&req, user_id).await
}

// 申请详情
pub async fn get_application(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .get_application_detail(&req, path.into_inner())
        .await
}

// 管理员申请列表
pub async fn list_applications(
    req: HttpRequest,
    query: web::Query<ApplicationListQuery>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .list_applications(&req, query.into_inner())
        .await
}

// 审核申请
pub async fn review_application(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<ReviewApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .review_application(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除申请
pub async fn delete_application(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .delete_application(&req, path.into_inner())
        .await
}

// 系统概览统计
pub async fn get_dashboard_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE.get_dashboard_stats(&req).await
}

/// 学生统计筛选参数
#[derive(Debug, serde::Deserialize, ts_rs::TS)]
#[ts(export, export_to = "../frontend/src/types/generated/application.ts")]
pub struct StudentStatsQuery {
    pub batch_id: Option<i64>,
    pub class_name: Option<String>,
}

// 学生提交情况统计
pub async fn get_student_stats(
    req: HttpRequest,
    query: web::Query<StudentStatsQuery>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    APPLICATION_SERVICE
        .get_student_stats(&req, query.batch_id, query.class_name)
        .await
}

// 配置路由
pub fn configure_application_routes(cfg: &mut web::ServiceConfig) {
    // 学生侧
    cfg.service(
        web::scope("/api/v1/applications")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(save_application))
            .route("/my", web::get().to(list_my_applications))
            .route("/status", web::get().to(check_application_status))
            .route("/{id}", web::get().to(get_application)),
    );

    // 管理侧
    cfg.service(
        web::scope("/api/v1/admin/applications")
            .wrap(middlewares::RequireAdmin)
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_applications))
            .route("/stats", web::get().to(get_dashboard_stats))
            .route("/student-stats", web::get().to(get_student_stats))
            .route("/{id}/review", web::post().to(review_application))
            .route("/{id}", web::delete().to(delete_application)),
    );
}

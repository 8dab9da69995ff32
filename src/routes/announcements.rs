use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::announcements::requests::{
    CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AnnouncementService;

// 懒加载的全局 AnnouncementService 实例
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> = Lazy::new(AnnouncementService::new_lazy);

// 列出公告
pub async fn list_announcements(req: HttpRequest) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE.list_announcements(&req).await
}

// 创建公告
pub async fn create_announcement(
    req: HttpRequest,
    body: web::Json<CreateAnnouncementRequest>,
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

    ANNOUNCEMENT_SERVICE
        .create_announcement(&req, user_id, body.into_inner())
        .await
}

// 更新公告
pub async fn update_announcement(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .update_announcement(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除公告
pub async fn delete_announcement(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .delete_announcement(&req, path.into_inner())
        .await
}

// 配置路由
pub fn configure_announcement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/announcements")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_announcements)),
    );

    cfg.service(
        web::scope("/api/v1/admin/announcements")
            .wrap(middlewares::RequireAdmin)
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_announcement))
            .route("/{id}", web::put().to(update_announcement))
            .route("/{id}", web::delete().to(delete_announcement)),
    );
}

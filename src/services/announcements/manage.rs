use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AnnouncementService;
use crate::models::announcements::requests::{
    CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::models::{ApiResponse, ErrorCode};

/// 列出公告
pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_announcements().await {
        Ok(announcements) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(announcements, "查询成功")))
        }
        Err(e) => {
            error!("查询公告列表失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询公告列表失败",
                )),
            )
        }
    }
}

/// 创建公告
pub async fn create_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    if req.title.trim().is_empty() || req.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "公告标题和内容不能为空",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_announcement(created_by, req).await {
        Ok(announcement) => {
            info!("Announcement {} created by {}", announcement.id, created_by);
            Ok(HttpResponse::Created().json(ApiResponse::success(announcement, "公告创建成功")))
        }
        Err(e) => {
            error!("创建公告失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "创建公告失败",
                )),
            )
        }
    }
}

/// 更新公告
pub async fn update_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    id: i64,
    req: UpdateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_announcement(id, req).await {
        Ok(Some(announcement)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(announcement, "公告更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "公告不存在",
        ))),
        Err(e) => {
            error!("更新公告失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "更新公告失败",
                )),
            )
        }
    }
}

/// 删除公告
pub async fn delete_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_announcement(id).await {
        Ok(true) => {
            info!("Announcement {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("公告删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "公告不存在",
        ))),
        Err(e) => {
            error!("删除公告失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "删除公告失败",
                )),
            )
        }
    }
}

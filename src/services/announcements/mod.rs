pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::{
    CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 列出公告
    pub async fn list_announcements(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::list_announcements(self, request).await
    }

    /// 创建公告
    pub async fn create_announcement(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_announcement(self, request, created_by, req).await
    }

    /// 更新公告
    pub async fn update_announcement(
        &self,
        request: &HttpRequest,
        id: i64,
        req: UpdateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_announcement(self, request, id, req).await
    }

    /// 删除公告
    pub async fn delete_announcement(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::delete_announcement(self, request, id).await
    }
}

pub mod delete;
pub mod detail;
pub mod list;
pub mod review;
pub mod save;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::applications::requests::{
    ApplicationListQuery, ReviewApplicationRequest, SaveApplicationRequest,
};
use crate::storage::Storage;

pub struct ApplicationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ApplicationService {
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

    /// 保存（首次提交或重新提交）申请
    pub async fn save_application(
        &self,
        request: &HttpRequest,
        user_id: i64,
        req: SaveApplicationRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_application(self, request, user_id, req).await
    }

    /// 查询批次内申请状态
    pub async fn check_application_status(
        &self,
        request: &HttpRequest,
        user_id: i64,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::check_application_status(self, request, user_id, batch_id).await
    }

    /// 申请详情
    pub async fn get_application_detail(
        &self,
        request: &HttpRequest,
        application_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_application_detail(self, request, application_id).await
    }

    /// 学生自己的申请列表
    pub async fn list_my_applications(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_my_applications(self, request, user_id).await
    }

    /// 管理员申请列表
    pub async fn list_applications(
        &self,
        request: &HttpRequest,
        query: ApplicationListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_applications(self, request, query).await
    }

    /// 审核申请
    pub async fn review_application(
        &self,
        request: &HttpRequest,
        application_id: i64,
        req: ReviewApplicationRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_application(self, request, application_id, req).await
    }

    /// 删除申请（管理员）
    pub async fn delete_application(
        &self,
        request: &HttpRequest,
        application_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_application(self, request, application_id).await
    }

    /// 系统概览统计
    pub async fn get_dashboard_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_dashboard_stats(self, request).await
    }

    /// 学生提交情况统计
    pub async fn get_student_stats(
        &self,
        request: &HttpRequest,
        batch_id: Option<i64>,
        class_name: Option<String>,
    ) -> ActixResult<HttpResponse> {
        stats::get_student_stats(self, request, batch_id, class_name).await
    }
}

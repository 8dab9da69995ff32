pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::batches::requests::{CreateBatchRequest, UpdateBatchRequest};
use crate::storage::Storage;

pub struct BatchService {
    storage: Option<Arc<dyn Storage>>,
}

impl BatchService {
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

    /// 列出批次
    pub async fn list_batches(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_batches(self, request).await
    }

    /// 创建批次
    pub async fn create_batch(
        &self,
        request: &HttpRequest,
        req: CreateBatchRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_batch(self, request, req).await
    }

    /// 更新批次
    pub async fn update_batch(
        &self,
        request: &HttpRequest,
        batch_id: i64,
        req: UpdateBatchRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_batch(self, request, batch_id, req).await
    }

    /// 删除批次
    pub async fn delete_batch(
        &self,
        request: &HttpRequest,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_batch(self, request, batch_id).await
    }
}

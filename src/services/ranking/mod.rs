pub mod export;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct RankingService {
    storage: Option<Arc<dyn Storage>>,
}

impl RankingService {
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

    /// 批次排名
    pub async fn get_batch_ranking(
        &self,
        request: &HttpRequest,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_batch_ranking(self, request, batch_id).await
    }

    /// 导出批次排名 CSV
    pub async fn export_batch_ranking(
        &self,
        request: &HttpRequest,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        export::export_batch_ranking(self, request, batch_id).await
    }
}

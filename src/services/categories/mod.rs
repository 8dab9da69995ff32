pub mod create;
pub mod delete;
pub mod items;
pub mod list;
pub mod rubric;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::categories::requests::{
    CreateCategoryRequest, CreateItemRequest, UpdateCategoryRequest, UpdateRubricRequest,
};
use crate::storage::Storage;

/// 类目树缓存键：评分表属于读多写少的基础数据，整树缓存，
/// 任何管理端写操作都会使其失效。
pub(crate) const CATEGORY_TREE_CACHE_KEY: &str = "categories:tree";

pub struct CategoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl CategoryService {
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

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    /// 管理端写操作后使类目树缓存失效
    pub(crate) async fn invalidate_tree_cache(&self, request: &HttpRequest) {
        self.get_cache(request).remove(CATEGORY_TREE_CACHE_KEY).await;
    }

    /// 列出类目
    pub async fn list_categories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_categories(self, request).await
    }

    /// 类目连同奖项与评分表
    pub async fn list_categories_with_items(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_categories_with_items(self, request).await
    }

    /// 创建类目
    pub async fn create_category(
        &self,
        request: &HttpRequest,
        req: CreateCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_category(self, request, req).await
    }

    /// 更新类目
    pub async fn update_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
        req: UpdateCategoryRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_category(self, request, category_id, req).await
    }

    /// 删除类目
    pub async fn delete_category(
        &self,
        request: &HttpRequest,
        category_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_category(self, request, category_id).await
    }

    /// 创建奖项
    pub async fn create_item(
        &self,
        request: &HttpRequest,
        req: CreateItemRequest,
    ) -> ActixResult<HttpResponse> {
        items::create_item(self, request, req).await
    }

    /// 删除奖项
    pub async fn delete_item(
        &self,
        request: &HttpRequest,
        item_id: i64,
    ) -> ActixResult<HttpResponse> {
        items::delete_item(self, request, item_id).await
    }

    /// 更新评分表单元格
    pub async fn update_rubric(
        &self,
        request: &HttpRequest,
        req: UpdateRubricRequest,
    ) -> ActixResult<HttpResponse> {
        rubric::update_rubric(self, request, req).await
    }
}

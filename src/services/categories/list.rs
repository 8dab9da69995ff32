use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};

use super::{CATEGORY_TREE_CACHE_KEY, CategoryService};
use crate::cache::CacheResult;
use crate::config::AppConfig;
use crate::models::categories::responses::CategoryWithItems;
use crate::models::{ApiResponse, ErrorCode};

/// 列出类目
pub async fn list_categories(
    service: &CategoryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_categories().await {
        Ok(categories) => Ok(HttpResponse::Ok().json(ApiResponse::success(categories, "查询成功"))),
        Err(e) => {
            error!("查询类目失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询类目失败",
                )),
            )
        }
    }
}

/// 类目连同奖项与评分表（学生填报页，走缓存）
pub async fn list_categories_with_items(
    service: &CategoryService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);

    // 先查缓存
    if let CacheResult::Found(json) = cache.get_raw(CATEGORY_TREE_CACHE_KEY).await {
        match serde_json::from_str::<Vec<CategoryWithItems>>(&json) {
            Ok(categories) => {
                debug!("Category tree served from cache");
                return Ok(
                    HttpResponse::Ok().json(ApiResponse::success(categories, "查询成功"))
                );
            }
            Err(_) => {
                cache.remove(CATEGORY_TREE_CACHE_KEY).await;
            }
        }
    }

    let storage = service.get_storage(request);
    match storage.list_categories_with_items().await {
        Ok(categories) => {
            if let Ok(json) = serde_json::to_string(&categories) {
                cache
                    .insert_raw(
                        CATEGORY_TREE_CACHE_KEY.to_string(),
                        json,
                        AppConfig::get().cache.default_ttl,
                    )
                    .await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(categories, "查询成功")))
        }
        Err(e) => {
            error!("查询类目失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询类目失败",
                )),
            )
        }
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::categories::requests::{
    CreateCategoryRequest, CreateItemRequest, UpdateCategoryRequest, UpdateRubricRequest,
};
use crate::services::CategoryService;

// 懒加载的全局 CategoryService 实例
static CATEGORY_SERVICE: Lazy<CategoryService> = Lazy::new(CategoryService::new_lazy);

// 列出类目
pub async fn list_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.list_categories(&req).await
}

// 类目连同奖项与评分表
pub async fn list_categories_with_items(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.list_categories_with_items(&req).await
}

// 创建类目
pub async fn create_category(
    req: HttpRequest,
    body: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.create_category(&req, body.into_inner()).await
}

// 更新类目
pub async fn update_category(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .update_category(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除类目
pub async fn delete_category(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.delete_category(&req, path.into_inner()).await
}

// 创建奖项
pub async fn create_item(
    req: HttpRequest,
    body: web::Json<CreateItemRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.create_item(&req, body.into_inner()).await
}

// 删除奖项
pub async fn delete_item(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.delete_item(&req, path.into_inner()).await
}

// 更新评分表单元格
pub async fn update_rubric(
    req: HttpRequest,
    body: web::Json<UpdateRubricRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.update_rubric(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/categories")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_categories))
            .route("/tree", web::get().to(list_categories_with_items)),
    );

    cfg.service(
        web::scope("/api/v1/admin/categories")
            .wrap(middlewares::RequireAdmin)
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_category))
            .route("/{id}", web::put().to(update_category))
            .route("/{id}", web::delete().to(delete_category))
            .route("/items", web::post().to(create_item))
            .route("/items/{id}", web::delete().to(delete_item))
            .route("/rubric", web::put().to(update_rubric)),
    );
}

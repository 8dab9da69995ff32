use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::batches::requests::{CreateBatchRequest, UpdateBatchRequest};
use crate::services::BatchService;

// 懒加载的全局 BatchService 实例
static BATCH_SERVICE: Lazy<BatchService> = Lazy::new(BatchService::new_lazy);

// 列出批次
pub async fn list_batches(req: HttpRequest) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.list_batches(&req).await
}

// 创建批次
pub async fn create_batch(
    req: HttpRequest,
    body: web::Json<CreateBatchRequest>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.create_batch(&req, body.into_inner()).await
}

// 更新批次
pub async fn update_batch(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateBatchRequest>,
) -> ActixResult<HttpResponse> {
    BATCH_SERVICE
        .update_batch(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除批次
pub async fn delete_batch(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    BATCH_SERVICE.delete_batch(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_batch_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/batches")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_batches)),
    );

    cfg.service(
        web::scope("/api/v1/admin/batches")
            .wrap(middlewares::RequireAdmin)
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_batch))
            .route("/{id}", web::put().to(update_batch))
            .route("/{id}", web::delete().to(delete_batch)),
    );
}

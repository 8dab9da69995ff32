use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::RankingService;

// 懒加载的全局 RankingService 实例
static RANKING_SERVICE: Lazy<RankingService> = Lazy::new(RankingService::new_lazy);

// 批次排名
pub async fn get_batch_ranking(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    RANKING_SERVICE.get_batch_ranking(&req, path.into_inner()).await
}

// 导出批次排名 CSV
pub async fn export_batch_ranking(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    RANKING_SERVICE
        .export_batch_ranking(&req, path.into_inner())
        .await
}

// 配置路由
pub fn configure_ranking_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin/ranking")
            .wrap(middlewares::RequireAdmin)
            .wrap(middlewares::RequireJWT)
            .route("/{batch_id}", web::get().to(get_batch_ranking))
            .route("/{batch_id}/export", web::get().to(export_batch_ranking)),
    );
}

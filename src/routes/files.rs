use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::FileService;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

// 暂存上传文件
pub async fn upload_file(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    FILE_SERVICE.upload(&req, payload).await
}

// 下载附件
pub async fn download_file(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    FILE_SERVICE.download(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files")
            .wrap(middlewares::RequireJWT)
            .route("/upload", web::post().to(upload_file))
            .route("/{id}", web::get().to(download_file)),
    );
}

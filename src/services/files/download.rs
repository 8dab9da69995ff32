use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FileService;
use crate::models::{ApiResponse, ErrorCode};

/// 下载/预览附件
///
/// 图片与 PDF 内联展示，其余类型按附件下载。
pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    attachment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let attachment = match storage.get_attachment_by_id(attachment_id).await {
        Ok(Some(attachment)) => attachment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "附件不存在",
            )));
        }
        Err(e) => {
            error!("查询附件失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询附件失败",
                )),
            );
        }
    };

    let bytes = match tokio::fs::read(&attachment.stored_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("读取附件文件失败 {}: {}", attachment.stored_path, e);
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "附件文件不存在",
            )));
        }
    };

    let inline = attachment.mime_type.starts_with("image/")
        || attachment.mime_type == "application/pdf";
    let disposition = if inline { "inline" } else { "attachment" };

    Ok(HttpResponse::Ok()
        .content_type(attachment.mime_type.clone())
        .insert_header((
            "Content-Disposition",
            format!(
                "{disposition}; filename=\"{}\"",
                attachment.original_name
            ),
        ))
        .body(bytes))
}

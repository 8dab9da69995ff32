use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::errors::ScholarshipError;
use crate::models::applications::requests::SaveApplicationRequest;
use crate::models::batches::entities::BatchStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_save_request;

/// 保存申请
///
/// 事务外先做载荷校验与批次检查，全部通过后才进入存储层事务；
/// 锁定（approved 终态）由存储层在事务快照内裁决。
pub async fn save_application(
    service: &ApplicationService,
    request: &HttpRequest,
    user_id: i64,
    req: SaveApplicationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 载荷校验：批次、材料非空、自然键不重复
    if let Err(message) = validate_save_request(&req) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            if message.contains("重复申报") {
                ErrorCode::DuplicateMaterial
            } else {
                ErrorCode::EmptyMaterials
            },
            message,
        )));
    }

    // 2. 批次必须存在且开放
    match storage.get_batch_by_id(req.batch_id).await {
        Ok(Some(batch)) => {
            if batch.status != BatchStatus::Open {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BatchClosed,
                    "该批次已截止申请",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                "批次不存在",
            )));
        }
        Err(e) => {
            error!("查询批次失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询批次失败",
                )),
            );
        }
    }

    // 3. 进入存储层事务
    match storage.save_application(user_id, req).await {
        Ok(result) => {
            info!(
                "Application {} saved for user {}, total score {}",
                result.application_id, user_id, result.total_score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, "申请保存成功")))
        }
        Err(e) => Ok(map_save_error(e)),
    }
}

fn map_save_error(e: ScholarshipError) -> HttpResponse {
    match &e {
        ScholarshipError::ApplicationLocked(_) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::ApplicationLocked, e.message()),
        ),
        ScholarshipError::DuplicateMaterial(_) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::DuplicateMaterial, e.message()),
        ),
        _ => {
            error!("保存申请失败: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "保存申请失败",
            ))
        }
    }
}

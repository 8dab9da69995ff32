use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::errors::ScholarshipError;
use crate::middlewares::RequireJWT;
use crate::models::applications::entities::ApplicationStatus;
use crate::models::applications::requests::ReviewApplicationRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 审核申请
///
/// 审核结论只接受 approved / rejected；驳回必须附审核意见。
/// 两项校验都在触库之前完成。
pub async fn review_application(
    service: &ApplicationService,
    request: &HttpRequest,
    application_id: i64,
    req: ReviewApplicationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(reviewer_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if !req.status.is_review_verdict() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "审核状态只能是 approved 或 rejected",
        )));
    }

    // 驳回必须给出非空意见
    let comment = req.comment.as_deref().map(str::trim).filter(|c| !c.is_empty());
    if req.status == ApplicationStatus::Rejected && comment.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ReviewCommentRequired,
            "驳回申请必须填写审核意见",
        )));
    }

    match storage
        .review_application(
            application_id,
            req.status,
            comment.map(str::to_string),
            reviewer_id,
        )
        .await
    {
        Ok(Some(application)) => {
            info!(
                "Application {} reviewed as {} by {}",
                application_id, req.status, reviewer_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(application, "审核完成")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "申请不存在",
        ))),
        Err(ScholarshipError::ApplicationLocked(message)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::ApplicationLocked, message),
        )),
        Err(e) => {
            error!("审核申请失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "审核申请失败",
                )),
            )
        }
    }
}

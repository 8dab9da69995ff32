//! 排名报表导出服务
//!
//! 每个类目一列类目总分，每个奖项一列明细分，与排名接口同源。
//! CSV 前置 UTF-8 BOM，保证 Excel 直接打开时中文不乱码。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use std::collections::HashMap;
use tracing::error;

use super::RankingService;
use crate::models::categories::responses::CategoryWithItems;
use crate::models::ranking::responses::BatchRankingResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 导出批次排名 CSV
pub async fn export_batch_ranking(
    service: &RankingService,
    request: &HttpRequest,
    batch_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let ranking = match storage.get_batch_ranking(batch_id).await {
        Ok(Some(ranking)) => ranking,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BatchNotFound,
                "批次不存在",
            )));
        }
        Err(e) => {
            error!("查询排名失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询排名失败",
                )),
            );
        }
    };

    // 表头需要完整的类目/奖项结构（包括没人申报的列）
    let categories = match storage.list_categories_with_items().await {
        Ok(categories) => categories,
        Err(e) => {
            error!("查询类目失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询类目失败",
                )),
            );
        }
    };

    match generate_csv(&ranking, &categories) {
        Ok(buffer) => {
            let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
            let filename = format!("batch_{batch_id}_ranking_{timestamp}.csv");

            Ok(HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(buffer))
        }
        Err(e) => {
            error!("生成 CSV 失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "生成报表失败",
                )),
            )
        }
    }
}

/// 生成 CSV 内容
fn generate_csv(
    ranking: &BatchRankingResponse,
    categories: &[CategoryWithItems],
) -> Result<Vec<u8>, String> {
    // UTF-8 BOM
    let mut buffer: Vec<u8> = vec![0xEF, 0xBB, 0xBF];
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);

        // 表头：基础信息 + 类目总分列 + 奖项明细列
        let mut headers = vec![
            "排名".to_string(),
            "姓名".to_string(),
            "学号".to_string(),
            "班级".to_string(),
            "专业".to_string(),
            "总分".to_string(),
            "审核时间".to_string(),
        ];
        for category in categories {
            headers.push(format!("{}总分", category.category.name));
        }
        for category in categories {
            for item in &category.items {
                headers.push(format!("{}-{}", category.category.name, item.item.name));
            }
        }
        writer.write_record(&headers).map_err(|e| e.to_string())?;

        for entry in &ranking.rankings {
            // 类目原始分与奖项明细分
            let mut category_sums: HashMap<i64, i64> = HashMap::new();
            let mut item_sums: HashMap<(i64, i64), i64> = HashMap::new();
            for material in &entry.materials {
                *category_sums
                    .entry(material.material.category_id)
                    .or_insert(0) += i64::from(material.material.score);
                *item_sums
                    .entry((material.material.category_id, material.material.item_id))
                    .or_insert(0) += i64::from(material.material.score);
            }

            let mut row = vec![
                entry.rank.to_string(),
                entry
                    .applicant
                    .real_name
                    .clone()
                    .unwrap_or_else(|| entry.applicant.username.clone()),
                entry.applicant.student_no.clone().unwrap_or_default(),
                entry.applicant.class_name.clone().unwrap_or_default(),
                entry.applicant.major.clone().unwrap_or_default(),
                format!("{:.2}", entry.total_score),
                entry
                    .reviewed_at
                    .map(|dt| dt.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ];
            for category in categories {
                row.push(
                    category_sums
                        .get(&category.category.id)
                        .copied()
                        .unwrap_or(0)
                        .to_string(),
                );
            }
            for category in categories {
                for item in &category.items {
                    row.push(
                        item_sums
                            .get(&(category.category.id, item.item.id))
                            .copied()
                            .unwrap_or(0)
                            .to_string(),
                    );
                }
            }
            writer.write_record(&row).map_err(|e| e.to_string())?;
        }

        writer.flush().map_err(|e| e.to_string())?;
    }

    Ok(buffer)
}

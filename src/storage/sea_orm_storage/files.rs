//! 附件存储操作
//!
//! 附件行在保存申请时写入；这里只提供下载所需的元数据查询。

use super::SeaOrmStorage;
use crate::entity::uploaded_files::Entity as UploadedFiles;
use crate::errors::{Result, ScholarshipError};
use crate::models::files::entities::Attachment;
use sea_orm::EntityTrait;

impl SeaOrmStorage {
    /// 通过 ID 获取附件元数据
    pub async fn get_attachment_by_id_impl(
        &self,
        attachment_id: i64,
    ) -> Result<Option<Attachment>> {
        let result = UploadedFiles::find_by_id(attachment_id)
            .one(&self.db)
            .await
            .map_err(|e| ScholarshipError::database_operation(format!("查询附件失败: {e}")))?;

        Ok(result.map(|m| m.into_attachment()))
    }
}

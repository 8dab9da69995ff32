//! 附件实体
//!
//! 只存元数据；物理文件由上传接口落盘，材料删除时行随外键级联删除。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "uploaded_files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub material_id: i64,
    pub original_name: String,
    pub stored_name: String,
    pub stored_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_materials::Entity",
        from = "Column::MaterialId",
        to = "super::application_materials::Column::Id"
    )]
    Material,
}

impl Related<super::application_materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attachment(self) -> crate::models::files::entities::Attachment {
        use crate::models::files::entities::Attachment;
        use chrono::{DateTime, Utc};

        Attachment {
            id: self.id,
            material_id: self.material_id,
            original_name: self.original_name,
            stored_name: self.stored_name,
            stored_path: self.stored_path,
            file_size: self.file_size,
            mime_type: self.mime_type,
            uploaded_at: DateTime::<Utc>::from_timestamp(self.uploaded_at, 0).unwrap_or_default(),
        }
    }
}

//! 申请材料实体
//!
//! 一个申请内 (category_id, item_id) 唯一。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "application_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub application_id: i64,
    pub category_id: i64,
    pub item_id: i64,
    pub award_level: String,
    pub award_grade: String,
    pub award_type: String,
    pub raw_score: i32,
    pub score: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::applications::Entity",
        from = "Column::ApplicationId",
        to = "super::applications::Column::Id"
    )]
    Application,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::items::Entity",
        from = "Column::ItemId",
        to = "super::items::Column::Id"
    )]
    Item,
    #[sea_orm(has_many = "super::uploaded_files::Entity")]
    UploadedFiles,
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::uploaded_files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UploadedFiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_material_entry(self) -> crate::models::applications::entities::MaterialEntry {
        use crate::models::applications::entities::{
            AwardGrade, AwardLevel, AwardType, MaterialEntry,
        };

        MaterialEntry {
            id: self.id,
            application_id: self.application_id,
            category_id: self.category_id,
            item_id: self.item_id,
            award_level: self
                .award_level
                .parse::<AwardLevel>()
                .unwrap_or(AwardLevel::Ungraded),
            award_grade: self
                .award_grade
                .parse::<AwardGrade>()
                .unwrap_or(AwardGrade::None),
            award_type: self
                .award_type
                .parse::<AwardType>()
                .unwrap_or(AwardType::Individual),
            raw_score: self.raw_score,
            score: self.score,
        }
    }

    /// 材料对账使用的最小视图
    pub fn as_existing(&self) -> crate::scoring::ExistingMaterial {
        crate::scoring::ExistingMaterial {
            id: self.id,
            key: crate::scoring::MaterialKey {
                category_id: self.category_id,
                item_id: self.item_id,
            },
        }
    }
}

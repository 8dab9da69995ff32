//! 评分表实体
//!
//! (item_id, level, grade) 唯一；奖项创建时按级别×等第全量播种。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_id: i64,
    pub level: String,
    pub grade: String,
    pub score: i32,
    pub grade_label: Option<String>,
    pub default_award_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::items::Entity",
        from = "Column::ItemId",
        to = "super::items::Column::Id"
    )]
    Item,
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_rubric_entry(self) -> crate::models::categories::entities::RubricEntry {
        use crate::models::applications::entities::{AwardGrade, AwardLevel, AwardType};
        use crate::models::categories::entities::RubricEntry;

        RubricEntry {
            id: self.id,
            item_id: self.item_id,
            level: self
                .level
                .parse::<AwardLevel>()
                .unwrap_or(AwardLevel::Ungraded),
            grade: self.grade.parse::<AwardGrade>().unwrap_or(AwardGrade::None),
            score: self.score,
            grade_label: self.grade_label,
            default_award_type: self
                .default_award_type
                .parse::<AwardType>()
                .unwrap_or(AwardType::Individual),
        }
    }
}

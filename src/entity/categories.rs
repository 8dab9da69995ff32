//! 评分类目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub score_ratio: i32,
    pub has_score_cap: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::items::Entity")]
    Items,
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_category(self) -> crate::models::categories::entities::Category {
        use crate::models::categories::entities::Category;
        use chrono::{DateTime, Utc};

        Category {
            id: self.id,
            name: self.name,
            description: self.description,
            score_ratio: self.score_ratio,
            has_score_cap: self.has_score_cap,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    /// 聚合引擎使用的类目规则视图
    pub fn as_rule(&self) -> crate::scoring::CategoryRule {
        crate::scoring::CategoryRule {
            category_id: self.id,
            name: self.name.clone(),
            score_ratio: self.score_ratio,
            has_score_cap: self.has_score_cap,
        }
    }
}

//! 批次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_batch(self) -> crate::models::batches::entities::Batch {
        use crate::models::batches::entities::{Batch, BatchStatus};
        use chrono::{DateTime, NaiveDate, Utc};

        Batch {
            id: self.id,
            name: self.name,
            description: self.description,
            start_date: NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
                .unwrap_or_default(),
            end_date: NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").unwrap_or_default(),
            status: self.status.parse::<BatchStatus>().unwrap_or(BatchStatus::Closed),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

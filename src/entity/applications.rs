//! 申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub batch_id: i64,
    pub status: String,
    pub total_score: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_comment: Option<String>,
    pub reviewer_id: Option<i64>,
    pub reviewed_at: Option<i64>,
    pub submitted_at: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::batches::Entity",
        from = "Column::BatchId",
        to = "super::batches::Column::Id"
    )]
    Batch,
    #[sea_orm(has_many = "super::application_materials::Entity")]
    Materials,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::application_materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Materials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_application(self) -> crate::models::applications::entities::Application {
        use crate::models::applications::entities::{Application, ApplicationStatus};
        use chrono::{DateTime, Utc};

        Application {
            id: self.id,
            user_id: self.user_id,
            batch_id: self.batch_id,
            status: self
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or(ApplicationStatus::Pending),
            total_score: self.total_score,
            review_comment: self.review_comment,
            reviewer_id: self.reviewer_id,
            reviewed_at: self
                .reviewed_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

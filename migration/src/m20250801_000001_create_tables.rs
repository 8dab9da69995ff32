use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::RealName).string().null())
                    .col(ColumnDef::new(Users::StudentNo).string().null())
                    .col(ColumnDef::new(Users::ClassName).string().null())
                    .col(ColumnDef::new(Users::Major).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建批次表
        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Batches::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Batches::Name).string().not_null())
                    .col(ColumnDef::new(Batches::Description).text().null())
                    .col(ColumnDef::new(Batches::StartDate).string().not_null())
                    .col(ColumnDef::new(Batches::EndDate).string().not_null())
                    .col(ColumnDef::new(Batches::Status).string().not_null())
                    .col(ColumnDef::new(Batches::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Batches::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建类目表
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Description).text().null())
                    .col(ColumnDef::new(Categories::ScoreRatio).integer().not_null())
                    .col(
                        ColumnDef::new(Categories::HasScoreCap)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建奖项表
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Items::Name).string().not_null())
                    .col(ColumnDef::new(Items::Description).text().null())
                    .col(ColumnDef::new(Items::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Items::Table, Items::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评分表
        manager
            .create_table(
                Table::create()
                    .table(ItemScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemScores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ItemScores::ItemId).big_integer().not_null())
                    .col(ColumnDef::new(ItemScores::Level).string().not_null())
                    .col(ColumnDef::new(ItemScores::Grade).string().not_null())
                    .col(
                        ColumnDef::new(ItemScores::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ItemScores::GradeLabel).string().null())
                    .col(
                        ColumnDef::new(ItemScores::DefaultAwardType)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ItemScores::Table, ItemScores::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 评分表 (item_id, level, grade) 唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_item_scores_cell")
                    .table(ItemScores::Table)
                    .col(ItemScores::ItemId)
                    .col(ItemScores::Level)
                    .col(ItemScores::Grade)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建申请表
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Applications::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::BatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::Status).string().not_null())
                    .col(
                        ColumnDef::new(Applications::TotalScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Applications::ReviewComment).text().null())
                    .col(
                        ColumnDef::new(Applications::ReviewerId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Applications::ReviewedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Applications::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Applications::Table, Applications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Applications::Table, Applications::BatchId)
                            .to(Batches::Table, Batches::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 一个学生在一个批次内至多一份申请；同键并发保存靠它串行化
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_user_batch")
                    .table(Applications::Table)
                    .col(Applications::UserId)
                    .col(Applications::BatchId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建申请材料表
        manager
            .create_table(
                Table::create()
                    .table(ApplicationMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApplicationMaterials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::ApplicationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::ItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::AwardLevel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::AwardGrade)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::AwardType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::RawScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationMaterials::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ApplicationMaterials::Table,
                                ApplicationMaterials::ApplicationId,
                            )
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApplicationMaterials::Table, ApplicationMaterials::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApplicationMaterials::Table, ApplicationMaterials::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 材料自然键：一个申请内同一奖项只能申报一次
        manager
            .create_index(
                Index::create()
                    .name("idx_materials_natural_key")
                    .table(ApplicationMaterials::Table)
                    .col(ApplicationMaterials::ApplicationId)
                    .col(ApplicationMaterials::CategoryId)
                    .col(ApplicationMaterials::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建附件表
        manager
            .create_table(
                Table::create()
                    .table(UploadedFiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UploadedFiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UploadedFiles::MaterialId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UploadedFiles::OriginalName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UploadedFiles::StoredName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UploadedFiles::StoredPath)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UploadedFiles::FileSize)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UploadedFiles::MimeType).string().not_null())
                    .col(
                        ColumnDef::new(UploadedFiles::UploadedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UploadedFiles::Table, UploadedFiles::MaterialId)
                            .to(ApplicationMaterials::Table, ApplicationMaterials::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UploadedFiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ApplicationMaterials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ItemScores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    RealName,
    StudentNo,
    ClassName,
    Major,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Batches {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
    ScoreRatio,
    HasScoreCap,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    CategoryId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ItemScores {
    Table,
    Id,
    ItemId,
    Level,
    Grade,
    Score,
    GradeLabel,
    DefaultAwardType,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    UserId,
    BatchId,
    Status,
    TotalScore,
    ReviewComment,
    ReviewerId,
    ReviewedAt,
    SubmittedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ApplicationMaterials {
    Table,
    Id,
    ApplicationId,
    CategoryId,
    ItemId,
    AwardLevel,
    AwardGrade,
    AwardType,
    RawScore,
    Score,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UploadedFiles {
    Table,
    Id,
    MaterialId,
    OriginalName,
    StoredName,
    StoredPath,
    FileSize,
    MimeType,
    UploadedAt,
}

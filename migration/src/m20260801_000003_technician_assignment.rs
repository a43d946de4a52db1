use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechnicianAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(TechnicianAssignment::Id))
                    .col(string(TechnicianAssignment::FirstName))
                    .col(string(TechnicianAssignment::LastName))
                    .col(string(TechnicianAssignment::Contact))
                    .col(string_uniq(TechnicianAssignment::Email))
                    .col(timestamp(TechnicianAssignment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(TechnicianAssignment::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TechnicianAssignment {
    Table,
    Id,
    FirstName,
    LastName,
    Contact,
    Email,
    CreatedAt,
}

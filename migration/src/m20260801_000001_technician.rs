use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technician::Table)
                    .if_not_exists()
                    .col(pk_auto(Technician::Id))
                    .col(string(Technician::Name))
                    .col(string_uniq(Technician::Email))
                    .col(string(Technician::PasswordHash))
                    .col(string_null(Technician::Phone))
                    .col(timestamp(Technician::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Technician::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Technician {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    CreatedAt,
}

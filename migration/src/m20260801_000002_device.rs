use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(pk_auto(Device::Id))
                    .col(string_uniq(Device::SerialNumber))
                    .col(string(Device::DeviceType))
                    .col(string_null(Device::Brand))
                    .col(string(Device::Model))
                    .col(string(Device::Location))
                    .col(string(Device::Os))
                    .col(date(Device::DateIssued))
                    .col(timestamp(Device::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Device::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Device {
    Table,
    Id,
    SerialNumber,
    DeviceType,
    Brand,
    Model,
    Location,
    Os,
    DateIssued,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000004_ticket::Ticket;

static FK_PART_USAGE_TICKET_ID: &str = "fk_part_usage_ticket_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartUsage::Table)
                    .if_not_exists()
                    .col(pk_auto(PartUsage::Id))
                    .col(integer(PartUsage::TicketId))
                    .col(string(PartUsage::PartName))
                    .col(integer(PartUsage::Quantity))
                    .col(decimal_len(PartUsage::UnitCost, 10, 2))
                    .col(date(PartUsage::UsedOn))
                    .col(timestamp(PartUsage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PART_USAGE_TICKET_ID)
                    .from_tbl(PartUsage::Table)
                    .from_col(PartUsage::TicketId)
                    .to_tbl(Ticket::Table)
                    .to_col(Ticket::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PART_USAGE_TICKET_ID)
                    .table(PartUsage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartUsage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PartUsage {
    Table,
    Id,
    TicketId,
    PartName,
    Quantity,
    UnitCost,
    UsedOn,
    CreatedAt,
}

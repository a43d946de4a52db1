use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000002_device::Device,
    m20260801_000003_technician_assignment::TechnicianAssignment,
};

static FK_TICKET_DEVICE_ID: &str = "fk_ticket_device_id";
static FK_TICKET_ASSIGNMENT_ID: &str = "fk_ticket_assignment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::DeviceId))
                    .col(integer(Ticket::AssignmentId))
                    .col(string(Ticket::ReportedBy))
                    .col(text(Ticket::IssueDescription))
                    .col(string_len(Ticket::Status, 16).default("pending").take())
                    .col(date(Ticket::OpenedOn))
                    .col(timestamp(Ticket::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_DEVICE_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::DeviceId)
                    .to_tbl(Device::Table)
                    .to_col(Device::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_ASSIGNMENT_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::AssignmentId)
                    .to_tbl(TechnicianAssignment::Table)
                    .to_col(TechnicianAssignment::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_DEVICE_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_ASSIGNMENT_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    DeviceId,
    AssignmentId,
    ReportedBy,
    IssueDescription,
    Status,
    OpenedOn,
    CreatedAt,
}

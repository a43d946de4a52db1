use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000004_ticket::Ticket;

static FK_SERVICE_FEEDBACK_TICKET_ID: &str = "fk_service_feedback_ticket_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceFeedback::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceFeedback::Id))
                    // One feedback row per ticket; resubmission updates in place.
                    .col(integer_uniq(ServiceFeedback::TicketId))
                    .col(text(ServiceFeedback::Comment))
                    .col(string_null(ServiceFeedback::Remark))
                    .col(string(ServiceFeedback::StatusLabel))
                    .col(date(ServiceFeedback::DateSolved))
                    .col(timestamp(ServiceFeedback::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SERVICE_FEEDBACK_TICKET_ID)
                    .from_tbl(ServiceFeedback::Table)
                    .from_col(ServiceFeedback::TicketId)
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
                    .name(FK_SERVICE_FEEDBACK_TICKET_ID)
                    .table(ServiceFeedback::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ServiceFeedback::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ServiceFeedback {
    Table,
    Id,
    TicketId,
    Comment,
    Remark,
    StatusLabel,
    DateSolved,
    CreatedAt,
}

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

pub struct FeedbackRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedbackRepository<'a, C> {
    /// Creates a new instance of [`FeedbackRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the feedback row for a ticket, or updates it in place when one
    /// already exists. Keyed by the ticket-id uniqueness constraint, so a
    /// ticket can never accumulate a second feedback row.
    pub async fn upsert_by_ticket_id(
        &self,
        ticket_id: i32,
        comment: String,
        remark: Option<String>,
        status_label: String,
        date_solved: NaiveDate,
    ) -> Result<entity::service_feedback::Model, DbErr> {
        let feedback = entity::service_feedback::ActiveModel {
            ticket_id: ActiveValue::Set(ticket_id),
            comment: ActiveValue::Set(comment),
            remark: ActiveValue::Set(remark),
            status_label: ActiveValue::Set(status_label),
            date_solved: ActiveValue::Set(date_solved),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::ServiceFeedback::insert(feedback)
            .on_conflict(
                OnConflict::column(entity::service_feedback::Column::TicketId)
                    .update_columns([
                        entity::service_feedback::Column::Comment,
                        entity::service_feedback::Column::Remark,
                        entity::service_feedback::Column::StatusLabel,
                        entity::service_feedback::Column::DateSolved,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_ticket_id(
        &self,
        ticket_id: i32,
    ) -> Result<Option<entity::service_feedback::Model>, DbErr> {
        entity::prelude::ServiceFeedback::find()
            .filter(entity::service_feedback::Column::TicketId.eq(ticket_id))
            .one(self.db)
            .await
    }
}

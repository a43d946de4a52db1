use chrono::{NaiveDate, Utc};
use entity::ticket::TicketStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct TicketRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a ticket in the `Pending` state
    pub async fn create(
        &self,
        device_id: i32,
        assignment_id: i32,
        reported_by: String,
        issue_description: String,
        opened_on: NaiveDate,
    ) -> Result<entity::ticket::Model, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            device_id: ActiveValue::Set(device_id),
            assignment_id: ActiveValue::Set(assignment_id),
            reported_by: ActiveValue::Set(reported_by),
            issue_description: ActiveValue::Set(issue_description),
            status: ActiveValue::Set(TicketStatus::Pending),
            opened_on: ActiveValue::Set(opened_on),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        ticket.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find_by_id(id).one(self.db).await
    }

    /// Writes the stored status. The single pending-to-completed transition
    /// lives in the workflow service; nothing else may call this.
    pub async fn set_status(
        &self,
        ticket: entity::ticket::Model,
        status: TicketStatus,
    ) -> Result<entity::ticket::Model, DbErr> {
        let mut ticket: entity::ticket::ActiveModel = ticket.into();
        ticket.status = ActiveValue::Set(status);

        ticket.update(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: TicketStatus) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Most recent tickets first, optionally filtered by status, each paired
    /// with its device.
    pub async fn list_recent(
        &self,
        status: Option<TicketStatus>,
        limit: u64,
    ) -> Result<Vec<(entity::ticket::Model, Option<entity::device::Model>)>, DbErr> {
        let mut query =
            entity::prelude::Ticket::find().find_also_related(entity::prelude::Device);

        if let Some(status) = status {
            query = query.filter(entity::ticket::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::ticket::Column::OpenedOn)
            .order_by_desc(entity::ticket::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Most recent tickets for one assignment, each paired with its device.
    pub async fn list_by_assignment(
        &self,
        assignment_id: i32,
        limit: u64,
    ) -> Result<Vec<(entity::ticket::Model, Option<entity::device::Model>)>, DbErr> {
        entity::prelude::Ticket::find()
            .find_also_related(entity::prelude::Device)
            .filter(entity::ticket::Column::AssignmentId.eq(assignment_id))
            .order_by_desc(entity::ticket::Column::OpenedOn)
            .order_by_desc(entity::ticket::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}

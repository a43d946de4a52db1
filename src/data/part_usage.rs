use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct PartUsageRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartUsageRepository<'a, C> {
    /// Creates a new instance of [`PartUsageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one ledger entry. Entries are never updated or deleted.
    pub async fn create(
        &self,
        ticket_id: i32,
        part_name: String,
        quantity: i32,
        unit_cost: Decimal,
        used_on: NaiveDate,
    ) -> Result<entity::part_usage::Model, DbErr> {
        let usage = entity::part_usage::ActiveModel {
            ticket_id: ActiveValue::Set(ticket_id),
            part_name: ActiveValue::Set(part_name),
            quantity: ActiveValue::Set(quantity),
            unit_cost: ActiveValue::Set(unit_cost),
            used_on: ActiveValue::Set(used_on),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        usage.insert(self.db).await
    }

    /// A ticket's ledger entries, most recent first.
    pub async fn list_by_ticket_id(
        &self,
        ticket_id: i32,
    ) -> Result<Vec<entity::part_usage::Model>, DbErr> {
        entity::prelude::PartUsage::find()
            .filter(entity::part_usage::Column::TicketId.eq(ticket_id))
            .order_by_desc(entity::part_usage::Column::UsedOn)
            .order_by_desc(entity::part_usage::Column::Id)
            .all(self.db)
            .await
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

pub struct AssignmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    /// Creates a new instance of [`AssignmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes the assignment row for an email.
    ///
    /// Keyed by the email uniqueness constraint, so concurrent calls for the
    /// same email converge on one row. Name and contact are refreshed on
    /// conflict; `created_at` keeps its original value.
    pub async fn upsert_by_email(
        &self,
        first_name: String,
        last_name: String,
        contact: String,
        email: String,
    ) -> Result<entity::technician_assignment::Model, DbErr> {
        let assignment = entity::technician_assignment::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            contact: ActiveValue::Set(contact),
            email: ActiveValue::Set(email),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::TechnicianAssignment::insert(assignment)
            .on_conflict(
                OnConflict::column(entity::technician_assignment::Column::Email)
                    .update_columns([
                        entity::technician_assignment::Column::FirstName,
                        entity::technician_assignment::Column::LastName,
                        entity::technician_assignment::Column::Contact,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::technician_assignment::Model>, DbErr> {
        entity::prelude::TechnicianAssignment::find()
            .filter(entity::technician_assignment::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::technician_assignment::Model>, DbErr> {
        entity::prelude::TechnicianAssignment::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::technician_assignment::Model>, DbErr> {
        entity::prelude::TechnicianAssignment::find()
            .filter(entity::technician_assignment::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}

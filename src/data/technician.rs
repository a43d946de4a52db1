use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct TechnicianRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TechnicianRepository<'a, C> {
    /// Creates a new instance of [`TechnicianRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new technician account
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        phone: Option<String>,
    ) -> Result<entity::technician::Model, DbErr> {
        let technician = entity::technician::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            phone: ActiveValue::Set(phone),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        technician.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::technician::Model>, DbErr> {
        entity::prelude::Technician::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::technician::Model>, DbErr> {
        entity::prelude::Technician::find()
            .filter(entity::technician::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

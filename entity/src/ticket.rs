use sea_orm::entity::prelude::*;

/// Repair ticket. Status is an explicit stored field written by exactly one
/// transition (feedback submission); readers must not re-derive it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub device_id: i32,
    pub assignment_id: i32,
    pub reported_by: String,
    #[sea_orm(column_type = "Text")]
    pub issue_description: String,
    pub status: TicketStatus,
    pub opened_on: Date,
    pub created_at: DateTime,
}

/// Lifecycle of a ticket. `Pending` covers both intake and parts recording;
/// `Completed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TicketStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::device::Entity",
        from = "Column::DeviceId",
        to = "super::device::Column::Id"
    )]
    Device,
    #[sea_orm(
        belongs_to = "super::technician_assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::technician_assignment::Column::Id"
    )]
    TechnicianAssignment,
    #[sea_orm(has_many = "super::part_usage::Entity")]
    PartUsage,
    #[sea_orm(has_one = "super::service_feedback::Entity")]
    ServiceFeedback,
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Device.def()
    }
}

impl Related<super::technician_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechnicianAssignment.def()
    }
}

impl Related<super::part_usage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartUsage.def()
    }
}

impl Related<super::service_feedback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceFeedback.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub use sea_orm_migration::prelude::*;

mod m20260801_000001_technician;
mod m20260801_000002_device;
mod m20260801_000003_technician_assignment;
mod m20260801_000004_ticket;
mod m20260801_000005_part_usage;
mod m20260801_000006_service_feedback;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_technician::Migration),
            Box::new(m20260801_000002_device::Migration),
            Box::new(m20260801_000003_technician_assignment::Migration),
            Box::new(m20260801_000004_ticket::Migration),
            Box::new(m20260801_000005_part_usage::Migration),
            Box::new(m20260801_000006_service_feedback::Migration),
        ]
    }
}

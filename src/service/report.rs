//! Reporting and listing projections.
//!
//! Pure read side: every count and listing consumes the stored ticket status
//! the workflow engine writes, so the dashboard, the ticket list, and the
//! workflow itself can never disagree on what "completed" means.

use std::collections::HashMap;

use entity::ticket::TicketStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{assignment::AssignmentRepository, ticket::TicketRepository},
    error::Error,
    model::report::{DashboardDto, TicketCountsDto, TicketFilter, TicketSummaryDto},
};

/// Listing size when the caller does not ask for one.
pub const DEFAULT_LIST_LIMIT: u64 = 10;

fn filter_to_status(filter: TicketFilter) -> Option<TicketStatus> {
    match filter {
        TicketFilter::All => None,
        TicketFilter::Pending => Some(TicketStatus::Pending),
        TicketFilter::Completed => Some(TicketStatus::Completed),
    }
}

/// Service for read-side ticket projections.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ticket counts by status.
    pub async fn counts(&self) -> Result<TicketCountsDto, Error> {
        let ticket_repo = TicketRepository::new(self.db);

        let total = ticket_repo.count_all().await?;
        let pending = ticket_repo.count_by_status(TicketStatus::Pending).await?;
        let completed = ticket_repo.count_by_status(TicketStatus::Completed).await?;

        Ok(TicketCountsDto {
            total,
            pending,
            completed,
        })
    }

    /// Most recent tickets first, optionally filtered by status.
    pub async fn list_recent(
        &self,
        filter: TicketFilter,
        limit: u64,
    ) -> Result<Vec<TicketSummaryDto>, Error> {
        let rows = TicketRepository::new(self.db)
            .list_recent(filter_to_status(filter), limit)
            .await?;

        self.summarize(rows).await
    }

    /// Most recent tickets handled by one technician, resolved through their
    /// assignment record. A technician who has never opened a ticket has no
    /// assignment and gets an empty list.
    pub async fn list_assigned(
        &self,
        email: &str,
        limit: u64,
    ) -> Result<Vec<TicketSummaryDto>, Error> {
        let Some(assignment) = AssignmentRepository::new(self.db).get_by_email(email).await?
        else {
            return Ok(Vec::new());
        };

        let rows = TicketRepository::new(self.db)
            .list_by_assignment(assignment.id, limit)
            .await?;

        self.summarize(rows).await
    }

    /// Dashboard payload: counts, the latest tickets, and the tickets
    /// assigned to the given technician email.
    pub async fn dashboard(&self, technician_email: &str) -> Result<DashboardDto, Error> {
        let counts = self.counts().await?;
        let recent = self
            .list_recent(TicketFilter::All, DEFAULT_LIST_LIMIT)
            .await?;
        let assigned = self
            .list_assigned(technician_email, DEFAULT_LIST_LIMIT)
            .await?;

        Ok(DashboardDto {
            counts,
            recent,
            assigned,
        })
    }

    async fn summarize(
        &self,
        rows: Vec<(entity::ticket::Model, Option<entity::device::Model>)>,
    ) -> Result<Vec<TicketSummaryDto>, Error> {
        let mut assignment_ids: Vec<i32> = rows.iter().map(|(ticket, _)| ticket.assignment_id).collect();
        assignment_ids.sort_unstable();
        assignment_ids.dedup();

        let assignments = AssignmentRepository::new(self.db)
            .get_by_ids(assignment_ids)
            .await?;

        let technician_names: HashMap<i32, String> = assignments
            .into_iter()
            .map(|assignment| {
                let name = format!("{} {}", assignment.first_name, assignment.last_name)
                    .trim()
                    .to_string();
                (assignment.id, name)
            })
            .collect();

        Ok(rows
            .into_iter()
            .map(|(ticket, device)| TicketSummaryDto {
                id: ticket.id,
                serial_number: device.as_ref().map(|d| d.serial_number.clone()),
                model: device.as_ref().map(|d| d.model.clone()),
                location: device.map(|d| d.location),
                reported_by: ticket.reported_by,
                technician: technician_names.get(&ticket.assignment_id).cloned(),
                status: ticket.status.into(),
                opened_on: ticket.opened_on,
            })
            .collect())
    }
}

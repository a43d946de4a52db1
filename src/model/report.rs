//! Reporting and listing models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ticket::TicketStatusDto;

/// Status filter for ticket listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketFilter {
    /// Every ticket regardless of status.
    #[default]
    All,
    /// Tickets without feedback.
    Pending,
    /// Tickets closed by feedback.
    Completed,
}

/// Query parameters for the recent-tickets listing.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct RecentTicketsQuery {
    /// Status filter; defaults to `all`.
    pub filter: Option<TicketFilter>,
    /// Maximum number of tickets to return; defaults to 10.
    pub limit: Option<u64>,
}

/// Ticket counts by status.
#[derive(Clone, Copy, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketCountsDto {
    /// All tickets ever opened.
    pub total: u64,
    /// Tickets without feedback.
    pub pending: u64,
    /// Tickets closed by feedback.
    pub completed: u64,
}

/// One row of a ticket listing, joined with device and assignment data.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketSummaryDto {
    /// Database id of the ticket.
    pub id: i32,
    /// Serial number of the ticket's device, when the join found one.
    pub serial_number: Option<String>,
    /// Model of the ticket's device.
    pub model: Option<String>,
    /// Location of the ticket's device.
    pub location: Option<String>,
    /// Name of the person who reported the issue.
    pub reported_by: String,
    /// Handling technician's display name.
    pub technician: Option<String>,
    /// Current lifecycle status.
    pub status: TicketStatusDto,
    /// Date the ticket was opened.
    pub opened_on: NaiveDate,
}

/// Recent-tickets listing with counts.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketListDto {
    /// Matching tickets, most recent first.
    pub tickets: Vec<TicketSummaryDto>,
    /// Counts over all tickets (not just the returned page).
    pub counts: TicketCountsDto,
}

/// Dashboard payload: counts, the latest tickets, and the session
/// technician's own assigned tickets.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardDto {
    /// Counts over all tickets.
    pub counts: TicketCountsDto,
    /// Latest tickets across all technicians.
    pub recent: Vec<TicketSummaryDto>,
    /// Latest tickets assigned to the session technician.
    pub assigned: Vec<TicketSummaryDto>,
}

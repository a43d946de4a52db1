//! Ticket workflow request and response models.

use chrono::NaiveDate;
use entity::ticket::TicketStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::device::DeviceDto;

/// Ticket lifecycle status as exposed over the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatusDto {
    /// Awaiting parts recording and/or feedback.
    Pending,
    /// Feedback has been submitted; terminal.
    Completed,
}

impl From<TicketStatus> for TicketStatusDto {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Pending => Self::Pending,
            TicketStatus::Completed => Self::Completed,
        }
    }
}

/// A repair ticket.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketDto {
    /// Database id of the ticket.
    pub id: i32,
    /// Device the ticket was opened for.
    pub device_id: i32,
    /// Technician assignment handling the ticket.
    pub assignment_id: i32,
    /// Name of the person who reported the issue.
    pub reported_by: String,
    /// Free-text issue description.
    pub issue_description: String,
    /// Current lifecycle status.
    pub status: TicketStatusDto,
    /// Date the ticket was opened.
    pub opened_on: NaiveDate,
}

impl From<entity::ticket::Model> for TicketDto {
    fn from(ticket: entity::ticket::Model) -> Self {
        Self {
            id: ticket.id,
            device_id: ticket.device_id,
            assignment_id: ticket.assignment_id,
            reported_by: ticket.reported_by,
            issue_description: ticket.issue_description,
            status: ticket.status.into(),
            opened_on: ticket.opened_on,
        }
    }
}

/// Technician assignment attached to a ticket.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignmentDto {
    /// Database id of the assignment.
    pub id: i32,
    /// Technician first name.
    pub first_name: String,
    /// Technician last name.
    pub last_name: String,
    /// Contact phone number; empty when the technician has none on file.
    pub contact: String,
    /// Technician email; unique per assignment.
    pub email: String,
}

impl From<entity::technician_assignment::Model> for AssignmentDto {
    fn from(assignment: entity::technician_assignment::Model) -> Self {
        Self {
            id: assignment.id,
            first_name: assignment.first_name,
            last_name: assignment.last_name,
            contact: assignment.contact,
            email: assignment.email,
        }
    }
}

/// One parts-ledger entry.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PartUsageDto {
    /// Database id of the ledger entry.
    pub id: i32,
    /// Part name, e.g. "PSU".
    pub part_name: String,
    /// Units consumed; always positive.
    pub quantity: i32,
    /// Cost per unit.
    pub unit_cost: Decimal,
    /// Date the part was recorded.
    pub used_on: NaiveDate,
}

impl From<entity::part_usage::Model> for PartUsageDto {
    fn from(usage: entity::part_usage::Model) -> Self {
        Self {
            id: usage.id,
            part_name: usage.part_name,
            quantity: usage.quantity,
            unit_cost: usage.unit_cost,
            used_on: usage.used_on,
        }
    }
}

/// A ticket's parts ledger: entries most recent first, plus the running total.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PartsLedgerDto {
    /// Ledger entries, most recent first.
    pub entries: Vec<PartUsageDto>,
    /// Sum of quantity times unit cost over all entries.
    pub total_cost: Decimal,
}

/// Post-service feedback attached to a ticket.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FeedbackDto {
    /// Database id of the feedback row.
    pub id: i32,
    /// Ticket the feedback closes.
    pub ticket_id: i32,
    /// Free-text comment on the work performed.
    pub comment: String,
    /// Optional remark.
    pub remark: Option<String>,
    /// Outcome label, e.g. "Fixed".
    pub status_label: String,
    /// Date the issue was solved.
    pub date_solved: NaiveDate,
}

impl From<entity::service_feedback::Model> for FeedbackDto {
    fn from(feedback: entity::service_feedback::Model) -> Self {
        Self {
            id: feedback.id,
            ticket_id: feedback.ticket_id,
            comment: feedback.comment,
            remark: feedback.remark,
            status_label: feedback.status_label,
            date_solved: feedback.date_solved,
        }
    }
}

/// Full ticket view: the ticket plus its device, assignment, parts ledger,
/// and feedback when present.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketDetailDto {
    /// The ticket itself.
    pub ticket: TicketDto,
    /// Device the ticket was opened for.
    pub device: DeviceDto,
    /// Technician assignment handling the ticket.
    pub technician: AssignmentDto,
    /// Parts ledger with total.
    pub parts: PartsLedgerDto,
    /// Feedback, present once the ticket is completed.
    pub feedback: Option<FeedbackDto>,
}

/// Ticket creation payload.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateTicketDto {
    /// Device the issue was reported for.
    pub device_id: i32,
    /// Name of the person reporting the issue.
    pub reported_by: String,
    /// Free-text issue description.
    pub issue_description: String,
}

/// Parts-recording payload.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct RecordPartUsageDto {
    /// Part name.
    pub part_name: String,
    /// Units consumed; must be greater than zero.
    pub quantity: i32,
    /// Cost per unit; must not be negative.
    pub unit_cost: Decimal,
}

/// Feedback submission payload.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct SubmitFeedbackDto {
    /// Free-text comment on the work performed.
    pub comment: String,
    /// Optional remark.
    pub remark: Option<String>,
    /// Outcome label, e.g. "Fixed".
    pub status_label: String,
    /// Date the issue was solved; defaults to today when omitted.
    pub date_solved: Option<NaiveDate>,
}

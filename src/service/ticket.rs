//! Ticket workflow engine.
//!
//! A ticket moves through exactly one transition: it is created `Pending`
//! (covering intake and parts recording, which are operationally the same
//! state) and becomes `Completed` when feedback is submitted. Feedback
//! submission is the only code path that writes the status column; every
//! projection reads the column instead of re-deriving completion.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        assignment::AssignmentRepository, device::DeviceRepository,
        feedback::FeedbackRepository, part_usage::PartUsageRepository,
        technician::TechnicianRepository, ticket::TicketRepository,
    },
    error::{auth::AuthError, registry::RegistryError, workflow::WorkflowError, Error},
    model::ticket::{
        AssignmentDto, CreateTicketDto, FeedbackDto, PartUsageDto, PartsLedgerDto,
        RecordPartUsageDto, SubmitFeedbackDto, TicketDetailDto, TicketDto,
    },
};

/// Sum of quantity times unit cost over a set of ledger entries.
fn total_cost(entries: &[entity::part_usage::Model]) -> Decimal {
    entries
        .iter()
        .map(|entry| Decimal::from(entry.quantity) * entry.unit_cost)
        .sum()
}

/// Service for the ticket workflow.
pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    /// Creates a new instance of [`TicketService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a ticket for a device on behalf of the session technician.
    ///
    /// Resolves or lazily creates the technician's assignment record, keyed
    /// by email: the first ticket a technician opens creates the row, later
    /// tickets reuse it. The upsert and the ticket insert share one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(TicketDto)` - Ticket created in the `Pending` state
    /// - `Err(Error::WorkflowError(WorkflowError::MissingField))` - Empty reporter or description
    /// - `Err(Error::RegistryError(RegistryError::DeviceNotFound))` - Unknown device
    /// - `Err(Error::AuthError(AuthError::TechnicianNotInDatabase))` - Session technician vanished
    pub async fn create_ticket(
        &self,
        technician_id: i32,
        ticket: CreateTicketDto,
    ) -> Result<TicketDto, Error> {
        let reported_by = ticket.reported_by.trim().to_string();
        let issue_description = ticket.issue_description.trim().to_string();

        if reported_by.is_empty() {
            return Err(WorkflowError::MissingField("reported_by").into());
        }
        if issue_description.is_empty() {
            return Err(WorkflowError::MissingField("issue_description").into());
        }

        let Some(technician) = TechnicianRepository::new(self.db)
            .get_by_id(technician_id)
            .await?
        else {
            return Err(AuthError::TechnicianNotInDatabase(technician_id).into());
        };

        if DeviceRepository::new(self.db)
            .get_by_id(ticket.device_id)
            .await?
            .is_none()
        {
            return Err(RegistryError::DeviceNotFound(ticket.device_id).into());
        }

        let mut name_parts = technician.name.splitn(2, ' ');
        let first_name = name_parts.next().unwrap_or_default().to_string();
        let last_name = name_parts.next().unwrap_or_default().to_string();
        let contact = technician.phone.unwrap_or_default();

        let txn = self.db.begin().await?;

        let assignment = AssignmentRepository::new(&txn)
            .upsert_by_email(first_name, last_name, contact, technician.email)
            .await?;

        let created = TicketRepository::new(&txn)
            .create(
                ticket.device_id,
                assignment.id,
                reported_by,
                issue_description,
                Utc::now().date_naive(),
            )
            .await?;

        txn.commit().await?;

        Ok(TicketDto::from(created))
    }

    /// Appends one parts-ledger entry. The ticket stays `Pending`.
    ///
    /// # Returns
    /// - `Ok(PartUsageDto)` - Entry recorded
    /// - `Err(Error::WorkflowError(WorkflowError::MissingField))` - Empty part name
    /// - `Err(Error::WorkflowError(WorkflowError::InvalidQuantity))` - Quantity not positive
    /// - `Err(Error::WorkflowError(WorkflowError::NegativeUnitCost))` - Negative unit cost
    /// - `Err(Error::WorkflowError(WorkflowError::TicketNotFound))` - Unknown ticket
    pub async fn record_part_usage(
        &self,
        ticket_id: i32,
        usage: RecordPartUsageDto,
    ) -> Result<PartUsageDto, Error> {
        let part_name = usage.part_name.trim().to_string();

        if part_name.is_empty() {
            return Err(WorkflowError::MissingField("part_name").into());
        }
        if usage.quantity <= 0 {
            return Err(WorkflowError::InvalidQuantity(usage.quantity).into());
        }
        if usage.unit_cost < Decimal::ZERO {
            return Err(WorkflowError::NegativeUnitCost(usage.unit_cost).into());
        }

        self.get_ticket_model(ticket_id).await?;

        let created = PartUsageRepository::new(self.db)
            .create(
                ticket_id,
                part_name,
                usage.quantity,
                usage.unit_cost,
                Utc::now().date_naive(),
            )
            .await?;

        Ok(PartUsageDto::from(created))
    }

    /// Navigation signal moving the client from parts recording to the
    /// feedback step; also covers "no parts needed", which is the same signal
    /// with an empty ledger. Performs no write: completion comes only from
    /// feedback submission.
    pub async fn finish_parts_recording(&self, ticket_id: i32) -> Result<TicketDto, Error> {
        let ticket = self.get_ticket_model(ticket_id).await?;

        Ok(TicketDto::from(ticket))
    }

    /// Submits (or resubmits) feedback, completing the ticket.
    ///
    /// The feedback row is keyed one-to-one by ticket id: a resubmission
    /// updates it in place, never inserts a second row, and tickets sharing a
    /// technician complete independently. The upsert and the status flip
    /// share one transaction.
    ///
    /// # Returns
    /// - `Ok(FeedbackDto)` - Feedback stored, ticket `Completed`
    /// - `Err(Error::WorkflowError(WorkflowError::MissingField))` - Empty comment or status label
    /// - `Err(Error::WorkflowError(WorkflowError::TicketNotFound))` - Unknown ticket
    pub async fn submit_feedback(
        &self,
        ticket_id: i32,
        feedback: SubmitFeedbackDto,
    ) -> Result<FeedbackDto, Error> {
        let comment = feedback.comment.trim().to_string();
        let status_label = feedback.status_label.trim().to_string();

        if comment.is_empty() {
            return Err(WorkflowError::MissingField("comment").into());
        }
        if status_label.is_empty() {
            return Err(WorkflowError::MissingField("status_label").into());
        }

        let ticket = self.get_ticket_model(ticket_id).await?;

        let remark = feedback
            .remark
            .map(|remark| remark.trim().to_string())
            .filter(|remark| !remark.is_empty());
        let date_solved = feedback
            .date_solved
            .unwrap_or_else(|| Utc::now().date_naive());

        let txn = self.db.begin().await?;

        let stored = FeedbackRepository::new(&txn)
            .upsert_by_ticket_id(ticket_id, comment, remark, status_label, date_solved)
            .await?;

        TicketRepository::new(&txn)
            .set_status(ticket, entity::ticket::TicketStatus::Completed)
            .await?;

        txn.commit().await?;

        Ok(FeedbackDto::from(stored))
    }

    /// Full ticket view: device, assignment, parts ledger, and feedback when
    /// present.
    pub async fn get_ticket(&self, ticket_id: i32) -> Result<TicketDetailDto, Error> {
        let ticket = self.get_ticket_model(ticket_id).await?;

        let device = DeviceRepository::new(self.db)
            .get_by_id(ticket.device_id)
            .await?
            .ok_or_else(|| {
                // Would only occur if the foreign key constraint requiring the
                // device to exist is not enforced
                Error::InternalError(format!(
                    "Failed to find device ID {} for ticket ID {}",
                    ticket.device_id, ticket.id
                ))
            })?;

        let technician = AssignmentRepository::new(self.db)
            .get_by_id(ticket.assignment_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find assignment ID {} for ticket ID {}",
                    ticket.assignment_id, ticket.id
                ))
            })?;

        let parts = self.parts_ledger(ticket_id).await?;

        let feedback = FeedbackRepository::new(self.db)
            .get_by_ticket_id(ticket_id)
            .await?;

        Ok(TicketDetailDto {
            ticket: TicketDto::from(ticket),
            device: device.into(),
            technician: AssignmentDto::from(technician),
            parts,
            feedback: feedback.map(FeedbackDto::from),
        })
    }

    /// A ticket's parts ledger, most recent first, with the running total.
    /// Computed fresh per request; an empty ledger totals zero.
    pub async fn parts_ledger(&self, ticket_id: i32) -> Result<PartsLedgerDto, Error> {
        self.get_ticket_model(ticket_id).await?;

        let entries = PartUsageRepository::new(self.db)
            .list_by_ticket_id(ticket_id)
            .await?;

        let total = total_cost(&entries);

        Ok(PartsLedgerDto {
            entries: entries.into_iter().map(PartUsageDto::from).collect(),
            total_cost: total,
        })
    }

    async fn get_ticket_model(&self, ticket_id: i32) -> Result<entity::ticket::Model, Error> {
        TicketRepository::new(self.db)
            .get_by_id(ticket_id)
            .await?
            .ok_or_else(|| WorkflowError::TicketNotFound(ticket_id).into())
    }
}

pub use super::device::Entity as Device;
pub use super::part_usage::Entity as PartUsage;
pub use super::service_feedback::Entity as ServiceFeedback;
pub use super::technician::Entity as Technician;
pub use super::technician_assignment::Entity as TechnicianAssignment;
pub use super::ticket::Entity as Ticket;

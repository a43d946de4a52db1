//! Data access layer repositories.
//!
//! One repository per table, providing an abstraction over database
//! operations. Repositories borrow any sea-orm connection so services can
//! hand them either the pooled connection or an open transaction.

pub mod assignment;
pub mod device;
pub mod feedback;
pub mod part_usage;
pub mod technician;
pub mod ticket;

//! Business logic services.
//!
//! Services coordinate between repositories and enforce the workflow rules:
//! field validation, the lazy assignment upsert, the single
//! pending-to-completed transition, and the read-side projections.

pub mod auth;
pub mod device;
pub mod report;
pub mod ticket;

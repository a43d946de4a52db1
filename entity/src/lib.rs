pub mod device;
pub mod part_usage;
pub mod prelude;
pub mod service_feedback;
pub mod technician;
pub mod technician_assignment;
pub mod ticket;

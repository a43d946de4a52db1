mod auth;
mod device;
mod report;
mod ticket;

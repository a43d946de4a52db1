//! HTTP request handlers.
//!
//! Handlers parse the request, resolve the session identity where the page
//! requires a login, delegate to a service, and map the result to a JSON
//! response. All error mapping lives on the error types themselves.

pub mod auth;
pub mod device;
pub mod report;
pub mod ticket;
pub mod util;

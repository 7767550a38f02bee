//! Request handlers.
//!
//! Handlers validate the request body, delegate to the pure functions in
//! `galleria_core` and map errors via [`AppError`](crate::error::AppError).

pub mod exhibitions;
pub mod layouts;

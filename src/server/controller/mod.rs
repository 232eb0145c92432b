//! HTTP request handlers.
//!
//! Controllers convert request DTOs into params, call a service and convert the
//! resulting domain model back into a response DTO.

pub mod health;
pub mod param;
pub mod pokemon;
pub mod stats;
pub mod user;

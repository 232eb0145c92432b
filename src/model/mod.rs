//! Wire-level DTOs returned by the HTTP API.

pub mod api;
pub mod pokemon;
pub mod stats;
pub mod user;

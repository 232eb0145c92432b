//! SeaORM entities for the bot backend.

pub mod prelude;

pub mod pokemon_search;
pub mod user;

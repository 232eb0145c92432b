//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees database types. Each repository borrows the shared
//! connection pool for the duration of one request.

pub mod pokemon_search;
pub mod user;

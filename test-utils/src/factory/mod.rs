//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .telegram_id("987654321")
//!     .first_name("Ash")
//!     .build()
//!     .await?;
//!
//! let search = factory::pokemon_search::PokemonSearchFactory::new(&db)
//!     .pokemon_name("pikachu")
//!     .pokemon_id(Some(25))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod pokemon_search;
pub mod user;

pub use pokemon_search::create_search;
pub use user::create_user;

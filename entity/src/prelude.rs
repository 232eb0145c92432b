pub use super::pokemon_search::Entity as PokemonSearch;
pub use super::user::Entity as User;

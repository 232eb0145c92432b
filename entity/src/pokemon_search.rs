use sea_orm::entity::prelude::*;

/// Append-only log of Pokémon lookups.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon_searches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pokemon_name: String,
    pub pokemon_id: Option<i32>,
    pub found: bool,
    #[sea_orm(indexed)]
    pub searched_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

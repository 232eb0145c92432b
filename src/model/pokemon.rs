use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PokemonStatsDto {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(rename = "spAttack")]
    pub sp_attack: u32,
    #[serde(rename = "spDefense")]
    pub sp_defense: u32,
    pub speed: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PokemonDto {
    pub id: i32,
    pub name: String,
    /// Comma separated type names in upstream order.
    pub types: String,
    /// Comma separated ability names in upstream order.
    pub abilities: String,
    pub stats: PokemonStatsDto,
    /// Height in meters with one decimal digit.
    pub height: String,
    /// Weight in kilograms with one decimal digit.
    pub weight: String,
    /// Artwork URL, or an empty string when upstream has none.
    pub sprite: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PokemonResponseDto {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PokemonDto>,
}

use sea_orm::entity::prelude::*;

/// Chat platform user registered with the bot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub telegram_id: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub registered_at: DateTimeUtc,
    pub last_active: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

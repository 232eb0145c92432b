use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonSearch::Table)
                    .if_not_exists()
                    .col(pk_auto(PokemonSearch::Id))
                    .col(string(PokemonSearch::PokemonName))
                    .col(integer_null(PokemonSearch::PokemonId))
                    .col(boolean(PokemonSearch::Found))
                    .col(
                        timestamp_with_time_zone(PokemonSearch::SearchedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pokemon_searches_searched_at")
                    .table(PokemonSearch::Table)
                    .col(PokemonSearch::SearchedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PokemonSearch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PokemonSearch {
    #[sea_orm(iden = "pokemon_searches")]
    Table,
    Id,
    PokemonName,
    PokemonId,
    Found,
    SearchedAt,
}

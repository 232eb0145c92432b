use super::*;
use test_utils::factory::helpers::at_minute;

/// Tests that the full log is returned newest first regardless of insertion order.
///
/// Expected: Ok with entries sorted by searched_at descending
#[tokio::test]
async fn returns_entries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PokemonSearch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_search(db, "eevee", true, at_minute(2)).await?;
    factory::create_search(db, "pikachu", true, at_minute(3)).await?;
    factory::create_search(db, "zzz", false, at_minute(1)).await?;

    let repo = PokemonSearchRepository::new(db);
    let entries = repo.get_all_ordered().await?;

    let names: Vec<&str> = entries.iter().map(|e| e.pokemon_name.as_str()).collect();
    assert_eq!(names, vec!["pikachu", "eevee", "zzz"]);
    assert_eq!(entries[0].searched_at, at_minute(3));

    Ok(())
}

/// Tests that entries sharing a timestamp come back newest insert first.
///
/// Expected: Ok with ties ordered by descending ID
#[tokio::test]
async fn orders_equal_timestamps_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PokemonSearch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_search(db, "bulbasaur", true, at_minute(0)).await?;
    let second = factory::create_search(db, "charmander", true, at_minute(0)).await?;

    let repo = PokemonSearchRepository::new(db);
    let entries = repo.get_all_ordered().await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, second.id);
    assert_eq!(entries[1].id, first.id);

    Ok(())
}

/// Tests reading an empty log.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PokemonSearch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokemonSearchRepository::new(db);
    let entries = repo.get_all_ordered().await?;

    assert!(entries.is_empty());

    Ok(())
}

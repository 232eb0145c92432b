use super::*;

/// Tests appending a found lookup.
///
/// Expected: Ok with the entry stored exactly as submitted
#[tokio::test]
async fn appends_found_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PokemonSearch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokemonSearchRepository::new(db);
    let entry = repo
        .append(AppendSearchParam {
            pokemon_name: "Pikachu".to_string(),
            pokemon_id: Some(25),
            found: true,
        })
        .await?;

    assert!(entry.id > 0);
    assert_eq!(entry.pokemon_name, "Pikachu");
    assert_eq!(entry.pokemon_id, Some(25));
    assert!(entry.found);

    let all = repo.get_all_ordered().await?;
    assert_eq!(all, vec![entry]);

    Ok(())
}

/// Tests appending a miss.
///
/// Expected: Ok with no resolved ID and found set to false
#[tokio::test]
async fn appends_not_found_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PokemonSearch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokemonSearchRepository::new(db);
    let entry = repo
        .append(AppendSearchParam {
            pokemon_name: "zzz".to_string(),
            pokemon_id: None,
            found: false,
        })
        .await?;

    assert_eq!(entry.pokemon_id, None);
    assert!(!entry.found);

    Ok(())
}

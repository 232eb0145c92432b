use super::*;

/// Tests a successful lookup.
///
/// Verifies the upstream body is normalized and one found entry is appended to the
/// search log under the query as submitted.
///
/// Expected: Ok(PokemonLookup::Found) and a logged entry with the resolved ID
#[tokio::test]
async fn returns_normalized_pokemon_and_logs_search() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    mock_pokemon(
        &server,
        "bulbasaur",
        ResponseTemplate::new(200).set_body_json(pokemon_json(1, "bulbasaur")),
    )
    .await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let lookup = PokemonService::new(db, &http_client, &base)
        .get_pokemon("Bulbasaur")
        .await?;

    let PokemonLookup::Found(record) = lookup else {
        panic!("expected a found lookup, got {:?}", lookup);
    };
    assert_eq!(record.id, 1);
    assert_eq!(record.name, "Bulbasaur");
    assert_eq!(record.types, "Grass, Poison");
    assert_eq!(record.abilities, "Overgrow, Chlorophyll");
    assert_eq!(record.height, "0.7");
    assert_eq!(record.weight, "6.9");
    assert_eq!(record.sprite, "https://img/artwork.png");

    let log = PokemonSearchRepository::new(db).get_all_ordered().await?;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].pokemon_name, "Bulbasaur");
    assert_eq!(log[0].pokemon_id, Some(1));
    assert!(log[0].found);

    Ok(())
}

/// Tests lookup by numeric ID.
///
/// Expected: Ok(PokemonLookup::Found) with the upstream record
#[tokio::test]
async fn looks_up_by_numeric_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    mock_pokemon(
        &server,
        "25",
        ResponseTemplate::new(200).set_body_json(pokemon_json(25, "pikachu")),
    )
    .await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let lookup = PokemonService::new(db, &http_client, &base)
        .get_pokemon(" 25 ")
        .await?;

    assert_eq!(lookup.pokemon_id(), Some(25));

    Ok(())
}

/// Tests that an upstream 404 is a normal outcome.
///
/// Expected: Ok(PokemonLookup::NotFound) and a logged not-found entry
#[tokio::test]
async fn upstream_not_found_is_not_an_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    mock_pokemon(&server, "missingno", ResponseTemplate::new(404)).await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let lookup = PokemonService::new(db, &http_client, &base)
        .get_pokemon("missingno")
        .await?;

    assert_eq!(lookup, PokemonLookup::NotFound);

    let log = PokemonSearchRepository::new(db).get_all_ordered().await?;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].pokemon_name, "missingno");
    assert_eq!(log[0].pokemon_id, None);
    assert!(!log[0].found);

    Ok(())
}

/// Tests that other upstream error statuses fail the lookup.
///
/// Expected: Err(PokemonError::UpstreamStatus(500)) and nothing logged
#[tokio::test]
async fn fails_on_upstream_error_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    mock_pokemon(&server, "pikachu", ResponseTemplate::new(500)).await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let result = PokemonService::new(db, &http_client, &base)
        .get_pokemon("pikachu")
        .await;

    assert!(matches!(
        result,
        Err(AppError::PokemonErr(PokemonError::UpstreamStatus(500)))
    ));
    assert!(PokemonSearchRepository::new(db)
        .get_all_ordered()
        .await?
        .is_empty());

    Ok(())
}

/// Tests that a resource with fewer than six stats fails instead of defaulting.
///
/// Expected: Err(PokemonError::MalformedUpstreamData)
#[tokio::test]
async fn fails_on_malformed_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut body = pokemon_json(25, "pikachu");
    body["stats"] = json!([{ "base_stat": 35 }, { "base_stat": 55 }]);

    let server = MockServer::start().await;
    mock_pokemon(
        &server,
        "pikachu",
        ResponseTemplate::new(200).set_body_json(body),
    )
    .await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let result = PokemonService::new(db, &http_client, &base)
        .get_pokemon("pikachu")
        .await;

    assert!(matches!(
        result,
        Err(AppError::PokemonErr(PokemonError::MalformedUpstreamData(_)))
    ));

    Ok(())
}

/// Tests that a non-JSON body is reported as malformed data.
///
/// Expected: Err(PokemonError::MalformedUpstreamData)
#[tokio::test]
async fn fails_on_non_json_body() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    mock_pokemon(
        &server,
        "pikachu",
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let result = PokemonService::new(db, &http_client, &base)
        .get_pokemon("pikachu")
        .await;

    assert!(matches!(
        result,
        Err(AppError::PokemonErr(PokemonError::MalformedUpstreamData(_)))
    ));

    Ok(())
}

/// Tests that an upstream timeout is reported as unavailability.
///
/// Expected: Err(PokemonError::UpstreamUnavailable)
#[tokio::test]
async fn fails_when_upstream_times_out() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pokemon_json(25, "pikachu"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let base = base_url(&server);
    let result = PokemonService::new(db, &http_client, &base)
        .get_pokemon("pikachu")
        .await;

    assert!(matches!(
        result,
        Err(AppError::PokemonErr(PokemonError::UpstreamUnavailable(_)))
    ));

    Ok(())
}

/// Tests that an empty query is rejected without calling upstream.
///
/// Expected: Err(PokemonError::EmptyQuery) and no upstream request
#[tokio::test]
async fn rejects_empty_query() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let result = PokemonService::new(db, &http_client, &base)
        .get_pokemon("   ")
        .await;

    assert!(matches!(
        result,
        Err(AppError::PokemonErr(PokemonError::EmptyQuery))
    ));

    Ok(())
}

/// Tests that a failing search log does not fail the lookup.
///
/// The search log table is missing, so the append fails and is only logged.
///
/// Expected: Ok(PokemonLookup::Found)
#[tokio::test]
async fn lookup_succeeds_when_search_log_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    mock_pokemon(
        &server,
        "pikachu",
        ResponseTemplate::new(200).set_body_json(pokemon_json(25, "pikachu")),
    )
    .await;

    let http_client = reqwest::Client::new();
    let base = base_url(&server);
    let lookup = PokemonService::new(db, &http_client, &base)
        .get_pokemon("pikachu")
        .await?;

    assert!(lookup.is_found());

    Ok(())
}

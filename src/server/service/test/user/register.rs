use super::*;

/// Tests registering a Telegram ID for the first time.
///
/// Expected: Ok with `Registration::Created` and both timestamps equal
#[tokio::test]
async fn registers_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let registration = service
        .register(RegisterUserParam {
            telegram_id: "123456789".to_string(),
            first_name: "Ash".to_string(),
            last_name: Some("Ketchum".to_string()),
            username: Some("ash".to_string()),
        })
        .await?;

    let Registration::Created(user) = registration else {
        panic!("expected a new registration, got {:?}", registration);
    };
    assert!(user.id > 0);
    assert_eq!(user.telegram_id, "123456789");
    assert_eq!(user.last_name.as_deref(), Some("Ketchum"));
    assert_eq!(user.username.as_deref(), Some("ash"));
    assert_eq!(user.registered_at, user.last_active);

    Ok(())
}

/// Tests that registering the same Telegram ID twice returns the existing record.
///
/// Verifies the second call reports `AlreadyRegistered` with the first record's ID and
/// that no second row is written.
///
/// Expected: Ok with the same user and one stored row
#[tokio::test]
async fn second_registration_returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let first = service.register(register_param("555", "Brock")).await?;
    let second = service.register(register_param("555", "Someone else")).await?;

    assert!(matches!(first, Registration::Created(_)));
    let Registration::AlreadyRegistered(existing) = &second else {
        panic!("expected an existing registration, got {:?}", second);
    };
    assert_eq!(existing.id, first.user().id);
    assert_eq!(existing.first_name, "Brock");

    let page = service
        .get_all_users(GetAllUsersParam {
            page: 1,
            per_page: 10,
        })
        .await?;
    assert_eq!(page.total, 1);

    Ok(())
}

/// Tests the response envelope for each registration outcome.
///
/// Expected: success/exists flags are inverted between new and existing users
#[tokio::test]
async fn registration_outcomes_map_to_envelope_flags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let created = service.register(register_param("777", "Misty")).await?.into_dto();
    let existing = service.register(register_param("777", "Misty")).await?.into_dto();

    assert!(created.success);
    assert!(!created.exists);
    assert!(created.message.is_none());
    assert!(!existing.success);
    assert!(existing.exists);
    assert_eq!(existing.message.as_deref(), Some("User already registered"));
    assert_eq!(
        created.user.map(|u| u.id),
        existing.user.map(|u| u.id)
    );

    Ok(())
}

/// Tests that required fields are validated before touching the database.
///
/// Expected: Err(AppError::BadRequest) for an empty or blank Telegram ID or first name
#[tokio::test]
async fn rejects_missing_required_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    for (telegram_id, first_name) in [("", "Ash"), ("123", ""), ("  ", "Ash"), ("123", " ")] {
        let result = service
            .register(register_param(telegram_id, first_name))
            .await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "expected BadRequest for ({:?}, {:?})",
            telegram_id,
            first_name
        );
    }

    assert!(!service.is_registered("123").await?);

    Ok(())
}

/// Tests that empty optional fields from the request body are stored as absent.
///
/// Expected: Ok with `last_name` and `username` set to None
#[tokio::test]
async fn stores_empty_optional_fields_as_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = RegisterUserParam::from(crate::model::user::RegisterUserDto {
        telegram_id: "888".to_string(),
        first_name: "Gary".to_string(),
        last_name: Some(String::new()),
        username: Some(String::new()),
    });

    let registration = UserService::new(db).register(param).await?;
    let user = registration.user();

    assert!(user.last_name.is_none());
    assert!(user.username.is_none());

    Ok(())
}

/// Tests that a missing users table surfaces as a database error.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_store_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .register(register_param("999", "Oak"))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

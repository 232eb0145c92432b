use super::*;

/// Tests paginating over users in ID order.
///
/// Expected: Ok with the requested page and the total user count
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for i in 0..5 {
        created.push(factory::user::create_user_with_id(db, format!("{}", 1000 + i)).await?);
    }

    let repo = UserRepository::new(db);

    let (first_page, total) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].id, created[0].id);
    assert_eq!(first_page[1].id, created[1].id);

    let (last_page, total) = repo.get_all_paginated(3, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].id, created[4].id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no users and the total still reported
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(5, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests that a page number whose row offset overflows returns an empty page.
///
/// Expected: Ok with no users and the total still reported
#[tokio::test]
async fn returns_empty_page_when_offset_overflows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let (users, total) = repo.get_all_paginated(i64::MAX as u64, 100).await?;
    assert!(users.is_empty());
    assert_eq!(total, 1);

    let (users, total) = repo.get_all_paginated(u64::MAX, 100).await?;
    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

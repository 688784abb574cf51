//! Tests for the user collection and user item resources.

use super::*;

/// Expect a created user to be retrievable at the returned Location
#[tokio::test]
async fn post_then_get_user() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let body = json!({
        "name": "Bob",
        "email": "bob@bob.com",
        "address": "X",
        "password": "p"
    });
    let response = send(&app, Method::POST, "/api/users/", Some(body)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(location(&response), Some("/api/users/Bob/"));

    let response = get(&app, "/api/users/Bob/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let user = body_json(response).await;
    assert_eq!(user["name"], "Bob");
    assert_eq!(user["email"], "bob@bob.com");
    assert_eq!(user["@controls"]["self"]["href"], "/api/users/Bob/");
    assert_eq!(
        user["@controls"]["cookbook:user-recipes"]["href"],
        "/api/users/Bob/recipes/"
    );
    assert_eq!(user["@controls"]["edit"]["method"], "PUT");
    assert_eq!(user["@controls"]["profile"]["href"], "/profiles/user/");
    assert_eq!(user["@controls"]["cookbook:delete"]["method"], "DELETE");

    Ok(())
}

/// Expect the collection to list every user with an add control
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Alice")
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let response = get(&app, "/api/users/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Alice");
    assert_eq!(items[1]["@controls"]["self"]["href"], "/api/users/Bob/");
    assert_eq!(body["@controls"]["cookbook:add-user"]["method"], "POST");
    assert!(body["@controls"]["cookbook:add-user"]["schema"].is_object());

    Ok(())
}

/// Expect a second user with the same name to conflict
#[tokio::test]
async fn duplicate_user_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/users/",
        Some(factory::user_body("Bob")),
    )
    .await;

    assert_error(response, StatusCode::CONFLICT, "/api/users/").await;

    Ok(())
}

/// Expect a body missing a required key to fail validation
#[tokio::test]
async fn rejects_user_missing_key() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/users/",
        Some(json!({ "name": "Bob", "email": "bob@bob.com" })),
    )
    .await;

    let body = assert_error(response, StatusCode::BAD_REQUEST, "/api/users/").await;
    assert!(!body["@error"]["@messages"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect 404 with the requested path for an unknown user
#[tokio::test]
async fn unknown_user_not_found() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = get(&app, "/api/users/Nobody/").await;

    assert_error(response, StatusCode::NOT_FOUND, "/api/users/Nobody/").await;

    Ok(())
}

/// Expect a non-JSON body on PUT to be rejected as unsupported media type
#[tokio::test]
async fn put_user_requires_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let response = send_raw(&app, Method::PUT, "/api/users/Bob/", "text/plain", "Bob").await;

    assert_error(
        response,
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        "/api/users/Bob/",
    )
    .await;

    Ok(())
}

/// Expect a PUT missing a required key to fail validation
#[tokio::test]
async fn put_user_missing_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/users/Bob/",
        Some(json!({ "name": "Bob" })),
    )
    .await;

    assert_error(response, StatusCode::BAD_REQUEST, "/api/users/Bob/").await;

    Ok(())
}

/// Expect a rename to move the user to its new URL
#[tokio::test]
async fn put_user_renames() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/users/Bob/",
        Some(factory::user_body("Robert")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(get(&app, "/api/users/Bob/").await.status(), StatusCode::NOT_FOUND);

    let user = body_json(get(&app, "/api/users/Robert/").await).await;
    assert_eq!(user["email"], "robert@example.com");

    Ok(())
}

/// Expect renaming onto a taken name to conflict
#[tokio::test]
async fn put_user_onto_existing_name_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Alice")
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/users/Bob/",
        Some(factory::user_body("Alice")),
    )
    .await;

    assert_error(response, StatusCode::CONFLICT, "/api/users/Bob/").await;

    Ok(())
}

/// Expect a deleted user and their recipes to be gone
#[tokio::test]
async fn delete_user_removes_recipes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[("Flour", 3, "dl")])
        .build()
        .await?;
    let app = app(&test);

    let response = send(&app, Method::DELETE, "/api/users/Bob/", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_error(
        get(&app, "/api/users/Bob/").await,
        StatusCode::NOT_FOUND,
        "/api/users/Bob/",
    )
    .await;
    assert_eq!(
        get(&app, "/api/users/Bob/recipes/Pancakes/").await.status(),
        StatusCode::NOT_FOUND
    );

    // Ingredients are shared and outlive the recipe
    assert_eq!(
        get(&app, "/api/ingredients/Flour/").await.status(),
        StatusCode::OK
    );

    Ok(())
}

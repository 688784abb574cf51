//! Tests for the ingredient collection and ingredient item resources.

use super::*;

/// Expect a single ingredient to be created and linked from the Location
#[tokio::test]
async fn post_single_ingredient() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/ingredients/",
        Some(factory::ingredient_body("Flour")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(location(&response), Some("/api/ingredients/Flour/"));

    let ingredient = body_json(get(&app, "/api/ingredients/Flour/").await).await;
    assert_eq!(ingredient["name"], "Flour");
    assert_eq!(
        ingredient["@controls"]["collection"]["href"],
        "/api/ingredients/"
    );

    Ok(())
}

/// Expect a batch to create every ingredient
#[tokio::test]
async fn post_ingredient_batch() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/ingredients/",
        Some(factory::ingredient_batch_body(&["Flour", "Milk", "Egg"])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(location(&response), Some("/api/ingredients/Flour/"));

    let body = body_json(get(&app, "/api/ingredients/").await).await;
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Flour", "Milk", "Egg"]);

    Ok(())
}

/// Expect a batch containing an existing name to conflict as a whole
#[tokio::test]
async fn batch_with_existing_name_rolls_back() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_ingredient("Milk")
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/ingredients/",
        Some(factory::ingredient_batch_body(&["Flour", "Milk"])),
    )
    .await;

    assert_error(response, StatusCode::CONFLICT, "/api/ingredients/").await;
    assert_eq!(
        get(&app, "/api/ingredients/Flour/").await.status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect a body with neither shape to fail validation
#[tokio::test]
async fn rejects_invalid_ingredient_body() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/ingredients/",
        Some(json!({ "title": "Flour" })),
    )
    .await;

    assert_error(response, StatusCode::BAD_REQUEST, "/api/ingredients/").await;

    Ok(())
}

/// Expect malformed JSON to be rejected as unsupported media type
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = send_raw(
        &app,
        Method::POST,
        "/api/ingredients/",
        "application/json",
        "{\"name\":",
    )
    .await;

    assert_error(
        response,
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        "/api/ingredients/",
    )
    .await;

    Ok(())
}

/// Expect a rename to carry over to recipes using the ingredient
#[tokio::test]
async fn put_ingredient_renames_in_recipes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[("Flour", 3, "dl")])
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/ingredients/Flour/",
        Some(factory::ingredient_body("Wheat flour")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let recipe = body_json(get(&app, "/api/users/Bob/recipes/Pancakes/").await).await;
    assert_eq!(recipe["ingredients"]["items"][0]["name"], "Wheat flour");
    assert_eq!(
        recipe["ingredients"]["items"][0]["@controls"]["self"]["href"],
        "/api/ingredients/Wheat%20flour/"
    );

    let response = get(&app, "/api/ingredients/Wheat%20flour/").await;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect deleting an ingredient to drop it from recipes
#[tokio::test]
async fn delete_ingredient_removes_recipe_lines() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[("Flour", 3, "dl"), ("Milk", 6, "dl")])
        .build()
        .await?;
    let app = app(&test);

    let response = send(&app, Method::DELETE, "/api/ingredients/Flour/", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_error(
        get(&app, "/api/ingredients/Flour/").await,
        StatusCode::NOT_FOUND,
        "/api/ingredients/Flour/",
    )
    .await;

    let recipe = body_json(get(&app, "/api/users/Bob/recipes/Pancakes/").await).await;
    let lines = recipe["ingredients"]["items"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["name"], "Milk");

    Ok(())
}

/// Expect a non-JSON body on PUT to be rejected as unsupported media type
#[tokio::test]
async fn put_ingredient_requires_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_ingredient("Flour")
        .build()
        .await?;
    let app = app(&test);

    let response = send_raw(
        &app,
        Method::PUT,
        "/api/ingredients/Flour/",
        "text/plain",
        "Wheat flour",
    )
    .await;

    assert_error(
        response,
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        "/api/ingredients/Flour/",
    )
    .await;

    Ok(())
}

/// Expect a PUT missing the name to fail validation
#[tokio::test]
async fn put_ingredient_missing_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_ingredient("Flour")
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/ingredients/Flour/",
        Some(json!({})),
    )
    .await;

    assert_error(response, StatusCode::BAD_REQUEST, "/api/ingredients/Flour/").await;

    Ok(())
}

/// Expect renaming onto a taken ingredient name to conflict
#[tokio::test]
async fn put_ingredient_onto_existing_name_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_ingredient("Flour")
        .with_ingredient("Sugar")
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/ingredients/Flour/",
        Some(factory::ingredient_body("Sugar")),
    )
    .await;

    assert_error(response, StatusCode::CONFLICT, "/api/ingredients/Flour/").await;
    assert_eq!(
        get(&app, "/api/ingredients/Flour/").await.status(),
        StatusCode::OK
    );

    Ok(())
}

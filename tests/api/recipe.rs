//! Tests for the recipe collection and recipe item resources.

use super::*;

/// Expect a new recipe to create its ingredients and be readable at the Location
#[tokio::test]
async fn post_recipe_creates_missing_ingredients() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_ingredient("Flour")
        .build()
        .await?;
    let app = app(&test);

    let body = factory::new_recipe_body("Pancakes", &[("Flour", 3, "dl"), ("Milk", 6, "dl")]);
    let response = send(&app, Method::POST, "/api/users/Bob/recipes/", Some(body)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        location(&response),
        Some("/api/users/Bob/recipes/Pancakes/")
    );

    let recipe = body_json(get(&app, "/api/users/Bob/recipes/Pancakes/").await).await;
    assert_eq!(recipe["name"], "Pancakes");
    assert_eq!(recipe["difficulty"], "easy");
    assert_eq!(recipe["owner"], "Bob");
    assert_eq!(recipe["@controls"]["author"]["href"], "/api/users/Bob/");

    let lines = recipe["ingredients"]["items"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["name"], "Flour");
    assert_eq!(lines[0]["amount"], 3);
    assert_eq!(lines[0]["unit"], "dl");
    assert_eq!(lines[1]["@controls"]["self"]["href"], "/api/ingredients/Milk/");

    let ingredients = body_json(get(&app, "/api/ingredients/").await).await;
    assert_eq!(ingredients["items"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect an unknown difficulty to be stored as undefined
#[tokio::test]
async fn unknown_difficulty_is_undefined() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let body = json!({
        "recipe": {
            "name": "Toast",
            "description": "Bread, heated",
            "difficulty": "impossible"
        }
    });
    let response = send(&app, Method::POST, "/api/users/Bob/recipes/", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let recipe = body_json(get(&app, "/api/users/Bob/recipes/Toast/").await).await;
    assert_eq!(recipe["difficulty"], "undefined");
    assert!(recipe["ingredients"]["items"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect the collection to list only the owner's recipes
#[tokio::test]
async fn lists_recipes_of_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Alice")
        .with_user("Bob")
        .with_recipe("Alice", "Waffles", &[])
        .with_recipe("Bob", "Pancakes", &[])
        .build()
        .await?;
    let app = app(&test);

    let response = get(&app, "/api/users/Bob/recipes/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Pancakes");
    assert_eq!(
        items[0]["@controls"]["self"]["href"],
        "/api/users/Bob/recipes/Pancakes/"
    );
    assert_eq!(body["@controls"]["cookbook:add-recipe"]["method"], "POST");

    Ok(())
}

/// Expect a recipe to resolve only under its own owner
#[tokio::test]
async fn recipe_of_other_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Alice")
        .with_user("Bob")
        .with_recipe("Alice", "Waffles", &[])
        .build()
        .await?;
    let app = app(&test);

    let response = get(&app, "/api/users/Bob/recipes/Waffles/").await;

    assert_error(
        response,
        StatusCode::NOT_FOUND,
        "/api/users/Bob/recipes/Waffles/",
    )
    .await;

    Ok(())
}

/// Expect recipes for an unknown user to be not found
#[tokio::test]
async fn recipes_of_unknown_user_not_found() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/users/Nobody/recipes/",
        Some(factory::new_recipe_body("Toast", &[])),
    )
    .await;

    assert_error(response, StatusCode::NOT_FOUND, "/api/users/Nobody/recipes/").await;

    Ok(())
}

/// Expect a second recipe with the same name to conflict
#[tokio::test]
async fn duplicate_recipe_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[])
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::POST,
        "/api/users/Bob/recipes/",
        Some(factory::new_recipe_body("Pancakes", &[])),
    )
    .await;

    assert_error(response, StatusCode::CONFLICT, "/api/users/Bob/recipes/").await;

    Ok(())
}

/// Expect a repeated ingredient line to conflict and leave nothing behind
#[tokio::test]
async fn repeated_ingredient_line_rolls_back() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let body = factory::new_recipe_body("Pancakes", &[("Flour", 3, "dl"), ("Flour", 1, "dl")]);
    let response = send(&app, Method::POST, "/api/users/Bob/recipes/", Some(body)).await;

    assert_error(response, StatusCode::CONFLICT, "/api/users/Bob/recipes/").await;
    assert_eq!(
        get(&app, "/api/users/Bob/recipes/Pancakes/").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&app, "/api/ingredients/Flour/").await.status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect an ingredient line with a fractional amount to fail validation
#[tokio::test]
async fn rejects_fractional_amount() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let body = json!({
        "recipe": { "name": "Pancakes", "description": "Fry" },
        "ingredients": [{ "name": "Flour", "amount": 1.5, "unit": "dl" }]
    });
    let response = send(&app, Method::POST, "/api/users/Bob/recipes/", Some(body)).await;

    assert_error(response, StatusCode::BAD_REQUEST, "/api/users/Bob/recipes/").await;

    Ok(())
}

/// Expect an edit to update fields and keep ingredient lines
#[tokio::test]
async fn put_recipe_updates_fields() -> Result<(), TestError> {
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
        "/api/users/Bob/recipes/Pancakes/",
        Some(factory::recipe_fields_body("Crepes", "hard")),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let recipe = body_json(get(&app, "/api/users/Bob/recipes/Crepes/").await).await;
    assert_eq!(recipe["difficulty"], "hard");
    assert_eq!(recipe["description"], "How to make Crepes");
    assert_eq!(recipe["ingredients"]["items"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Expect a deleted recipe to be gone while its ingredients remain
#[tokio::test]
async fn delete_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[("Flour", 3, "dl")])
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::DELETE,
        "/api/users/Bob/recipes/Pancakes/",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        get(&app, "/api/users/Bob/recipes/Pancakes/").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get(&app, "/api/ingredients/Flour/").await.status(),
        StatusCode::OK
    );

    Ok(())
}

/// Expect an edit without a difficulty to keep the stored one
#[tokio::test]
async fn put_recipe_without_difficulty_keeps_it() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let app = app(&test);

    let body = json!({
        "recipe": { "name": "Pancakes", "description": "Fry", "difficulty": "hard" }
    });
    let response = send(&app, Method::POST, "/api/users/Bob/recipes/", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &app,
        Method::PUT,
        "/api/users/Bob/recipes/Pancakes/",
        Some(json!({ "name": "Pancakes", "description": "Fry in butter" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let recipe = body_json(get(&app, "/api/users/Bob/recipes/Pancakes/").await).await;
    assert_eq!(recipe["difficulty"], "hard");
    assert_eq!(recipe["description"], "Fry in butter");

    Ok(())
}

/// Expect ingredient lines to come back in the order they were posted
#[tokio::test]
async fn keeps_posted_ingredient_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_ingredient("Sugar")
        .build()
        .await?;
    let app = app(&test);

    let body = factory::new_recipe_body("Pancakes", &[("Flour", 3, "dl"), ("Sugar", 1, "tbsp")]);
    let response = send(&app, Method::POST, "/api/users/Bob/recipes/", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let recipe = body_json(get(&app, "/api/users/Bob/recipes/Pancakes/").await).await;
    let names: Vec<&str> = recipe["ingredients"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Flour", "Sugar"]);

    Ok(())
}

/// Expect a non-JSON body on PUT to be rejected as unsupported media type
#[tokio::test]
async fn put_recipe_requires_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[])
        .build()
        .await?;
    let app = app(&test);

    let response = send_raw(
        &app,
        Method::PUT,
        "/api/users/Bob/recipes/Pancakes/",
        "text/plain",
        "Crepes",
    )
    .await;

    assert_error(
        response,
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        "/api/users/Bob/recipes/Pancakes/",
    )
    .await;

    Ok(())
}

/// Expect a PUT missing a required key to fail validation
#[tokio::test]
async fn put_recipe_missing_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[])
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/users/Bob/recipes/Pancakes/",
        Some(json!({ "name": "Crepes" })),
    )
    .await;

    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "/api/users/Bob/recipes/Pancakes/",
    )
    .await;

    Ok(())
}

/// Expect renaming onto a taken recipe name to conflict
#[tokio::test]
async fn put_recipe_onto_existing_name_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[])
        .with_recipe("Bob", "Waffles", &[])
        .build()
        .await?;
    let app = app(&test);

    let response = send(
        &app,
        Method::PUT,
        "/api/users/Bob/recipes/Pancakes/",
        Some(factory::recipe_fields_body("Waffles", "easy")),
    )
    .await;

    assert_error(
        response,
        StatusCode::CONFLICT,
        "/api/users/Bob/recipes/Pancakes/",
    )
    .await;
    assert_eq!(
        get(&app, "/api/users/Bob/recipes/Pancakes/").await.status(),
        StatusCode::OK
    );

    Ok(())
}

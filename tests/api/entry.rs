//! Tests for the entry point, the fallback and the served OpenAPI document.

use super::*;

/// Expect the entry point to link to both top level collections
#[tokio::test]
async fn entry_point_links_collections() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = get(&app, "/api/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.mason+json"
    );

    let body = body_json(response).await;
    assert_eq!(body["title"], "Cookbook API");
    assert_eq!(body["@controls"]["cookbook:users-all"]["href"], "/api/users/");
    assert_eq!(
        body["@controls"]["cookbook:ingredients-all"]["href"],
        "/api/ingredients/"
    );
    assert!(body["@namespaces"]["cookbook"]["name"].is_string());

    Ok(())
}

/// Expect a Mason 404 for a URL no route matches
#[tokio::test]
async fn unknown_url_returns_mason_not_found() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = get(&app, "/api/nothing/here/").await;

    assert_error(response, StatusCode::NOT_FOUND, "/api/nothing/here/").await;

    Ok(())
}

/// Expect the OpenAPI document to describe the resource paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let app = app(&test);

    let response = get(&app, "/api/docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["info"]["title"], "Cookbook");
    assert!(body["paths"]["/api/users/{user}/recipes/{recipe}/"].is_object());
    assert!(body["paths"]["/api/ingredients/"]["post"].is_object());

    Ok(())
}

//! Drives the console client against a server bound to a local port.

use std::io::Cursor;

use cookbook::{
    client::{api::ApiClient, console::Console, error::ClientError, menu::CookbookClient},
    server::{model::app::AppState, router},
};
use cookbook_test_utils::prelude::*;
use tokio::net::TcpListener;

/// Serves the router over the test database, returning the base URL
async fn spawn_server(test: &TestSetup) -> String {
    let app = router::routes().with_state(test.app_state::<AppState>());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Runs the client with scripted input, returning the result and everything it printed
async fn run_client(base_url: &str, input: &str) -> (Result<(), ClientError>, String) {
    let api = ApiClient::new(base_url).unwrap();
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    let mut client = CookbookClient::new(api, console);
    let result = client.run().await;

    let output = String::from_utf8(client.into_console().into_output()).unwrap();

    (result, output)
}

/// Expect a full session of creating a user and a recipe to show up in listings
#[tokio::test]
async fn creates_user_and_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let base_url = spawn_server(&test).await;

    let input = [
        // Create user
        "1",
        "Alice",
        "alice@example.com",
        "Alice Street 1",
        "secret",
        // List users
        "4",
        // Select Alice, add a recipe with one ingredient
        "2",
        "2",
        "1",
        "Toast",
        "Bread, heated",
        "1",
        "y",
        "Bread",
        "2",
        "slice",
        "n",
        // Inspect it, then back to the main menu
        "3",
        "1",
        "5",
        // List ingredients, exit
        "5",
        "6",
    ]
    .join("\n");

    let (result, output) = run_client(&base_url, &input).await;

    assert!(result.is_ok());
    assert!(output.contains("Connected to Cookbook API"));
    assert!(output.contains("User Alice created."));
    assert!(output.contains("- Bob <bob@example.com>\n- Alice <alice@example.com>"));
    assert!(output.contains("Recipe Toast added."));
    assert!(output.contains(
        "Toast by Alice\nDifficulty: easy\nBread, heated\nIngredients:\n  - 2 slice Bread"
    ));
    assert!(output.contains("- Bread"));

    Ok(())
}

/// Expect an API error to be shown without ending the session
#[tokio::test]
async fn reports_conflict_and_continues() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .build()
        .await?;
    let base_url = spawn_server(&test).await;

    let input = ["1", "Bob", "bob@bob.com", "X", "p", "4", "6"].join("\n");

    let (result, output) = run_client(&base_url, &input).await;

    assert!(result.is_ok());
    assert!(output.contains("Error 409: Already exists"));
    assert!(output.contains("  User 'Bob' already exists"));
    assert!(output.contains("- Bob <bob@example.com>"));

    Ok(())
}

/// Expect deleting a user to remove them from the listing
#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cookbook_tables()
        .with_user("Bob")
        .with_recipe("Bob", "Pancakes", &[("Flour", 3, "dl")])
        .build()
        .await?;
    let base_url = spawn_server(&test).await;

    let input = ["3", "1", "y", "4", "6"].join("\n");

    let (result, output) = run_client(&base_url, &input).await;

    assert!(result.is_ok());
    assert!(output.contains("User Bob deleted."));
    assert!(output.contains("No users."));

    Ok(())
}

/// Expect end of input to end the session with an error the binary treats as a goodbye
#[tokio::test]
async fn end_of_input_closes_session() -> Result<(), TestError> {
    let test = test_setup_with_cookbook_tables!()?;
    let base_url = spawn_server(&test).await;

    let (result, output) = run_client(&base_url, "4\n").await;

    assert!(matches!(result, Err(ClientError::InputClosed)));
    assert!(output.contains("No users."));

    Ok(())
}

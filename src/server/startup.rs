use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;

use crate::{
    model::{
        recipe::{NewRecipeDto, RecipeFieldsDto, RecipeIngredientDto},
        user::UserDto,
    },
    server::{
        config::Config,
        error::{api::ApiError, Error},
        model::app::AppState,
        router,
        service::{recipe::RecipeService, user::UserService},
    },
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Inserts a sample user with one recipe unless the sample user already exists
pub async fn seed_test_data(db: &DatabaseConnection) -> Result<(), Error> {
    let user_service = UserService::new(db);

    match user_service.get("Bob").await {
        Ok(_) => {
            tracing::info!("Sample data already present, skipping seeding");
            return Ok(());
        }
        Err(Error::ApiError(ApiError::NotFound { .. })) => {}
        Err(err) => return Err(err),
    }

    let bob = user_service
        .create(UserDto {
            name: "Bob".to_string(),
            email: "bob@bob.mail.bob".to_string(),
            address: "Bob street 420".to_string(),
            password: "bob34".to_string(),
        })
        .await?;

    RecipeService::new(db)
        .create(
            &bob,
            NewRecipeDto {
                recipe: RecipeFieldsDto {
                    name: "Pancakes".to_string(),
                    description: "Whisk everything together and fry thin cakes in butter"
                        .to_string(),
                    difficulty: Some("easy".to_string()),
                },
                ingredients: vec![
                    RecipeIngredientDto {
                        name: "Flour".to_string(),
                        amount: 3,
                        unit: "dl".to_string(),
                    },
                    RecipeIngredientDto {
                        name: "Milk".to_string(),
                        amount: 6,
                        unit: "dl".to_string(),
                    },
                    RecipeIngredientDto {
                        name: "Egg".to_string(),
                        amount: 2,
                        unit: "pcs".to_string(),
                    },
                ],
            },
        )
        .await?;

    tracing::info!("Sample data generated");

    Ok(())
}

/// Bind the listener and serve the API until the process is stopped
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let app = router::routes().with_state(AppState::from(db));

    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::io;

use cookbook::client::{
    api::ApiClient, config::ClientConfig, console::Console, error::ClientError,
    menu::CookbookClient,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env();

    let api = match ApiClient::new(&config.api_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut client = CookbookClient::new(api, console);

    match client.run().await {
        Ok(()) | Err(ClientError::InputClosed) => println!("Bye!"),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

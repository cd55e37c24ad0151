use dotenvy::dotenv;
use tracing::info;

use foodiefinds_api::store::Store;
use foodiefinds_api::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "./database.sqlite".to_string());
    let store = Store::connect(&database_url)?;

    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value.parse()?,
        Err(_) => 3000,
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(AppState { store })).await?;

    Ok(())
}

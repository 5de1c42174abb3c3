use rpv_api::state::AppState;
use rpv_api::{config, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL / DB_* vars
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting RPV API in {:?} mode", config.environment);

    let pool = database::connect(&config.database)?;
    let state = AppState::new(pool);
    let app = rpv_api::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("RPV API listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

use favourites_board::{
    api::{create_router, AppState},
    config::Config,
    services::sources::CsvFileSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let board = config.board()?;

    // Initialize application state; a missing or unreadable CSV leaves the board empty
    let source = CsvFileSource::new(&config.csv_path);
    let state = AppState::load_or_empty(&source, board).await;

    // Create the router with all routes
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, csv = %config.csv_path, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

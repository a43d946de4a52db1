use fixdesk::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let session = startup::connect_to_session(&config).await.unwrap();

    tracing::info!("Starting server on {}", config.server_address);

    let app = router::routes()
        .with_state(AppState { db })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.server_address)
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}

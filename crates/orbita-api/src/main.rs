use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use orbita_agent::AgentServiceClient;
use orbita_api::{config::Config, routes::build_router, state::AppState};
use orbita_history::MongoHistoryStore;
use orbita_spacedata::SpaceDataClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Orbita API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    // Connect to MongoDB
    tracing::info!("Connecting to MongoDB");
    let history = MongoHistoryStore::connect(
        &config.mongodb_uri,
        &config.mongodb.database,
        &config.mongodb.collection,
    )
    .await?;
    tracing::info!("MongoDB connected");

    // Build the agent service client
    tracing::info!("Initializing agent client for {}", config.agent.name);
    let agent = AgentServiceClient::builder()
        .endpoint(&config.agent_endpoint)
        .api_key(&config.agent_api_key)
        .api_version(&config.agent.api_version)
        .agent_name(&config.agent.name)
        .timeout(Duration::from_secs(config.agent.timeout_secs))
        .build()?;

    // Build the space data client
    let spacedata = SpaceDataClient::builder()
        .api_key(&config.nasa_api_key)
        .timeout(Duration::from_secs(config.spacedata.timeout_secs))
        .build()?;

    // Create application state
    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(history),
        Arc::new(agent),
        spacedata,
    ));

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

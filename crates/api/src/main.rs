use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstore_api::config::ServerConfig;
use bookstore_api::gql;
use bookstore_api::router::build_app_router;
use bookstore_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = bookstore_db::create_pool(&database_url).await?;
    tracing::info!("Database connection pool created");

    bookstore_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    bookstore_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let schema = gql::build_schema(pool.clone());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        schema,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    tracing::info!("Starting server on {addr}");
    tracing::info!("GraphiQL available at http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

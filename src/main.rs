use book_catalog::{
    adapters::{memory::InMemoryBookRepository, postgres::PostgresBookRepository},
    api::{
        handlers::AppState,
        router::{cors_layer, create_router},
    },
    application::book::ServiceDependencies,
    config::{AppConfig, StoreBackend},
    ports::BookRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_catalog=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Initialize the book store
    let book_repository: Arc<dyn BookRepository> = match &config.store {
        StoreBackend::Memory { seed_books } => {
            tracing::info!(seed_books, "Using in-memory book store");
            if *seed_books {
                Arc::new(InMemoryBookRepository::with_seed_books())
            } else {
                Arc::new(InMemoryBookRepository::new())
            }
        }
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            tracing::info!("Using PostgreSQL book store");
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(database_url)
                .await?;
            Arc::new(PostgresBookRepository::new(pool))
        }
    };

    // Create application state
    let app_state = Arc::new(AppState {
        service_deps: ServiceDependencies { book_repository },
    });

    // Create router
    let app = create_router(app_state).layer(cors_layer(&config.cors_allowed_origin)?);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;
    Ok(())
}

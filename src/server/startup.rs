use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Install the global tracing subscriber, honouring `RUST_LOG` with a default of `info`
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Bind the configured address and serve the router until the process is stopped
pub async fn serve(config: &Config, router: axum::Router) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, router).await?;

    Ok(())
}

use recipe_api::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        match e {
            Error::ConfigError(e) => tracing::error!("Configuration error: {}", e),
            e => tracing::error!("Server error: {}", e),
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let router = router::routes()
        .with_state(AppState {
            db,
            bcrypt_cost: config.bcrypt_cost,
        })
        .layer(TraceLayer::new_for_http());

    startup::serve(&config, router).await
}

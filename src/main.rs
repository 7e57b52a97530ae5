use skinvault::{
    config::Config,
    error::Error,
    service::store::StoreService,
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;

    if config.seed_catalog {
        startup::seed_catalog(&db).await?;
    }

    if config.seed_demo_user {
        startup::seed_demo_user(&db).await?;
    }

    let store_service = StoreService::new(&db);
    let bundles = store_service.list_bundles().await?;
    let skins = store_service.list_skins().await?;

    tracing::info!(
        "Datastore ready: {} bundles, {} skins in the catalog",
        bundles.len(),
        skins.len()
    );

    db.close().await?;

    Ok(())
}

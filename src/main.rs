use anyhow::Result;
use catalog_core::application::{
    ports::{storage::ImageStorage, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ResourceRepositories},
};
use catalog_core::config::AppConfig;
use catalog_core::domain::catalog::{ResourceImageRepository, ResourceKind};
use catalog_core::infrastructure::{
    database,
    repositories::{
        PostgresProductReferenceRepository, PostgresResourceImageRepository,
        PostgresResourceReadRepository, PostgresResourceWriteRepository,
    },
    storage::LocalImageStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use catalog_core::presentation::http::{
    middleware::rate_limit::RateLimitSettings, routes::RouterOptions, state::HttpState,
};
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let storage: Arc<dyn ImageStorage> = Arc::new(LocalImageStorage::new(
        config.brands_upload_path(),
        config.stores_upload_path(),
    ));
    let store_images: Arc<dyn ResourceImageRepository> = Arc::new(
        PostgresResourceImageRepository::new(pool.clone(), ResourceKind::Store),
    );

    let services = Arc::new(ApplicationServices::new(
        repositories(&pool, ResourceKind::Brand),
        repositories(&pool, ResourceKind::Store),
        store_images,
        storage,
        clock,
        slugger,
        config.catalog_links(),
    ));

    let state = HttpState {
        services,
        max_upload_bytes: config.max_upload_bytes(),
    };

    let options = RouterOptions {
        rate_limit: config
            .rate_limit_enabled()
            .then(RateLimitSettings::default),
        allowed_origins: config.allowed_origins().to_vec(),
    };
    let app = options.build(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(domain = config.shop_domain(), "listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn repositories(pool: &PgPool, kind: ResourceKind) -> ResourceRepositories {
    ResourceRepositories {
        read: Arc::new(PostgresResourceReadRepository::new(pool.clone(), kind)),
        write: Arc::new(PostgresResourceWriteRepository::new(pool.clone(), kind)),
        references: Arc::new(PostgresProductReferenceRepository::new(pool.clone(), kind)),
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

//! interest-aggregator: HTTP service and reaction listener.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use interest_aggregator::adapters::{
    api_router, AppState, EventCatalogConfig, HttpActivityLogger, HttpEventTagLookup,
    PostgresInterestRepository, PostgresPreferenceRepository, ReactionEventHandler,
    RedisEventListener, RedisEventPublisher, TracingActivityLogger, REACTION_CHANNELS,
};
use interest_aggregator::adapters::postgres::run_migrations;
use interest_aggregator::application::{AggregatorPorts, InterestAggregator};
use interest_aggregator::config::{AppConfig, ConfigError, ValidationError};
use interest_aggregator::domain::foundation::DomainError;
use interest_aggregator::ports::{ActivityLogger, EventSubscriber};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Redis unavailable: {0}")]
    Redis(#[from] redis::RedisError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "interest-aggregator stopped");
        eprintln!("interest-aggregator: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config)?;

    info!(
        environment = ?config.server.environment,
        service = %config.server.service_name,
        "Starting interest-aggregator"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    if config.database.run_migrations {
        run_migrations(&pool).await?;
        info!("Database migrations applied");
    }

    let redis_client = redis::Client::open(config.redis.url.as_str())?;
    let redis_conn = redis_client.get_multiplexed_tokio_connection().await?;

    let activity_logger: Arc<dyn ActivityLogger> = match &config.collaborators.activity_log_url {
        Some(url) => Arc::new(HttpActivityLogger::new(
            url.clone(),
            config.collaborators.timeout(),
        )?),
        None => Arc::new(TracingActivityLogger),
    };

    let tag_lookup = HttpEventTagLookup::new(
        EventCatalogConfig::new(config.collaborators.event_catalog_url.clone())
            .with_timeout(config.collaborators.timeout()),
    )?;

    let aggregator = Arc::new(InterestAggregator::new(
        AggregatorPorts {
            interests: Arc::new(PostgresInterestRepository::new(pool.clone())),
            preferences: Arc::new(PostgresPreferenceRepository::new(pool)),
            tag_lookup: Arc::new(tag_lookup),
            event_publisher: Arc::new(RedisEventPublisher::new(
                redis_conn,
                config.redis.ranking_channel.clone(),
            )),
            activity_logger,
        },
        config.aggregator_settings()?,
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let listener_task = if config.redis.listen_reactions {
        let listener = RedisEventListener::new(redis_client);
        listener.subscribe_all(
            &REACTION_CHANNELS,
            Arc::new(ReactionEventHandler::new(aggregator.clone())),
        );
        Some(tokio::spawn(async move {
            if let Err(e) = listener.run(shutdown_rx).await {
                error!(error = %e, "Reaction listener stopped");
            }
        }))
    } else {
        info!("Reaction listener disabled");
        None
    };

    let app = api_router(AppState::new(aggregator), config.server.request_timeout());
    let addr = config.server.socket_addr()?;
    let tcp = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(tcp, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(task) = listener_task {
        if let Err(e) = task.await {
            error!(error = %e, "Reaction listener task panicked");
        }
    }

    info!("interest-aggregator stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<(), StartupError> {
    let filter = EnvFilter::try_new(&config.server.log_level)?;

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .init();
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

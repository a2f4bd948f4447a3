use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shuttle_server::config::ServiceConfig;
use shuttle_server::schedule::ScheduleStore;
use shuttle_server::web::{AppState, create_router};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shuttle_server=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = ServiceConfig::from_env();

    // Refuse to start with a missing or partial schedule
    let store = match ScheduleStore::load(&config.schedule_path).await {
        Ok(store) => store,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(period) = config.reload_interval {
        let store = store.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match store.reload().await {
                    Ok(count) => info!(departures = count, "reloaded schedule"),
                    Err(e) => warn!("failed to reload schedule, keeping previous: {e}"),
                }
            }
        });
    }

    let state = AppState::new(store, config.advisor);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.listen_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("shuttle advisor listening on http://{}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

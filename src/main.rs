#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    config::RuntimeConfiguration,
    routes::roster_router,
    state::{RosterState, open_pool},
};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod data;
mod error;
mod maud_conveniences;
mod routes;
mod service;
mod state;
mod views;

async fn shutdown_signal(pool: Pool<Postgres>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
    pool.close().await;
}

#[tokio::main]
async fn main() {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    // everything can also come from the real environment
    if let Err(e) = dotenvy::dotenv() {
        debug!(?e, "No .env loaded");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let options = PgPoolOptions::new().max_connections(config.db_config().max_connections());
    let pool = open_pool(options, &config)
        .await
        .expect("unable to open database");

    let app = roster_router(RosterState::postgres(pool.clone()));

    let server_ip = config.server_ip();
    let listener = TcpListener::bind(server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(pool))
        .await
        .expect("unable to serve app");
}

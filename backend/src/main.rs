//! Backend entry-point: loads settings and serves the record endpoints.

mod server;

use std::{future, io};

use actix_web::web;
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, create_server, drain_on};
use tokio::signal;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(err.to_string()))?;
    let config = ServerConfig::new(settings.bind_addr()).with_limits(settings.limits());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::default_metrics());

    info!(
        bind_addr = %config.bind_addr(),
        max_limit = config.limits().max_limit(),
        max_errors = config.limits().max_errors().value(),
        "starting record service"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}

/// Resolves on Ctrl-C or, on Unix, `SIGTERM`.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "cannot listen for Ctrl-C");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "cannot listen for SIGTERM");
                future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }
}

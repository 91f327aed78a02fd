//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub(crate) use metrics::default_metrics;
pub use settings::ServerSettings;

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::RecordPagesService;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::records::{export_records, generate_records};
use backend::inbound::http::state::HttpState;
#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(generate_records)
        .service(export_records)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server serving the record endpoints.
///
/// # Parameters
/// - `health_state`: shared probe state marked ready once the listener binds.
/// - `config`: bind address, request ceilings and optional metrics.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        limits,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;
    let http_state = web::Data::new(HttpState::new(Arc::new(RecordPagesService), limits));

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness once `signal` resolves, then stop the server gracefully.
///
/// In-flight requests finish while the `/health/live` probe reports 503, so
/// orchestrators stop routing new traffic before the listener closes.
pub async fn drain_on<S>(signal: S, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    S: Future<Output = ()>,
{
    signal.await;
    health_state.mark_unhealthy();
    info!("shutdown requested, draining connections");
    handle.stop(true).await;
}

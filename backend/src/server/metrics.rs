//! Optional Prometheus middleware exposing `/metrics`.
//!
//! The layer is always installed when the `metrics` feature is on; if the
//! exporter could not be built it degrades to a pass-through that only boxes
//! the response body.

use std::fmt::Display;
use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

/// Namespace prefixed to every exported metric.
const NAMESPACE: &str = "records";

/// Build the exporter, logging and discarding construction failures.
pub(crate) fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            warn!(error = %err, "prometheus exporter unavailable; metrics disabled");
            None
        }
    }
}

/// Build the default exporter serving `/metrics`.
pub(crate) fn default_metrics() -> Option<PrometheusMetrics> {
    initialize_metrics(|| {
        PrometheusMetricsBuilder::new(NAMESPACE)
            .endpoint("/metrics")
            .build()
    })
}

#[derive(Clone)]
pub(crate) enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        metrics.map_or(Self::Disabled, |metrics| Self::Enabled(Arc::new(metrics)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self.clone() {
            Self::Enabled(metrics) => {
                let pending = Compat::new((*metrics).clone()).new_transform(service);
                Box::pin(async move { Ok(boxed::service(pending.await?)) })
            }
            Self::Disabled => Box::pin(async move {
                let passthrough = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Ok(boxed::service(passthrough))
            }),
        }
    }
}

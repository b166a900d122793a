use crate::cli::ServeArgs;
use crate::infra::{build_interpreter, AppState, InMemoryExperienceStore};
use crate::routes::with_meq30_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use meq30::config::AppConfig;
use meq30::error::AppError;
use meq30::submission::SubmissionService;
use meq30::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let interpreter = build_interpreter(&config.interpretation)?;
    let store = Arc::new(InMemoryExperienceStore::default());
    let submission_service = Arc::new(SubmissionService::new(store, interpreter));

    let app = with_meq30_routes(submission_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "meq30 scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

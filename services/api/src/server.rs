use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_dispute_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credit_dispute::config::AppConfig;
use credit_dispute::disputes::DisputeRouterState;
use credit_dispute::error::AppError;
use credit_dispute::telemetry;
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

    let dispute_state = DisputeRouterState {
        pinned_date: config.scoring.evaluation_date,
    };

    let app = with_dispute_routes(dispute_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        pinned_date = ?config.scoring.evaluation_date,
        "credit dispute service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

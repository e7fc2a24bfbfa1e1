use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySubmissionRepository};
use crate::routes::with_diagnosis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use marketer_dna::config::AppConfig;
use marketer_dna::error::AppError;
use marketer_dna::quiz::QuestionBank;
use marketer_dna::submissions::{DiagnosisService, DiagnosisServiceError};
use marketer_dna::telemetry;
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

    let bank = Arc::new(QuestionBank::bundled()?);
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        bank: bank.clone(),
    };

    let repository = Arc::new(InMemorySubmissionRepository::default());
    let service = DiagnosisService::new(repository, bank)
        .with_trim_ratio(config.diagnosis.salary_trim_ratio)
        .map_err(DiagnosisServiceError::from)?;

    if let Some(path) = args.seed_csv.take() {
        let file = std::fs::File::open(&path)?;
        let imported = service.import_csv(file)?;
        info!(imported, path = %path.display(), "seeded submissions from csv");
    }

    let app = with_diagnosis_routes(Arc::new(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "marketer dna diagnosis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use savo_kyc::config::AppConfig;
use savo_kyc::error::AppError;
use savo_kyc::kyc::{
    lead_router, ClientProfile, InMemoryLeadRepository, LeadScoringService, LeadToolbox,
    LogSuggestionSink, ScoreReport, ScoringEngine,
};
use savo_kyc::telemetry;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Savo KYC Service",
    about = "Score and verify prospective CFD-trading leads from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with individual leads offline
    Lead {
        #[command(subcommand)]
        command: LeadCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum LeadCommand {
    /// Score a structured client profile and print the report
    Score(LeadScoreArgs),
}

#[derive(Args, Debug)]
struct LeadScoreArgs {
    /// Path to a JSON file holding the extracted client profile
    #[arg(long)]
    profile: PathBuf,
    /// Include the per-category breakdown in the output
    #[arg(long)]
    breakdown: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Lead {
            command: LeadCommand::Score(args),
        } => run_lead_score(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(LeadScoringService::new(
        Arc::new(InMemoryLeadRepository::default()),
        Arc::new(LogSuggestionSink),
        ScoringEngine::default(),
    ));
    let toolbox = Arc::new(LeadToolbox::default());

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(lead_router(service, toolbox))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "kyc lead scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_lead_score(args: LeadScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.profile)?;
    let profile: ClientProfile = serde_json::from_str(&raw).map_err(AppError::Profile)?;

    let report = ScoringEngine::default().score(&profile);
    render_score_report(&report, args.breakdown);

    Ok(())
}

fn render_score_report(report: &ScoreReport, breakdown: bool) {
    println!("Lead scoring report");
    println!(
        "Total score: {}/{} -> {} potential",
        report.total_score,
        report.max_possible_score,
        report.potential.label()
    );

    if breakdown {
        println!();
        println!("Category breakdown:");
        for (category, points) in report.breakdown() {
            println!("  {category:<22} {points}");
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

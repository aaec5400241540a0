use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use compliance_api::config::ApiConfig;
use compliance_api::handlers::companies::{self, CompanyService, CALLER_ROLE_HEADER};
use compliance_api::{helpers, Database, SqliteCompanyStore};

#[get("/health")]
async fn health(db: web::Data<Arc<Database>>) -> impl Responder {
    if db.is_healthy().await {
        HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        }))
    } else {
        HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        }))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,

    /// Config file to use instead of the per-user default
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON fixture imported when the database has no companies
    #[arg(long)]
    seed_file: Option<PathBuf>,
}

fn init_tracing(log_file_path: Option<String>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("compliance-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path);

    let config = match ApiConfig::load(args.config) {
        Ok((config, path)) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            ApiConfig::default()
        }
    };

    let (db, db_path) = helpers::database::initialize_database(config.database_path())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    tracing::info!("Database initialized at: {}", db_path.display());

    if let Some(seed_file) = &args.seed_file {
        match helpers::seed::seed_from_file(db.async_connection.clone(), seed_file).await {
            Ok(count) => tracing::info!("Imported {} companies from {}", count, seed_file.display()),
            Err(e) => tracing::warn!("Failed to import seed file: {:#}", e),
        }
    }

    let service = web::Data::new(CompanyService::new(SqliteCompanyStore::new(
        db.async_connection.clone(),
    )));

    let server_config = config.server();
    tracing::info!(
        "Server will listen on {}:{}",
        server_config.host,
        server_config.port
    );

    let cors_config = config.cors.clone();
    let server = HttpServer::new(move || {
        let cors = match &cors_config {
            Some(cors_config) => {
                let mut cors_builder = Cors::default();
                for origin in &cors_config.allowed_origins {
                    cors_builder = cors_builder.allowed_origin(origin);
                }
                cors_builder
            }
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec!["Accept", "Content-Type", CALLER_ROLE_HEADER])
        .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(db.clone()))
            .app_data(service.clone())
            .service(health)
            .configure(companies::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }

        tracing::info!("Ctrl+C received, shutting down...");
        handle.stop(true).await;
    });

    server.await
}

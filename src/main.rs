use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salescope::config::Config;
use salescope::modules::charts::services::{ChartBackend, QuickChartBackend};
use salescope::modules::health;
use salescope::modules::sales;
use salescope::modules::sales::repositories::{MySqlSalesRepository, SalesRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salescope=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Salescope Sales Analytics Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized (up to {} connections)",
        config.database.max_connections
    );

    let repository: Arc<dyn SalesRepository> =
        Arc::new(MySqlSalesRepository::new(db_pool.clone()));
    let chart_backend: Arc<dyn ChartBackend> =
        Arc::new(QuickChartBackend::new(config.chart.base_url.clone()));
    tracing::info!("Chart backend: {}", chart_backend.name());

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::from(repository.clone()))
            .app_data(web::Data::from(chart_backend.clone()))
            .route("/", web::get().to(index))
            .configure(health::controllers::configure)
            .configure(sales::controllers::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Salescope Sales Analytics Service",
        "version": "0.1.0",
        "status": "running"
    }))
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use kin_algo::config::Settings;
use kin_algo::core::Suggester;
use kin_algo::error::{handle_json_payload_error, handle_query_payload_error};
use kin_algo::routes::{self, suggestions::AppState};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Kin Algo suggestion service...");

    let points = settings.scoring_points();
    let suggester = Suggester::new(points, settings.matching.min_score);

    info!(
        "Suggester initialized with points: {:?}, min score: {}",
        points, settings.matching.min_score
    );

    let app_state = AppState {
        suggester,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host.as_str(), port))
    .map_err(|e| {
        error!("Failed to bind {}:{}: {}", host, port, e);
        e
    })?;

    server.run().await
}

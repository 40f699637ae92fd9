use actix_web::{web, App, HttpServer};
use insights_backend::config::Config;
use insights_backend::FixtureStore;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    let store = match FixtureStore::load(&config.fixture.path) {
        Ok(store) => web::Data::new(store),
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()));
        }
    };

    info!("Starting fixture service on {}:{}", config.server.host, config.server.port);

    let allowed_origins = config.server.allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(insights_backend::middleware::Logger)
            .wrap(insights_backend::middleware::cors_middleware(&allowed_origins))
            .app_data(store.clone())
            .service(insights_backend::health::health_check)
            .configure(insights_backend::controller::configure_routes)
            .default_service(web::route().to(insights_backend::controller::not_found_handler))
    })
    .workers(config.server.workers)
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}

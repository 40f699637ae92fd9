use crate::error::ApiError;
use crate::fixture::FixtureStore;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::{debug, warn};

/// Canonical analysis payload.
#[get("/api/etsy-analysis")]
pub async fn etsy_analysis_handler(store: web::Data<FixtureStore>) -> impl Responder {
    debug!("Serving canonical analysis payload");
    HttpResponse::Ok().json(store.payload())
}

/// Same fixture in the legacy `/api/etsy-data` shape.
#[get("/api/etsy-data")]
pub async fn etsy_data_handler(store: web::Data<FixtureStore>) -> impl Responder {
    debug!("Serving legacy analysis payload");
    HttpResponse::Ok().json(store.legacy())
}

/// JSON 404 for every path the service does not know.
pub async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    warn!("No route for {} {}", req.method(), req.path());
    Err(ApiError::not_found(&format!("No route for {}", req.path())))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(etsy_analysis_handler).service(etsy_data_handler);
}

use crate::fixture::FixtureStore;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: &'static str,
    /// Path the fixture was read from; absent for in-memory stores.
    pub fixture: Option<String>,
}

#[get("/health")]
pub async fn health_check(store: web::Data<FixtureStore>) -> impl Responder {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp,
        version: env!("CARGO_PKG_VERSION"),
        fixture: store.origin().map(|path| path.display().to_string()),
    })
}

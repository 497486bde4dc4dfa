pub mod error;
pub mod models;
pub mod routes;
pub mod routes_portfolio;

use actix_cors::Cors;
use actix_web::{error::Error, web};

use crate::chat::ChatError;

/// The chat widget is served from a different origin than the API.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Extractor failures answer with the same `{error}` body as handler errors.
fn bad_request(err: impl std::fmt::Display) -> Error {
    ChatError::Validation(format!("Invalid request: {}", err)).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
            .service(routes::health)
            .service(routes::chat)
            .service(routes::history)
            .service(routes::clear)
            .service(routes_portfolio::get_portfolio)
            .service(routes_portfolio::get_projects)
            .service(routes_portfolio::get_skills)
            .service(routes_portfolio::get_experience),
    );
}

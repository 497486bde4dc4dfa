use actix_web::{get, HttpResponse};

use crate::portfolio;

#[get("/portfolio")]
pub async fn get_portfolio() -> HttpResponse {
    HttpResponse::Ok().json(portfolio::portfolio())
}

#[get("/projects")]
pub async fn get_projects() -> HttpResponse {
    HttpResponse::Ok().json(portfolio::projects())
}

#[get("/skills")]
pub async fn get_skills() -> HttpResponse {
    HttpResponse::Ok().json(portfolio::skills())
}

#[get("/experience")]
pub async fn get_experience() -> HttpResponse {
    HttpResponse::Ok().json(portfolio::experience())
}

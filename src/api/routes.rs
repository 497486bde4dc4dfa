use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::api::models::{
    ChatReply, ChatRequestBody, ChatTurnView, ClearReply, ClearRequestBody, SessionQuery,
};
use crate::chat::{ChatError, ChatRequest, ChatService};

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "healthy"}))
}

#[post("/chat")]
pub async fn chat(
    service: web::Data<ChatService>,
    req: web::Json<ChatRequestBody>,
) -> Result<HttpResponse, ChatError> {
    let req = req.into_inner();

    let turn = service
        .chat(ChatRequest {
            message: req.message,
            session_id: req.session_id,
        })
        .await?;

    Ok(HttpResponse::Ok().json(ChatReply::from(&turn)))
}

#[get("/chat/history")]
pub async fn history(
    service: web::Data<ChatService>,
    query: web::Query<SessionQuery>,
) -> Result<HttpResponse, ChatError> {
    let turns = service.history(query.session_id.as_deref())?;
    let views: Vec<ChatTurnView> = turns.iter().map(ChatTurnView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

#[post("/chat/clear")]
pub async fn clear(
    service: web::Data<ChatService>,
    body: web::Bytes,
) -> Result<HttpResponse, ChatError> {
    // An empty body clears the default session; anything else must parse.
    let req = if body.iter().all(u8::is_ascii_whitespace) {
        ClearRequestBody::default()
    } else {
        serde_json::from_slice::<ClearRequestBody>(&body)
            .map_err(|e| ChatError::Validation(format!("Invalid request body: {}", e)))?
    };
    let deleted = service.clear_history(req.session_id.as_deref())?;
    Ok(HttpResponse::Ok().json(ClearReply {
        success: true,
        deleted,
    }))
}

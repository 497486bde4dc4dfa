#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use foliochat::chat::{ChatService, FallbackResponder};
    use foliochat::config::ChatConfig;
    use foliochat::db::DuckDbStore;

    fn chat_service() -> web::Data<ChatService> {
        let store = Arc::new(DuckDbStore::in_memory().unwrap());
        web::Data::new(ChatService::new(store, None, &ChatConfig::default()))
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[actix_web::test]
    async fn test_chat_then_history() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;
        let projects = FallbackResponder::new().response_for("projects").unwrap();

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({"message": "What are your projects?", "sessionId": "s1"}))
            .to_request();
        let reply: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(reply["userMessage"], "What are your projects?");
        assert_eq!(reply["aiResponse"], projects);
        assert_eq!(reply["sessionId"], "s1");
        assert!(reply["timestamp"].as_str().is_some());

        let req = test::TestRequest::get()
            .uri("/api/chat/history?sessionId=s1")
            .to_request();
        let history: Value = test::call_and_read_body_json(&app, req).await;

        let turns = history.as_array().unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0]["userMessage"], "What are your projects?");
        assert_eq!(turns[0]["aiResponse"], projects);
        assert_eq!(turns[0]["sessionId"], "s1");
        assert_eq!(turns[0]["timestamp"], reply["timestamp"]);
        assert!(turns[0]["id"].is_i64());

        let req = test::TestRequest::get()
            .uri("/api/chat/history?sessionId=other")
            .to_request();
        let other: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(other, json!([]));
    }

    #[actix_web::test]
    async fn test_session_defaults_when_absent() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({"message": "hello"}))
            .to_request();
        let reply: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reply["sessionId"], "default");

        let req = test::TestRequest::get().uri("/api/chat/history").to_request();
        let history: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_empty_message_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;

        for body in [json!({"message": "", "sessionId": "s1"}), json!({"message": "   "}), json!({})] {
            let req = test::TestRequest::post()
                .uri("/api/chat")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let error: Value = test::read_body_json(resp).await;
            assert_eq!(error["error"], "Empty message");
        }

        let req = test::TestRequest::get()
            .uri("/api/chat/history?sessionId=s1")
            .to_request();
        let history: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history, json!([]));
    }

    #[actix_web::test]
    async fn test_clear_is_idempotent() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;

        for message in ["skills", "contact"] {
            let req = test::TestRequest::post()
                .uri("/api/chat")
                .set_json(json!({"message": message, "sessionId": "s1"}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }

        let clear = || {
            test::TestRequest::post()
                .uri("/api/chat/clear")
                .set_json(json!({"sessionId": "s1"}))
                .to_request()
        };

        let first: Value = test::call_and_read_body_json(&app, clear()).await;
        assert_eq!(first, json!({"success": true, "deleted": 2}));

        let second: Value = test::call_and_read_body_json(&app, clear()).await;
        assert_eq!(second, json!({"success": true, "deleted": 0}));

        let req = test::TestRequest::get()
            .uri("/api/chat/history?sessionId=s1")
            .to_request();
        let history: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history, json!([]));
    }

    #[actix_web::test]
    async fn test_static_portfolio_routes() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let portfolio: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(portfolio["fullName"], "Vaibhav Sanap");
        assert!(portfolio["resumeContent"].as_str().unwrap().contains("PROJECTS:"));

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let projects: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(projects.as_array().unwrap().len(), 3);
        assert_eq!(projects[0]["id"], 1);
        assert_eq!(projects[0]["technologies"], json!(["React", "Node.js", "MongoDB"]));

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let skills: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(skills["devops"], json!([]));
        assert_eq!(skills["ai_ml"], json!(["OpenAI API", "NLP"]));

        let req = test::TestRequest::get().uri("/api/experience").to_request();
        let experience: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(experience[0]["company"], "Self Projects");
    }

    fn history_request(session: &str) -> test::TestRequest {
        test::TestRequest::get().uri(&format!("/api/chat/history?sessionId={}", session))
    }

    #[actix_web::test]
    async fn test_clear_with_unreadable_body_deletes_nothing() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;

        for (message, session) in [("skills", "default"), ("contact", "s1")] {
            let req = test::TestRequest::post()
                .uri("/api/chat")
                .set_json(json!({"message": message, "sessionId": session}))
                .to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }

        for payload in ["not json", r#"{"sessionId": 42}"#, r#"{"sessionId": "s1""#] {
            let req = test::TestRequest::post()
                .uri("/api/chat/clear")
                .insert_header(("content-type", "text/plain"))
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {payload}");
            let error: Value = test::read_body_json(resp).await;
            assert!(error["error"].as_str().unwrap().starts_with("Invalid request body"));
        }
        let history: Value =
            test::call_and_read_body_json(&app, history_request("default").to_request()).await;
        assert_eq!(history.as_array().unwrap().len(), 1);
        let history: Value =
            test::call_and_read_body_json(&app, history_request("s1").to_request()).await;
        assert_eq!(history.as_array().unwrap().len(), 1);

        // A readable body names its session regardless of content type.
        let req = test::TestRequest::post()
            .uri("/api/chat/clear")
            .insert_header(("content-type", "text/plain"))
            .set_payload(r#"{"sessionId": "s1"}"#)
            .to_request();
        let cleared: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(cleared, json!({"success": true, "deleted": 1}));
        let history: Value =
            test::call_and_read_body_json(&app, history_request("default").to_request()).await;
        assert_eq!(history.as_array().unwrap().len(), 1);
        let history: Value =
            test::call_and_read_body_json(&app, history_request("s1").to_request()).await;
        assert_eq!(history.as_array().unwrap().len(), 0);

        // No body at all means the default session.
        let req = test::TestRequest::post().uri("/api/chat/clear").to_request();
        let cleared: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(cleared, json!({"success": true, "deleted": 1}));
        let history: Value =
            test::call_and_read_body_json(&app, history_request("default").to_request()).await;
        assert_eq!(history.as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_chat_body_is_json_error() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .configure(foliochat::api::configure),
        )
        .await;

        let wrong_type = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({"message": 5}))
            .to_request();
        let wrong_content_type = test::TestRequest::post()
            .uri("/api/chat")
            .insert_header(("content-type", "text/plain"))
            .set_payload(r#"{"message": "hello"}"#)
            .to_request();

        for req in [wrong_type, wrong_content_type] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let error: Value = test::read_body_json(resp).await;
            assert!(error["error"].as_str().unwrap().starts_with("Invalid request"));
        }
        let history: Value =
            test::call_and_read_body_json(&app, history_request("default").to_request()).await;
        assert_eq!(history.as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_cross_origin_requests_allowed() {
        let app = test::init_service(
            App::new()
                .app_data(chat_service())
                .wrap(foliochat::api::cors())
                .configure(foliochat::api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/health")
            .insert_header(("origin", "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );

        let preflight = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/chat")
            .insert_header(("origin", "http://localhost:5173"))
            .insert_header(("access-control-request-method", "POST"))
            .insert_header(("access-control-request-headers", "content-type"))
            .to_request();
        let resp = test::call_service(&app, preflight).await;
        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key("access-control-allow-methods"));
    }
}

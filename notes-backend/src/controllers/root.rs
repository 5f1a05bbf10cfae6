use actix_web::{web, HttpResponse, Responder};

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Hello World!</h1>")
}

/// Fallback for any route no controller claims
pub async fn unknown_endpoint() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "unknown endpoint"
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_root_greeting() {
        let app = test::init_service(App::new().configure(config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "<h1>Hello World!</h1>");
    }

    #[actix_web::test]
    async fn test_unknown_endpoint() {
        let app = test::init_service(
            App::new()
                .configure(config)
                .default_service(web::to(unknown_endpoint)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "unknown endpoint");
    }
}

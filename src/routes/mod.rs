// Route exports
pub mod careers;
pub mod errors;

use actix_web::web;

pub use errors::{handle_form_payload_error, ApiError};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(careers::configure);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompareCareersRequest;
    use actix_web::{test, App, HttpResponse};

    async fn echo(form: web::Form<CompareCareersRequest>) -> HttpResponse {
        HttpResponse::Ok().json(form.into_inner())
    }

    #[actix_web::test]
    async fn test_malformed_form_is_json_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
                .route("/", web::post().to(echo)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("career_id_1=abc&career_id_2=2")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_form");
        assert_eq!(body["status_code"], 400);
    }

    #[actix_web::test]
    async fn test_well_formed_form_passes() {
        let app = test::init_service(
            App::new()
                .app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
                .route("/", web::post().to(echo)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("career_id_1", "1"), ("career_id_2", "2")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}

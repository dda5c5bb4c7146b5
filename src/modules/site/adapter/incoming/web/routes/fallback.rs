use actix_web::{http::header, HttpRequest, HttpResponse};

use crate::shared::api::ApiResponse;

/// Default service: unknown API routes get a JSON 404, every other path
/// is sent back to the landing page.
pub async fn unmatched_route_handler(req: HttpRequest) -> HttpResponse {
    let path = req.path();

    if path == "/api" || path.starts_with("/api/") {
        return ApiResponse::not_found("ROUTE_NOT_FOUND", "The requested endpoint does not exist");
    }

    HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};

    #[actix_web::test]
    async fn unknown_api_path_is_json_404() {
        let app = test::init_service(
            App::new().default_service(web::to(unmatched_route_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "ROUTE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn unknown_page_redirects_home() {
        let app = test::init_service(
            App::new().default_service(web::to(unmatched_route_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/pricing").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
}

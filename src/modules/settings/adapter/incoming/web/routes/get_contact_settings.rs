use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/settings/contact",
    tag = "settings",
    responses(
        (status = 200, description = "Contact details merged over defaults", body = crate::modules::settings::application::domain::ContactSettings)
    )
)]
#[get("/api/settings/contact")]
pub async fn get_contact_settings_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_contact_settings.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn returns_merged_settings() {
        // default stub serves the built-in defaults
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_contact_settings_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/settings/contact").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["contact_email"], "hello@stachbit.in");
        assert_eq!(body["data"]["business_hours"], "Mon-Fri: 9AM - 6PM IST");
        assert_eq!(body["data"]["contact_address"], "");
    }
}

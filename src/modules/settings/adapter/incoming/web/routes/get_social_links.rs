use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/settings/social",
    tag = "settings",
    responses(
        (status = 200, description = "Social profile links; empty string when unset", body = crate::modules::settings::application::domain::SocialLinks)
    )
)]
#[get("/api/settings/social")]
pub async fn get_social_links_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_social_links.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::settings::application::domain::SocialLinks;
    use crate::modules::settings::application::ports::incoming::use_cases::GetSocialLinksUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockSocialLinks;

    #[async_trait]
    impl GetSocialLinksUseCase for MockSocialLinks {
        async fn execute(&self) -> SocialLinks {
            SocialLinks {
                instagram: "https://instagram.com/stachbit".to_string(),
                ..SocialLinks::default()
            }
        }
    }

    #[actix_web::test]
    async fn returns_links() {
        let state = TestAppStateBuilder::default()
            .with_social_links(MockSocialLinks)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_social_links_handler)).await;

        let req = test::TestRequest::get().uri("/api/settings/social").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["instagram"], "https://instagram.com/stachbit");
        assert_eq!(body["data"]["twitter"], "");
    }
}

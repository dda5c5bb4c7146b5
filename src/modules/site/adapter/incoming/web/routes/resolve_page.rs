use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    shared::api::ApiResponse,
    site::application::domain::{resolve, PageMeta, PageResolution, SitePage},
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResolvePageQuery {
    /// Site path as typed in the browser, e.g. `/blog/my-post`
    pub path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum ResolvedPageResponse {
    Page {
        path: String,
        page: SitePage,
        /// Absent for articles; fetch `/api/blog/{slug}` for their head
        #[serde(skip_serializing_if = "Option::is_none")]
        meta: Option<PageMeta>,
        #[serde(skip_serializing_if = "Option::is_none")]
        head_html: Option<String>,
    },
    Redirect {
        location: String,
    },
}

#[utoipa::path(
    get,
    path = "/api/site/pages",
    tag = "site",
    params(ResolvePageQuery),
    responses(
        (status = 200, description = "Page or redirect for the given path", body = ResolvedPageResponse)
    )
)]
#[get("/api/site/pages")]
pub async fn resolve_page_handler(
    data: web::Data<AppState>,
    query: web::Query<ResolvePageQuery>,
) -> impl Responder {
    let path = query.path.as_deref().unwrap_or("/");

    let response = match resolve(path) {
        PageResolution::Page(page) => {
            let meta = page.static_meta(&data.site);
            let head_html = meta.as_ref().map(PageMeta::to_head_html);
            ResolvedPageResponse::Page {
                path: page.path(),
                page,
                meta,
                head_html,
            }
        }
        PageResolution::Redirect(location) => ResolvedPageResponse::Redirect { location },
    };

    ApiResponse::success(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn call(uri: &str) -> serde_json::Value {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(resolve_page_handler)).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn known_page_returns_meta_and_head() {
        let json = call("/api/site/pages?path=/services").await;

        assert_eq!(json["data"]["resolution"], "page");
        assert_eq!(json["data"]["page"]["page"], "services");
        assert_eq!(json["data"]["meta"]["document_title"], "Services | Stachbit");
        assert!(json["data"]["head_html"]
            .as_str()
            .unwrap()
            .contains("<title>Services | Stachbit</title>"));
    }

    #[actix_web::test]
    async fn article_path_resolves_without_static_meta() {
        let json = call("/api/site/pages?path=/blog/rust-tips").await;

        assert_eq!(json["data"]["page"]["page"], "blog_post");
        assert_eq!(json["data"]["page"]["slug"], "rust-tips");
        assert!(json["data"].get("meta").is_none());
    }

    #[actix_web::test]
    async fn unknown_path_redirects_home() {
        let json = call("/api/site/pages?path=/nope").await;

        assert_eq!(json["data"]["resolution"], "redirect");
        assert_eq!(json["data"]["location"], "/");
    }

    #[actix_web::test]
    async fn missing_path_means_landing() {
        let json = call("/api/site/pages").await;
        assert_eq!(json["data"]["page"]["page"], "landing");
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::blog::application::domain::{render, BlogPost, BlogPostSummary};
use crate::modules::blog::application::ports::incoming::use_cases::{
    BlogArticle, GetBlogPostError, GetBlogPostUseCase, ViewContext,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogListFilter, BlogQuery, BlogViewRepository, NewBlogView, PageWindow,
};
use crate::site::application::domain::{
    json_ld_script, ArticleMeta, ArticleStructuredData, PageMeta, PageMetaInput, ShareLinks,
    SiteProfile,
};

const RELATED_FETCH_LIMIT: u64 = 3;
const RELATED_MAX: usize = 2;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetBlogPostService<Q>
where
    Q: BlogQuery,
{
    query: Q,
    views: Arc<dyn BlogViewRepository + Send + Sync>,
    site: SiteProfile,
}

impl<Q> GetBlogPostService<Q>
where
    Q: BlogQuery,
{
    pub fn new(
        query: Q,
        views: Arc<dyn BlogViewRepository + Send + Sync>,
        site: SiteProfile,
    ) -> Self {
        Self { query, views, site }
    }

    /// Same-category posts other than `post`. Failures only cost the sidebar.
    async fn related_posts(&self, post: &BlogPost) -> Vec<BlogPostSummary> {
        let Some(category) = post.category.clone() else {
            return Vec::new();
        };

        let filter = BlogListFilter {
            category: Some(category),
            ..BlogListFilter::default()
        };

        match self
            .query
            .list_published(filter, PageWindow::first(RELATED_FETCH_LIMIT))
            .await
        {
            Ok(page) => page
                .items
                .iter()
                .filter(|candidate| candidate.id != post.id)
                .take(RELATED_MAX)
                .map(BlogPost::summary)
                .collect(),
            Err(e) => {
                warn!(slug = %post.slug, error = %e, "Failed to load related posts");
                Vec::new()
            }
        }
    }

    fn record_view(&self, post: &BlogPost, context: ViewContext) {
        let views = Arc::clone(&self.views);
        let view = NewBlogView {
            blog_id: post.id,
            referrer: context.referrer.filter(|r| !r.is_empty()),
            user_agent: context.user_agent.filter(|ua| !ua.is_empty()),
        };

        tokio::spawn(async move {
            if let Err(e) = views.record(view.clone()).await {
                warn!(blog_id = %view.blog_id, error = %e, "Failed to record blog view");
            }
        });
    }
}

fn article_meta(site: &SiteProfile, post: &BlogPost) -> PageMeta {
    let input = PageMetaInput {
        title: post.meta_title.clone().unwrap_or_else(|| post.title.clone()),
        description: post
            .meta_description
            .clone()
            .or_else(|| post.excerpt.clone())
            .unwrap_or_default(),
        keywords: post.meta_keywords.clone(),
        path: Some(post.path()),
        image: post.og_image.clone().or_else(|| post.featured_image.clone()),
    };

    PageMeta::article(
        site,
        input,
        ArticleMeta {
            author: Some(post.author_name.clone()),
            published_time: Some(post.published_or_created()),
            modified_time: Some(post.updated_at),
        },
    )
}

fn article_json_ld(site: &SiteProfile, post: &BlogPost) -> serde_json::Value {
    let path = post.path();
    let description = post
        .excerpt
        .as_deref()
        .or(post.meta_description.as_deref())
        .unwrap_or_default();

    ArticleStructuredData {
        headline: &post.title,
        description,
        image: post.og_image.as_deref().or(post.featured_image.as_deref()),
        path: &path,
        author: &post.author_name,
        published: post.published_or_created(),
        modified: Some(post.updated_at),
    }
    .to_json_ld(site)
}

#[async_trait]
impl<Q> GetBlogPostUseCase for GetBlogPostService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        context: ViewContext,
    ) -> Result<BlogArticle, GetBlogPostError> {
        let post = self
            .query
            .get_published_by_slug(slug)
            .await?
            .with_read_time();

        self.record_view(&post, context);

        let related = self.related_posts(&post).await;
        let blocks = render(&post.content);
        let meta = article_meta(&self.site, &post);
        let json_ld = article_json_ld(&self.site, &post);
        let share = ShareLinks::for_page(&meta.canonical_url, &post.title);

        info!(slug = %post.slug, blocks = blocks.len(), "Serving blog post");

        Ok(BlogArticle {
            head_html: meta.to_head_html(),
            json_ld_html: json_ld_script(&json_ld),
            post,
            blocks,
            related,
            meta,
            json_ld,
            share,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use tokio::sync::Notify;

    use crate::modules::blog::application::domain::Block;
    use crate::modules::blog::application::ports::outgoing::{
        BlogPage, BlogQueryError, BlogViewRepositoryError,
    };
    use crate::tests::support::fixtures::sample_blog_post;

    /* --------------------------------------------------
     * Mock BlogQuery
     * -------------------------------------------------- */

    struct MockBlogQuery {
        post: Result<BlogPost, BlogQueryError>,
        related: Result<BlogPage, BlogQueryError>,
        related_calls: Mutex<Vec<(BlogListFilter, PageWindow)>>,
    }

    impl MockBlogQuery {
        fn found(post: BlogPost) -> Self {
            Self {
                post: Ok(post),
                related: Ok(BlogPage {
                    items: vec![],
                    total: 0,
                }),
                related_calls: Mutex::new(Vec::new()),
            }
        }

        fn error(err: BlogQueryError) -> Self {
            Self {
                post: Err(err),
                related: Ok(BlogPage {
                    items: vec![],
                    total: 0,
                }),
                related_calls: Mutex::new(Vec::new()),
            }
        }

        fn with_related(mut self, related: Result<BlogPage, BlogQueryError>) -> Self {
            self.related = related;
            self
        }
    }

    #[async_trait]
    impl BlogQuery for MockBlogQuery {
        async fn list_published(
            &self,
            filter: BlogListFilter,
            window: PageWindow,
        ) -> Result<BlogPage, BlogQueryError> {
            self.related_calls.lock().unwrap().push((filter, window));
            self.related.clone()
        }

        async fn get_published_by_slug(&self, _slug: &str) -> Result<BlogPost, BlogQueryError> {
            self.post.clone()
        }

        async fn categories(&self) -> Result<Vec<String>, BlogQueryError> {
            unimplemented!("not used in GetBlogPostService tests")
        }
    }

    /* --------------------------------------------------
     * Recording BlogViewRepository
     * -------------------------------------------------- */

    #[derive(Default)]
    struct RecordingViews {
        should_fail: bool,
        recorded: Mutex<Vec<NewBlogView>>,
        notify: Notify,
    }

    impl RecordingViews {
        fn failing() -> Self {
            Self {
                should_fail: true,
                ..Self::default()
            }
        }

        async fn wait_until_recorded(&self) {
            self.notify.notified().await;
        }

        fn recorded(&self) -> Vec<NewBlogView> {
            self.recorded.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BlogViewRepository for RecordingViews {
        async fn record(&self, view: NewBlogView) -> Result<(), BlogViewRepositoryError> {
            self.recorded.lock().unwrap().push(view);
            self.notify.notify_one();

            if self.should_fail {
                Err(BlogViewRepositoryError::DatabaseError("insert failed".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn service(query: MockBlogQuery, views: Arc<RecordingViews>) -> GetBlogPostService<MockBlogQuery> {
        GetBlogPostService::new(query, views, SiteProfile::default())
    }

    fn context() -> ViewContext {
        ViewContext {
            referrer: Some("https://google.com/".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn builds_article_with_rendered_body_and_seo() {
        let views = Arc::new(RecordingViews::default());
        let post = sample_blog_post("fast-sites");
        let service = service(MockBlogQuery::found(post.clone()), Arc::clone(&views));

        let article = service.execute("fast-sites", context()).await.unwrap();

        assert_eq!(article.post.id, post.id);
        assert!(matches!(article.blocks[0], Block::Heading { level: 2, .. }));
        assert_eq!(article.meta.document_title, "Building Fast Websites | Stachbit");
        assert_eq!(article.meta.canonical_url, "https://stachbit.in/blog/fast-sites");
        assert_eq!(article.meta.description, "Why speed matters");
        assert_eq!(article.meta.image, "https://cdn.test/cover.png");
        assert_eq!(article.json_ld["headline"], "Building Fast Websites");
        assert_eq!(article.json_ld["dateModified"], "2025-01-20T08:30:00+00:00");
        assert!(article.json_ld_html.starts_with("<script type=\"application/ld+json\">"));
        assert!(article.head_html.contains("article:author"));
        assert!(article.share.linkedin.contains("share-offsite"));
    }

    #[tokio::test]
    async fn seo_overrides_take_precedence() {
        let mut post = sample_blog_post("fast-sites");
        post.meta_title = Some("Speed Guide".to_string());
        post.meta_description = Some("The speed guide".to_string());
        post.og_image = Some("https://cdn.test/og.png".to_string());
        post.published_at = None;

        let views = Arc::new(RecordingViews::default());
        let article = service(MockBlogQuery::found(post.clone()), views)
            .execute("fast-sites", ViewContext::default())
            .await
            .unwrap();

        assert_eq!(article.meta.title, "Speed Guide");
        assert_eq!(article.meta.description, "The speed guide");
        assert_eq!(article.meta.image, "https://cdn.test/og.png");
        // structured data keeps the real headline and prefers the excerpt
        assert_eq!(article.json_ld["headline"], "Building Fast Websites");
        assert_eq!(article.json_ld["description"], "Why speed matters");
        assert_eq!(
            article.meta.article.unwrap().published_time,
            Some(post.created_at)
        );
    }

    #[tokio::test]
    async fn records_view_with_request_details() {
        let views = Arc::new(RecordingViews::default());
        let post = sample_blog_post("fast-sites");
        let service = service(MockBlogQuery::found(post.clone()), Arc::clone(&views));

        service.execute("fast-sites", context()).await.unwrap();

        tokio::time::timeout(
            std::time::Duration::from_secs(1),
            views.wait_until_recorded(),
        )
        .await
        .expect("view should be recorded within 1 second");

        assert_eq!(
            views.recorded(),
            vec![NewBlogView {
                blog_id: post.id,
                referrer: Some("https://google.com/".to_string()),
                user_agent: Some("Mozilla/5.0".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn view_failure_does_not_fail_request() {
        let views = Arc::new(RecordingViews::failing());
        let service = service(
            MockBlogQuery::found(sample_blog_post("fast-sites")),
            Arc::clone(&views),
        );

        let result = service.execute("fast-sites", ViewContext::default()).await;
        assert!(result.is_ok());

        tokio::time::timeout(
            std::time::Duration::from_secs(1),
            views.wait_until_recorded(),
        )
        .await
        .expect("view should still be attempted");
    }

    #[tokio::test]
    async fn related_posts_exclude_self_and_cap_at_two() {
        let post = sample_blog_post("fast-sites");
        let mut others: Vec<BlogPost> = (1..=3)
            .map(|i| sample_blog_post(&format!("other-{i}")))
            .collect();
        others.insert(0, post.clone());

        let query = MockBlogQuery::found(post.clone()).with_related(Ok(BlogPage {
            items: others,
            total: 4,
        }));
        let views = Arc::new(RecordingViews::default());
        let service = service(query, views);

        let article = service.execute("fast-sites", ViewContext::default()).await.unwrap();

        let slugs: Vec<_> = article.related.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["other-1", "other-2"]);

        let calls = service.query.related_calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.category.as_deref(), Some("Web Development"));
        assert_eq!(calls[0].1, PageWindow::first(3));
    }

    #[tokio::test]
    async fn uncategorised_post_has_no_related_lookup() {
        let mut post = sample_blog_post("fast-sites");
        post.category = None;

        let views = Arc::new(RecordingViews::default());
        let service = service(MockBlogQuery::found(post), views);

        let article = service.execute("fast-sites", ViewContext::default()).await.unwrap();

        assert!(article.related.is_empty());
        assert!(service.query.related_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn related_failure_is_swallowed() {
        let query = MockBlogQuery::found(sample_blog_post("fast-sites"))
            .with_related(Err(BlogQueryError::DatabaseError("boom".to_string())));
        let views = Arc::new(RecordingViews::default());

        let article = service(query, views)
            .execute("fast-sites", ViewContext::default())
            .await
            .unwrap();

        assert!(article.related.is_empty());
    }

    #[tokio::test]
    async fn missing_post_is_not_found_and_records_nothing() {
        let views = Arc::new(RecordingViews::default());
        let service = service(
            MockBlogQuery::error(BlogQueryError::NotFound),
            Arc::clone(&views),
        );

        let result = service.execute("nope", context()).await;

        assert!(matches!(result, Err(GetBlogPostError::NotFound)));
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(views.recorded().is_empty());
    }

    #[tokio::test]
    async fn database_error_is_query_failed() {
        let views = Arc::new(RecordingViews::default());
        let service = service(
            MockBlogQuery::error(BlogQueryError::DatabaseError("down".to_string())),
            views,
        );

        let result = service.execute("fast-sites", ViewContext::default()).await;
        assert!(matches!(result, Err(GetBlogPostError::QueryFailed(msg)) if msg == "down"));
    }
}

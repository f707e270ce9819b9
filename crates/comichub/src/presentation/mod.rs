pub mod graphql;
pub mod rest;

use std::net::SocketAddr;

use anyhow::anyhow;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use self::{
    graphql::{graphql_handler, graphql_playground, schema, schema::ComicHubSchema},
    rest::health::health_check,
};
use crate::{
    domain::services::{chapter::ChapterService, comic::ComicService, page::PageService},
    infrastructure::domain::repositories::{
        chapter::ChapterRepositoryImpl, comic::ComicRepositoryImpl, page::PageRepositoryImpl,
    },
};

pub struct ServerBuilder {
    comic_svc: Option<ComicService<ComicRepositoryImpl>>,
    chapter_svc: Option<ChapterService<ChapterRepositoryImpl>>,
    page_svc: Option<PageService<PageRepositoryImpl>>,
    enable_playground: bool,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            comic_svc: None,
            chapter_svc: None,
            page_svc: None,
            enable_playground: false,
        }
    }

    pub fn with_comic_svc(self, comic_svc: ComicService<ComicRepositoryImpl>) -> Self {
        Self {
            comic_svc: Some(comic_svc),
            ..self
        }
    }

    pub fn with_chapter_svc(self, chapter_svc: ChapterService<ChapterRepositoryImpl>) -> Self {
        Self {
            chapter_svc: Some(chapter_svc),
            ..self
        }
    }

    pub fn with_page_svc(self, page_svc: PageService<PageRepositoryImpl>) -> Self {
        Self {
            page_svc: Some(page_svc),
            ..self
        }
    }

    pub fn enable_playground(self) -> Self {
        Self {
            enable_playground: true,
            ..self
        }
    }

    pub fn build(self) -> Result<Server, anyhow::Error> {
        let comic_svc = self.comic_svc.ok_or_else(|| anyhow!("no comic service"))?;
        let chapter_svc = self
            .chapter_svc
            .ok_or_else(|| anyhow!("no chapter service"))?;
        let page_svc = self.page_svc.ok_or_else(|| anyhow!("no page service"))?;

        let schema = schema::build(comic_svc, chapter_svc, page_svc);

        Ok(Server::new(self.enable_playground, schema))
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Server {
    router: Router,
}

impl Server {
    pub fn new(enable_playground: bool, schema: ComicHubSchema) -> Self {
        let mut router = Router::new().route("/health", get(health_check));

        if enable_playground {
            router = router.route("/graphql", get(graphql_playground).post(graphql_handler));
        } else {
            router = router.route("/graphql", post(graphql_handler));
        }

        router = router.layer(Extension(schema)).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

        Self { router }
    }

    pub async fn serve<A: Into<SocketAddr>>(self, addr: A) -> Result<(), anyhow::Error> {
        axum_server::bind(addr.into())
            .serve(self.router.into_make_service())
            .await?;

        Ok(())
    }
}

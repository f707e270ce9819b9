pub mod catalogue;
pub mod chapter;
pub mod comic;
pub mod page;
pub mod schema;
pub mod status;

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    response::{self, IntoResponse},
};

use self::schema::ComicHubSchema;

pub async fn graphql_handler(
    Extension(schema): Extension<ComicHubSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphql_playground() -> impl IntoResponse {
    response::Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

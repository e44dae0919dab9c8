//! GraphQL endpoint
//!
//! `POST /` and `POST /graphql` execute requests (single or batched).
//! `GET` on the same paths serves GraphiQL.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::graphql::UserSchema;

pub const ENDPOINT: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

pub fn router<S>(schema: UserSchema) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let service = GraphQL::new(schema);

    Router::new()
        .route("/", get(graphiql).post_service(service.clone()))
        .route(ENDPOINT, get(graphiql).post_service(service))
}

//! Plain controllers: domain objects serialized as-is, no hypermedia.

use axum::Router;

pub mod customers;
pub mod orders;

pub fn router() -> Router {
    Router::new()
        .merge(customers::router())
        .merge(orders::router())
}

//! Hypermedia controllers: resource envelopes carrying navigable links.

use axum::Router;

pub mod customers;
pub mod orders;

pub fn router() -> Router {
    Router::new()
        .merge(customers::router())
        .merge(orders::router())
}

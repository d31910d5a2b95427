use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use hypershop_core::{CustomerId, OrderId};
use hypershop_store::Order;

use crate::app::links::Route;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(Route::Orders.dispatch_path(), get(list_orders))
        .route(Route::Order.dispatch_path(), get(get_order))
        .route(
            Route::CustomerOrders.dispatch_path(),
            get(list_customer_orders),
        )
}

pub async fn list_orders(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<Order>> {
    Json(services.orders().find_all())
}

/// Missing ids intentionally answer 200 with a `null` body.
pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<OrderId>,
) -> Json<Option<Order>> {
    Json(services.orders().find_one(id))
}

/// Unlike the single-entity lookups, a missing customer here is a 404.
pub async fn list_customer_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CustomerId>,
) -> axum::response::Response {
    match services.customers().find_one(id) {
        Some(customer) => Json(services.orders().find_by_owner(&customer)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

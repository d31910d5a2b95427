use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    routing::get,
};

use hypershop_core::CustomerId;
use hypershop_store::Customer;

use crate::app::links::Route;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(Route::Customers.dispatch_path(), get(list_customers))
        .route(Route::Customer.dispatch_path(), get(get_customer))
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<Customer>> {
    Json(services.customers().find_all())
}

/// Missing ids intentionally answer 200 with a `null` body.
pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CustomerId>,
) -> Json<Option<Customer>> {
    Json(services.customers().find_one(id))
}

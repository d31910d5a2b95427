use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    routing::get,
};

use hypershop_core::CustomerId;
use hypershop_hypermedia::{Resource, Resources};
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
) -> Json<Resources<Customer>> {
    let resources = Resources::new(services.customers().find_all())
        .with_link(Route::Customers.link().with_self_rel());

    Json(resources)
}

/// No existence check: a missing id yields a links-only envelope.
pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CustomerId>,
) -> Json<Resource<Option<Customer>>> {
    let resource = Resource::new(services.customers().find_one(id))
        .with_link(Route::Customers.link().slash(id).with_self_rel());

    Json(resource)
}

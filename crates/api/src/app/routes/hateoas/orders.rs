use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use hypershop_core::{CustomerId, Entity, OrderId};
use hypershop_hypermedia::{ExpandError, Resource, Resources};
use hypershop_store::{Customer, LineItem, Order};

use crate::app::errors;
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

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Resources<Order>> {
    let resources = Resources::new(services.orders().find_all())
        .with_link(Route::Orders.link().with_self_rel());

    Json(resources)
}

/// No existence check: a missing id yields a links-only envelope.
pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<OrderId>,
) -> Json<Resource<Option<Order>>> {
    let resource = Resource::new(services.orders().find_one(id))
        .with_link(Route::Orders.link().slash(id).with_self_rel());

    Json(resource)
}

/// Representation of an order inside a customer's order list: line items
/// only, everything else reachable through the attached links.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderSummary {
    line_items: Vec<LineItem>,
}

pub async fn list_customer_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<CustomerId>,
) -> axum::response::Response {
    // Missing customers answer 200 with an empty body here, unlike the
    // plain controller's 404.
    let Some(customer) = services.customers().find_one(id) else {
        return StatusCode::OK.into_response();
    };

    match customer_orders_response(&services, id, &customer) {
        Ok(response) => response,
        Err(err) => errors::expand_error_to_response(err),
    }
}

fn customer_orders_response(
    services: &AppServices,
    id: CustomerId,
    customer: &Customer,
) -> Result<axum::response::Response, ExpandError> {
    let mut summaries = Vec::new();

    for order in services.orders().find_by_owner(customer) {
        let mut resource = Resource::new(OrderSummary {
            line_items: order.line_items().to_vec(),
        });
        resource.add(Route::Order.expand(&[&order.id()])?.with_self_rel());
        resource.add(Route::Customer.expand(&[&id])?.with_rel("customer"));

        summaries.push(resource);
    }

    let self_link = Route::CustomerOrders.expand(&[&id])?.with_self_rel();
    let resources = Resources::new(summaries).with_link(self_link.clone());

    // The collection's self link doubles as a `Link` response header.
    Ok((
        StatusCode::OK,
        [(header::LINK, self_link.to_string())],
        Json(resources),
    )
        .into_response())
}

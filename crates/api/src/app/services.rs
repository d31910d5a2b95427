//! Repository wiring shared by all handlers.

use std::sync::Arc;

use hypershop_core::DomainResult;
use hypershop_store::{Customers, InMemoryCustomers, InMemoryOrders, Orders};

/// Data-access collaborators handed to handlers via `Extension`.
#[derive(Clone)]
pub struct AppServices {
    customers: Arc<dyn Customers>,
    orders: Arc<dyn Orders>,
}

impl AppServices {
    pub fn customers(&self) -> &dyn Customers {
        self.customers.as_ref()
    }

    pub fn orders(&self) -> &dyn Orders {
        self.orders.as_ref()
    }
}

/// Seeds the in-memory repositories.
pub fn build_services() -> DomainResult<AppServices> {
    let customers = InMemoryCustomers::seeded();
    let orders = InMemoryOrders::seeded(&customers)?;

    tracing::debug!("seeded in-memory repositories");

    Ok(AppServices {
        customers: Arc::new(customers),
        orders: Arc::new(orders),
    })
}
